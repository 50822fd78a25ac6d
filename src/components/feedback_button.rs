//! Feedback Button Component
//!
//! Like/dislike button that posts feedback for the current idea and briefly
//! swaps its icon to a confirmation mark.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::FEEDBACK_RESET_MS;
use crate::models::FeedbackKind;
use crate::store::{use_app_store, AppStateStoreFields};

/// Confirmation mark on a feedback button. Every accepted click takes a new
/// ticket, and only the latest ticket may clear the mark.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Confirmation {
    ticket: u32,
    shown: bool,
}

impl Confirmation {
    fn show(&mut self) -> u32 {
        self.ticket = self.ticket.wrapping_add(1);
        self.shown = true;
        self.ticket
    }

    fn expire(&mut self, ticket: u32) {
        if self.ticket == ticket {
            self.shown = false;
        }
    }
}

#[component]
pub fn FeedbackButton(kind: FeedbackKind) -> impl IntoView {
    let store = use_app_store();
    let confirmation = RwSignal::new(Confirmation::default());

    let on_click = move |_| {
        let Some(idea) = store.status().with_untracked(|s| s.idea().map(str::to_string)) else {
            return;
        };
        let base = store.api_base().get_untracked();

        spawn_local(async move {
            match api::send_feedback(&base, &idea, kind).await {
                Ok(()) => {
                    let ticket = confirmation.try_update(|c| c.show()).unwrap_or_default();
                    TimeoutFuture::new(FEEDBACK_RESET_MS).await;
                    confirmation.update(|c| c.expire(ticket));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[API] feedback failed: {}", e).into());
                }
            }
        });
    };

    let class = match kind {
        FeedbackKind::Like => "action-btn like-btn",
        FeedbackKind::Dislike => "action-btn dislike-btn",
    };

    view! {
        <button class=class on:click=on_click>
            {move || if confirmation.with(|c| c.shown) { kind.sent_icon() } else { kind.icon() }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_expires_after_its_own_timer() {
        let mut c = Confirmation::default();
        let ticket = c.show();
        assert!(c.shown);
        c.expire(ticket);
        assert!(!c.shown);
    }

    #[test]
    fn test_stale_timer_keeps_newer_confirmation() {
        let mut c = Confirmation::default();
        let first = c.show();
        let second = c.show();

        // first click's timer fires while the second mark should still show
        c.expire(first);
        assert!(c.shown);

        c.expire(second);
        assert!(!c.shown);
    }
}
