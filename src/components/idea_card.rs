//! Idea Card Component
//!
//! Shows the current idea (or loading/error text) with the action row.

use leptos::prelude::*;

use crate::components::FeedbackButton;
use crate::models::FeedbackKind;
use crate::store::{use_app_store, AppStateStoreFields};

/// Idea box with like / dislike / regenerate actions
///
/// # Arguments
/// * `on_regenerate` - Runs another generation for the selected category
#[component]
pub fn IdeaCard(#[prop(into)] on_regenerate: Callback<()>) -> impl IntoView {
    let store = use_app_store();

    let visible = move || store.status().with(|s| s.display_text().is_some());
    let text = move || store.status().with(|s| s.display_text().unwrap_or_default().to_string());
    let text_class = move || {
        if store.status().with(|s| s.is_loading()) { "idea-text loading" } else { "idea-text" }
    };
    let show_actions = move || store.status().with(|s| s.shows_actions());

    view! {
        <Show when=visible>
            <div id="idea-box" class="idea-box">
                <p class=text_class>{text}</p>
                <Show when=show_actions>
                    <div id="actions" class="actions">
                        <FeedbackButton kind=FeedbackKind::Like />
                        <FeedbackButton kind=FeedbackKind::Dislike />
                        <button
                            class="action-btn regen-btn"
                            on:click=move |_| on_regenerate.run(())
                        >
                            "🔄"
                        </button>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
