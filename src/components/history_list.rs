//! History List Component
//!
//! Recently generated ideas, newest first. Clicking one shows it again.

use leptos::prelude::*;

use crate::config::category_label;
use crate::store::{store_clear_history, store_show_from_history, use_app_store, AppStateStoreFields};

#[component]
pub fn HistoryList() -> impl IntoView {
    let store = use_app_store();
    let has_entries = move || store.history().with(|h| !h.is_empty());

    view! {
        <Show when=has_entries>
            <section class="history">
                <div class="history-header">
                    <h2>"История"</h2>
                    <button
                        class="history-clear-btn"
                        title="Очистить историю"
                        on:click=move |_| store_clear_history(&store)
                    >
                        "🗑"
                    </button>
                </div>
                <ul class="history-list">
                    {move || store.history().get().into_iter().map(|entry| {
                        let meta = format!("{} · {}", category_label(&entry.category), entry.timestamp);
                        let idea = entry.idea.clone();
                        view! {
                            <li
                                class="history-item"
                                on:click=move |_| store_show_from_history(&store, &entry)
                            >
                                <div class="history-idea">{idea}</div>
                                <div class="history-meta">{meta}</div>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </section>
        </Show>
    }
}
