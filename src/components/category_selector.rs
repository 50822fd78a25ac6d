//! Category Selector Component
//!
//! Dropdown of idea categories, bound to the store.

use leptos::prelude::*;

use crate::config::CATEGORIES;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategorySelector() -> impl IntoView {
    let store = use_app_store();
    let disabled = move || store.status().with(|s| s.is_loading());

    view! {
        <label class="category-row">
            <span class="category-caption">"Категория"</span>
            <select
                id="category"
                class="category-select"
                prop:disabled=disabled
                on:change=move |ev| store.category().set(event_target_value(&ev))
            >
                {CATEGORIES.iter().map(|(value, label)| {
                    let value = *value;
                    let is_selected = move || store.category().with(|c| c == value);
                    view! {
                        <option value=value selected=is_selected>{*label}</option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
