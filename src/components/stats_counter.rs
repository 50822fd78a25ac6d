//! Stats Counter Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsCounter() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="stats">
            "Идей сгенерировано: "
            <span id="stats-count">{move || store.count().get()}</span>
        </div>
    }
}
