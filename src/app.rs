//! Ezhik Ideas App
//!
//! Root component: wires the store, the Telegram host and the idea backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use telegram_webapp::WebApp;

use crate::api;
use crate::components::{CategorySelector, HistoryList, IdeaCard, StatsCounter};
use crate::config::{self, SHARE_LABEL, SHARE_PREFIX};
use crate::history;
use crate::store::{
    store_generation_failed, store_idea_generated, store_start_loading, AppState,
    AppStateStoreFields, AppStore,
};

#[component]
pub fn App() -> impl IntoView {
    let api_base = config::api_base();
    web_sys::console::log_1(&format!("[APP] api base: {:?}", api_base).into());

    let store: AppStore = Store::new(AppState::new(api_base, history::load()));
    provide_context(store);

    match WebApp::get() {
        Some(tg) => {
            tg.init();
            apply_theme(tg.theme());
            let share_tg = tg.clone();
            tg.on_main_button_click(move || {
                let Some(idea) = store.status().with_untracked(|s| s.idea().map(str::to_string)) else {
                    return;
                };
                let base = store.api_base().get_untracked();
                share_tg.share(&base, &format!("{}{}", SHARE_PREFIX, idea));
            });
        }
        None => web_sys::console::log_1(&"[TELEGRAM] not running inside Telegram".into()),
    }

    // Share button follows the status: visible only while an idea is shown
    Effect::new(move |_| {
        let can_share = store.status().with(|s| s.can_share());
        if let Some(tg) = WebApp::get() {
            if can_share {
                tg.show_main_button(SHARE_LABEL);
            } else {
                tg.hide_main_button();
            }
        }
    });

    // Load stats on mount
    Effect::new(move |_| {
        let base = store.api_base().get_untracked();
        spawn_local(async move {
            match api::fetch_stats(&base).await {
                Ok(count) => store.count().set(count),
                Err(e) => web_sys::console::error_1(&format!("[API] stats failed: {}", e).into()),
            }
        });
    });

    let generate = move || {
        if store.status().with_untracked(|s| s.is_loading()) {
            return;
        }
        let base = store.api_base().get_untracked();
        let category = store.category().get_untracked();
        store_start_loading(&store);

        spawn_local(async move {
            match api::fetch_idea(&base, &category).await {
                Ok(idea) => {
                    store_idea_generated(&store, idea, &category);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[API] idea failed: {}", e).into());
                    store_generation_failed(&store);
                }
            }
        });
    };
    let on_generate = Callback::new(move |_: ()| generate());

    view! {
        <div class="app">
            <header class="header">
                <h1>"🦔 Ежик Идей"</h1>
                <StatsCounter />
            </header>

            <main class="main-content">
                <CategorySelector />

                <button
                    id="generate-btn"
                    class="generate-btn"
                    prop:disabled=move || store.status().with(|s| s.is_loading())
                    on:click=move |_| on_generate.run(())
                >
                    {move || store.status().with(|s| s.button_label())}
                </button>

                <IdeaCard on_regenerate=on_generate />

                <HistoryList />
            </main>
        </div>
    }
}

/// Mirror the host color scheme onto `<body data-theme=...>`
fn apply_theme(theme: Option<String>) {
    let Some(theme) = theme else { return };
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        if let Err(e) = body.set_attribute("data-theme", &theme) {
            web_sys::console::warn_1(&e);
        }
    }
}
