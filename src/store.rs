//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::{
    DEFAULT_CATEGORY, ERROR_TEXT, GENERATE_LABEL, GENERATING_LABEL, THINKING_TEXT,
};
use crate::history;
use crate::models::HistoryEntry;

/// Idea generation lifecycle
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GenerateStatus {
    #[default]
    Idle,
    Loading,
    Ready(String),
    Failed,
}

impl GenerateStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, GenerateStatus::Loading)
    }

    /// The idea feedback and share act on
    pub fn idea(&self) -> Option<&str> {
        match self {
            GenerateStatus::Ready(idea) => Some(idea.as_str()),
            _ => None,
        }
    }

    /// Generate button label
    pub fn button_label(&self) -> &'static str {
        if self.is_loading() { GENERATING_LABEL } else { GENERATE_LABEL }
    }

    /// Text for the idea box, `None` keeps the box hidden
    pub fn display_text(&self) -> Option<&str> {
        match self {
            GenerateStatus::Idle => None,
            GenerateStatus::Loading => Some(THINKING_TEXT),
            GenerateStatus::Ready(idea) => Some(idea.as_str()),
            GenerateStatus::Failed => Some(ERROR_TEXT),
        }
    }

    /// Like / dislike / regenerate row visibility
    pub fn shows_actions(&self) -> bool {
        matches!(self, GenerateStatus::Ready(_))
    }

    /// Host main button ("share") visibility
    pub fn can_share(&self) -> bool {
        self.idea().is_some()
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Resolved backend origin, no trailing slash
    pub api_base: String,
    /// Selected category value
    pub category: String,
    pub status: GenerateStatus,
    /// Views counter: server value plus local generations
    pub count: u64,
    /// Most recent first
    pub history: Vec<HistoryEntry>,
}

impl AppState {
    pub fn new(api_base: String, history: Vec<HistoryEntry>) -> Self {
        Self {
            api_base,
            category: DEFAULT_CATEGORY.to_string(),
            history,
            ..Default::default()
        }
    }

    /// A generation succeeded: show it, count it, remember it
    pub fn apply_generated(&mut self, idea: String, entry: HistoryEntry) {
        self.status = GenerateStatus::Ready(idea);
        self.count += 1;
        history::record(&mut self.history, entry);
    }

    /// Show an old idea again. Not a generation, so count and history stay.
    pub fn apply_from_history(&mut self, entry: &HistoryEntry) {
        self.status = GenerateStatus::Ready(entry.idea.clone());
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_start_loading(store: &AppStore) {
    store.status().set(GenerateStatus::Loading);
}

/// Show a freshly generated idea, bump the counter and remember it
pub fn store_idea_generated(store: &AppStore, idea: String, category: &str) {
    let entry = history::new_entry(&idea, category);
    let mut state = store.write();
    state.apply_generated(idea, entry);
    history::save(&state.history);
}

pub fn store_generation_failed(store: &AppStore) {
    store.status().set(GenerateStatus::Failed);
}

/// Re-show an idea picked from history
pub fn store_show_from_history(store: &AppStore, entry: &HistoryEntry) {
    store.write().apply_from_history(entry);
}

pub fn store_clear_history(store: &AppStore) {
    history::clear();
    store.history().write().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_hides_everything() {
        let status = GenerateStatus::Idle;
        assert_eq!(status.display_text(), None);
        assert!(!status.shows_actions());
        assert_eq!(status.idea(), None);
        assert_eq!(status.button_label(), GENERATE_LABEL);
    }

    #[test]
    fn test_loading_state() {
        let status = GenerateStatus::Loading;
        assert!(status.is_loading());
        assert_eq!(status.button_label(), GENERATING_LABEL);
        assert_eq!(status.display_text(), Some(THINKING_TEXT));
        assert!(!status.shows_actions());
    }

    #[test]
    fn test_ready_shows_idea_verbatim() {
        let idea = "**Не markdown** <b>и не html</b>";
        let status = GenerateStatus::Ready(idea.to_string());
        assert_eq!(status.display_text(), Some(idea));
        assert_eq!(status.idea(), Some(idea));
        assert!(status.shows_actions());
        assert_eq!(status.button_label(), GENERATE_LABEL);
    }

    #[test]
    fn test_failed_shows_error_without_actions() {
        let status = GenerateStatus::Failed;
        assert_eq!(status.display_text(), Some(ERROR_TEXT));
        assert!(!status.shows_actions());
        assert_eq!(status.idea(), None);
        assert_eq!(status.button_label(), GENERATE_LABEL);
    }

    fn entry(idea: &str) -> HistoryEntry {
        HistoryEntry {
            idea: idea.to_string(),
            category: "psx".to_string(),
            timestamp: "18.10.2026 12:00".to_string(),
        }
    }

    #[test]
    fn test_generated_bumps_count_and_history() {
        let mut state = AppState::new(String::new(), Vec::new());

        state.apply_generated("First".into(), entry("First"));
        assert_eq!(state.count, 1);
        state.apply_generated("Second".into(), entry("Second"));
        assert_eq!(state.count, 2);

        assert_eq!(state.status, GenerateStatus::Ready("Second".into()));
        let ideas: Vec<_> = state.history.iter().map(|e| e.idea.as_str()).collect();
        assert_eq!(ideas, vec!["Second", "First"]);
    }

    #[test]
    fn test_generated_adds_to_server_count() {
        let mut state = AppState::new(String::new(), Vec::new());
        state.count = 41;
        state.apply_generated("Idea".into(), entry("Idea"));
        assert_eq!(state.count, 42);
    }

    #[test]
    fn test_history_pick_keeps_count_and_history() {
        let mut state = AppState::new(String::new(), vec![entry("Newer"), entry("Older")]);
        state.count = 5;
        state.status = GenerateStatus::Failed;

        let picked = state.history[1].clone();
        state.apply_from_history(&picked);

        assert_eq!(state.status, GenerateStatus::Ready("Older".into()));
        assert!(state.status.can_share());
        assert_eq!(state.count, 5);
        assert_eq!(state.history, vec![entry("Newer"), entry("Older")]);
    }

    #[test]
    fn test_share_only_when_ready() {
        assert!(!GenerateStatus::Idle.can_share());
        assert!(!GenerateStatus::Loading.can_share());
        assert!(!GenerateStatus::Failed.can_share());
        assert!(GenerateStatus::Ready("x".into()).can_share());
    }

    #[test]
    fn test_new_state_defaults() {
        let state = AppState::new("https://ezhik.app".into(), Vec::new());
        assert_eq!(state.category, DEFAULT_CATEGORY);
        assert_eq!(state.status, GenerateStatus::Idle);
        assert_eq!(state.count, 0);
    }
}
