//! UI Components
//!
//! Reusable Leptos components.

mod category_selector;
mod feedback_button;
mod idea_card;
mod stats_counter;
mod history_list;

pub use category_selector::CategorySelector;
pub use feedback_button::FeedbackButton;
pub use idea_card::IdeaCard;
pub use stats_counter::StatsCounter;
pub use history_list::HistoryList;
