//! Idea History
//!
//! Most-recent-first list of generated ideas, persisted to localStorage.

use chrono::{DateTime, Local, TimeZone};
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

use crate::config::{HISTORY_KEY, HISTORY_LIMIT};
use crate::models::HistoryEntry;

/// Load history from localStorage. Any failure yields an empty list.
pub fn load() -> Vec<HistoryEntry> {
    match LocalStorage::get::<Vec<HistoryEntry>>(HISTORY_KEY) {
        Ok(entries) => cap(entries),
        Err(StorageError::KeyNotFound(_)) => Vec::new(),
        Err(e) => {
            web_sys::console::error_1(&format!("[HISTORY] load failed: {}", e).into());
            Vec::new()
        }
    }
}

/// Persist history, logging failures
pub fn save(entries: &[HistoryEntry]) {
    if let Err(e) = LocalStorage::set(HISTORY_KEY, entries) {
        web_sys::console::error_1(&format!("[HISTORY] save failed: {}", e).into());
    }
}

/// Drop the stored history
pub fn clear() {
    LocalStorage::delete(HISTORY_KEY);
}

/// Keep at most `HISTORY_LIMIT` entries, newest first
pub fn cap(mut entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    entries.truncate(HISTORY_LIMIT);
    entries
}

/// Insert `entry` at the front, dropping the oldest past the limit
pub fn record(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    entries.insert(0, entry);
    entries.truncate(HISTORY_LIMIT);
}

/// Build an entry stamped with the current local time
pub fn new_entry(idea: &str, category: &str) -> HistoryEntry {
    HistoryEntry {
        idea: idea.to_string(),
        category: category.to_string(),
        timestamp: format_timestamp(&Local::now()),
    }
}

/// `DD.MM.YYYY HH:MM`
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d.%m.%Y %H:%M").to_string()
}
