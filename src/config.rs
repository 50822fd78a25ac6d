//! App Configuration
//!
//! Fixed constants and API base URL resolution.

use wasm_bindgen::JsCast;

/// localStorage key holding the idea history
pub const HISTORY_KEY: &str = "ezhik_history_v2";

/// Max history entries kept
pub const HISTORY_LIMIT: usize = 10;

/// How long the ✅/❌ confirmation stays on a feedback button
pub const FEEDBACK_RESET_MS: u32 = 1000;

/// `<meta name=...>` that overrides the API base
pub const API_BASE_META: &str = "ezhik-api-base";

/// Category options (value sent to backend, label shown)
pub const CATEGORIES: &[(&str, &str)] = &[
    ("бизнес", "💼 Бизнес"),
    ("игры", "🎮 Игры"),
    ("приложения", "📱 Приложения"),
    ("3d", "🧊 3D"),
    ("psx", "📼 PSX-ассеты"),
    ("стартап", "🚀 Стартап"),
];

pub const DEFAULT_CATEGORY: &str = "бизнес";

// UI strings
pub const GENERATE_LABEL: &str = "Сгенерировать идею ✨";
pub const GENERATING_LABEL: &str = "Думаю... 💭";
pub const THINKING_TEXT: &str = "Ежик думает...";
pub const ERROR_TEXT: &str = "Ошибка 😢 Попробуй ещё раз";
pub const SHARE_LABEL: &str = "Поделиться";
pub const SHARE_PREFIX: &str = "Попробуй эту идею: ";

/// Label for a category value, falls back to the raw value
pub fn category_label(value: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// Resolve the API base: meta override first, then `window.location.origin`
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };

    let meta_override = window
        .document()
        .and_then(|doc| {
            doc.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                .ok()
                .flatten()
        })
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content());

    let base = match meta_override {
        Some(content) if !content.trim().is_empty() => content,
        _ => window.location().origin().unwrap_or_default(),
    };
    normalize_base(&base)
}

/// Trim whitespace and trailing slashes so paths can be appended with `/api/...`
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("https://ezhik.app/"), "https://ezhik.app");
        assert_eq!(normalize_base(" https://ezhik.app// "), "https://ezhik.app");
        assert_eq!(normalize_base("http://localhost:8080"), "http://localhost:8080");
        assert_eq!(normalize_base(""), "");
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("psx"), "📼 PSX-ассеты");
        assert_eq!(category_label("unknown"), "unknown");
    }

    #[test]
    fn test_default_category_is_listed() {
        assert!(CATEGORIES.iter().any(|(v, _)| *v == DEFAULT_CATEGORY));
    }
}
