//! Idea Endpoint

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::get_json;
use crate::error::ApiResult;
use crate::models::IdeaResponse;

/// `{base}/api/idea?category=...`
pub fn idea_url(base: &str, category: &str) -> String {
    format!(
        "{}/api/idea?category={}",
        base,
        utf8_percent_encode(category, NON_ALPHANUMERIC)
    )
}

/// Ask the backend for a fresh idea in `category`
pub async fn fetch_idea(base: &str, category: &str) -> ApiResult<String> {
    let url = idea_url(base, category);
    web_sys::console::log_1(&format!("[API] GET {}", url).into());
    let resp: IdeaResponse = get_json(&url).await?;
    Ok(resp.idea)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_url_ascii() {
        assert_eq!(idea_url("https://ezhik.app", "psx"), "https://ezhik.app/api/idea?category=psx");
    }

    #[test]
    fn test_idea_url_encodes_cyrillic_and_reserved() {
        // "игры" in UTF-8
        assert_eq!(
            idea_url("", "игры"),
            "/api/idea?category=%D0%B8%D0%B3%D1%80%D1%8B"
        );
        assert_eq!(idea_url("", "a&b=c"), "/api/idea?category=a%26b%3Dc");
    }
}
