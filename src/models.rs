//! Frontend Models
//!
//! Wire types for the idea backend and the locally stored history.

use serde::{Deserialize, Serialize};

/// `GET /api/idea` response (other fields are ignored)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdeaResponse {
    pub idea: String,
}

/// `GET /api/stats` response
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StatsResponse {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub count: u64,
}

fn count_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Like / dislike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Like,
    Dislike,
}

impl FeedbackKind {
    /// Resting button label
    pub fn icon(self) -> &'static str {
        match self {
            FeedbackKind::Like => "👍",
            FeedbackKind::Dislike => "👎",
        }
    }

    /// Label shown briefly after the feedback was accepted
    pub fn sent_icon(self) -> &'static str {
        match self {
            FeedbackKind::Like => "✅",
            FeedbackKind::Dislike => "❌",
        }
    }
}

/// `POST /api/feedback` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRequest<'a> {
    pub idea: &'a str,
    pub feedback: FeedbackKind,
}

/// One remembered idea
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub idea: String,
    pub category: String,
    /// Local time, `DD.MM.YYYY HH:MM`
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_body_shape() {
        let body = FeedbackRequest { idea: "Ёж-таймер", feedback: FeedbackKind::Dislike };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "idea": "Ёж-таймер", "feedback": "dislike" }));
    }

    #[test]
    fn test_idea_response_ignores_extra_fields() {
        let resp: IdeaResponse =
            serde_json::from_str(r#"{"idea":"Low-poly vending machine","category":"psx"}"#).unwrap();
        assert_eq!(resp.idea, "Low-poly vending machine");
    }

    #[test]
    fn test_stats_count_defaults_to_zero() {
        let missing: StatsResponse = serde_json::from_str("{}").unwrap();
        let null: StatsResponse = serde_json::from_str(r#"{"count":null}"#).unwrap();
        let set: StatsResponse = serde_json::from_str(r#"{"count":42}"#).unwrap();
        assert_eq!(missing.count, 0);
        assert_eq!(null.count, 0);
        assert_eq!(set.count, 42);
    }

    #[test]
    fn test_feedback_icons() {
        assert_eq!(FeedbackKind::Like.icon(), "👍");
        assert_eq!(FeedbackKind::Like.sent_icon(), "✅");
        assert_eq!(FeedbackKind::Dislike.icon(), "👎");
        assert_eq!(FeedbackKind::Dislike.sent_icon(), "❌");
    }
}
