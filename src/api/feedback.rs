//! Feedback Endpoint

use super::post_json;
use crate::error::ApiResult;
use crate::models::{FeedbackKind, FeedbackRequest};

pub fn feedback_url(base: &str) -> String {
    format!("{}/api/feedback", base)
}

/// Report a like/dislike for `idea`. Only success or failure matters.
pub async fn send_feedback(base: &str, idea: &str, feedback: FeedbackKind) -> ApiResult<()> {
    post_json(&feedback_url(base), &FeedbackRequest { idea, feedback }).await
}
