//! Stats Endpoint

use super::get_json;
use crate::error::ApiResult;
use crate::models::StatsResponse;

pub fn stats_url(base: &str) -> String {
    format!("{}/api/stats", base)
}

/// Server-side generation counter
pub async fn fetch_stats(base: &str) -> ApiResult<u64> {
    let resp: StatsResponse = get_json(&stats_url(base)).await?;
    Ok(resp.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::feedback_url;

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(stats_url("http://localhost:8080"), "http://localhost:8080/api/stats");
        assert_eq!(feedback_url("http://localhost:8080"), "http://localhost:8080/api/feedback");
    }
}
