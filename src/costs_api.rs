use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::error::FetchError;
use crate::models::CostPage;

const COSTS_PATH: &str = "/organization/costs";
const REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Anything that can hand out pages of the costs report.
pub trait CostSource {
    fn fetch_page(&self, start_time: i64, cursor: Option<&str>) -> Result<CostPage, FetchError>;
}

/// Blocking client for `GET /v1/organization/costs`.
pub struct CostsClient {
    agent: ureq::Agent,
    endpoint: String,
    api_key: String,
}

impl CostsClient {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECONDS)))
            .http_status_as_error(false)
            .build()
            .into();

        CostsClient {
            agent,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), COSTS_PATH),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone(), &config.base_url)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CostSource for CostsClient {
    fn fetch_page(&self, start_time: i64, cursor: Option<&str>) -> Result<CostPage, FetchError> {
        debug!(endpoint = %self.endpoint, start_time, ?cursor, "requesting costs page");

        let mut request = self
            .agent
            .get(&self.endpoint)
            .query("start_time", start_time.to_string())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json");
        if let Some(cursor) = cursor {
            request = request.query("page", cursor);
        }

        let mut response = request
            .call()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.body_mut().read_to_string().unwrap_or_default();
            let body = serde_json::from_str::<serde_json::Value>(&raw).ok();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
                raw,
            });
        }

        let page: CostPage = response
            .body_mut()
            .read_json()
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        debug!(
            buckets = page.data.as_ref().map(Vec::len).unwrap_or(0),
            has_more = page.has_more,
            "received costs page"
        );
        Ok(page)
    }
}
