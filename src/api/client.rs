use crate::config::Config;
use crate::error::AppError;
use std::time::Duration;
use tracing::debug;

use super::endpoints;
use super::models::*;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "league_finder/0.1.0";

/// Anything that can answer a paged summoner search.
pub trait MatchSource {
    fn search(&self, request: &SearchRequest) -> Result<Vec<Participant>, AppError>;
}

pub struct BackendClient {
    agent: ureq::Agent,
    search_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build();
        BackendClient {
            agent,
            search_url: endpoints::search_url(&config.backend_url),
        }
    }
}

impl MatchSource for BackendClient {
    fn search(&self, request: &SearchRequest) -> Result<Vec<Participant>, AppError> {
        debug!(
            url = %request.url,
            region = %request.region,
            start = request.start,
            count = request.count,
            "POST {}",
            self.search_url
        );

        let response = self
            .agent
            .post(&self.search_url)
            .set("Content-Type", "application/json")
            .send_json(request);

        match response {
            Ok(resp) => {
                let body: SearchResponse = resp
                    .into_json()
                    .map_err(|e| AppError::JsonError(e.to_string()))?;
                body.data.ok_or_else(|| {
                    AppError::JsonError("response is missing the `data` field".to_string())
                })
            }
            Err(ureq::Error::Status(code, resp)) => {
                let text = resp.into_string().unwrap_or_default();
                Err(AppError::ApiError(error_message(code, &text)))
            }
            Err(e) => Err(AppError::HttpError(e.to_string())),
        }
    }
}

/// Pulls the user-facing message out of a failed response body.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Backend returned status {}", status)
    } else {
        trimmed.to_string()
    }
}
