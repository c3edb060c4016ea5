use reqwest::{Client, StatusCode};

use crate::error::FetchError;
use crate::models::{StressPayload, StressSeries};
use crate::series::build_series;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_error, log_info, log_warn};

/// Single-shot client for the stress-level endpoint.
///
/// One POST per call carrying `user_id` as a form field. No retries; timeouts
/// are whatever the transport defaults to.
#[derive(Clone)]
pub struct StressFetcher {
    client: Client,
    url: String,
}

impl StressFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch a user's series, or `None` when nothing usable came back.
    ///
    /// Every failure is logged here and never reaches the caller.
    pub async fn fetch(&self, user_id: i64) -> Option<StressSeries> {
        match self.try_fetch(user_id).await {
            Ok(series) => {
                log_info!("Fetched {} stress records for user {}", series.len(), user_id);
                Some(series)
            }
            Err(FetchError::Status(status)) => {
                log_warn!(
                    "Failed to retrieve stress level data from the backend (status {})",
                    status
                );
                None
            }
            Err(err) => {
                log_error!("An error occurred while fetching stress data: {err}");
                None
            }
        }
    }

    pub async fn try_fetch(&self, user_id: i64) -> Result<StressSeries, FetchError> {
        log_debug!("POST {} user_id={}", self.url, user_id);

        let response = self
            .client
            .post(&self.url)
            .form(&[("user_id", user_id.to_string())])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        decode_body(&body)
    }
}

/// Decode a 200 response body into a series.
pub fn decode_body(body: &str) -> Result<StressSeries, FetchError> {
    let payload: StressPayload = serde_json::from_str(body)?;
    Ok(build_series(payload)?)
}
