//! Local weather API client

use tracing::{debug, info, warn};

use crate::action::Action;
use crate::error::FetchError;
use crate::state::WeatherResult;

/// Where the weather API listens unless told otherwise
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Build the lookup URL: `{base}/?location={encoded}`
pub fn lookup_url(base_url: &str, location: &str) -> String {
    format!(
        "{}/?location={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(location)
    )
}

/// Client for the `GET /?location=` endpoint
#[derive(Clone, Debug)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current weather for `location`.
    ///
    /// The text is sent as-is (empty included); whatever the API returns is
    /// passed through without validation.
    pub async fn fetch(&self, location: &str) -> Result<WeatherResult, FetchError> {
        let url = lookup_url(&self.base_url, location);
        debug!(%url, "requesting weather");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let data: WeatherResult = response.json().await.map_err(FetchError::Decode)?;
        debug!(?data, "weather received");
        Ok(data)
    }
}

/// Run one lookup and turn the outcome into the action that reports it.
///
/// Failures are logged here and reduced to their message.
pub async fn lookup_action(client: &WeatherClient, request_id: u64, location: String) -> Action {
    match client.fetch(&location).await {
        Ok(data) => {
            info!(request_id, %location, "weather lookup succeeded");
            Action::WeatherDidLoad { request_id, data }
        }
        Err(e) => {
            warn!(request_id, %location, error = %e, "weather lookup failed");
            Action::WeatherDidError {
                request_id,
                error: e.to_string(),
            }
        }
    }
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
