//! HTTP client for the football-manager player API.
//!
//! Every call is a single GET with the two RapidAPI headers and a fixed
//! timeout. Nothing is cached or retried; callers decide what to do with
//! a failure.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use super::query::{QueryItem, SearchParameters, search_parameters_to_query_items};
use super::types::Player;

pub const DEFAULT_BASE_URL: &str = "https://football-manager-api.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "football-manager-api.p.rapidapi.com";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Errors that can occur while fetching from the API.
/// All of them end the request; there is no retry at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The URL string (or URL composition) was not a valid absolute URL.
    InvalidInputs(String),
    /// Transport failure: DNS, connection refused, timeout.
    UnableToComplete(String),
    /// Anything other than HTTP 200.
    InvalidResponse { status: u16 },
    /// The body did not decode into the requested type.
    InvalidData(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::InvalidInputs(msg) => write!(f, "invalid request: {msg}"),
            NetworkError::UnableToComplete(msg) => {
                write!(f, "unable to complete request: {msg}")
            }
            NetworkError::InvalidResponse { status } => {
                write!(f, "invalid response from server (HTTP {status})")
            }
            NetworkError::InvalidData(msg) => write!(f, "invalid data from server: {msg}"),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Where player lists come from. The TUI only talks to this trait, so
/// tests can swap the HTTP client for a canned source.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    async fn search_players(&self, params: &SearchParameters) -> Result<Vec<Player>, NetworkError>;
}

pub struct NetworkClient {
    base_url: String,
    api_key: String,
    api_host: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl NetworkClient {
    pub fn new(api_key: String, api_host: String, base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            api_host,
            timeout: REQUEST_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    /// Replaces the per-request timeout (`REQUEST_TIMEOUT` by default).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches `url_string` and decodes the JSON body as `T`.
    ///
    /// # Errors
    ///
    /// * `InvalidInputs` - `url_string` does not parse; nothing is sent.
    /// * `UnableToComplete` - the request never produced a response.
    /// * `InvalidResponse` - the status code is not exactly 200.
    /// * `InvalidData` - the body is not valid JSON for `T`.
    pub async fn fetch_data<T: DeserializeOwned>(&self, url_string: &str) -> Result<T, NetworkError> {
        let url = Url::parse(url_string)
            .map_err(|e| NetworkError::InvalidInputs(format!("{url_string}: {e}")))?;

        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, &self.api_host)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| NetworkError::UnableToComplete(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("API returned HTTP {} for {}", status.as_u16(), url_string);
            return Err(NetworkError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NetworkError::UnableToComplete(e.to_string()))?;
        debug!("Response body: {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|e| NetworkError::InvalidData(e.to_string()))
    }
}

/// Attaches `query_items` (in order) to `path`, which must be an absolute URL.
pub fn make_url(path: &str, query_items: &[QueryItem]) -> Result<String, NetworkError> {
    let mut url =
        Url::parse(path).map_err(|e| NetworkError::InvalidInputs(format!("{path}: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(NetworkError::InvalidInputs(format!(
            "{path}: not an absolute URL"
        )));
    }

    if !query_items.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for item in query_items {
            pairs.append_pair(&item.name, &item.value);
        }
    }

    Ok(url.into())
}

#[async_trait]
impl PlayerSource for NetworkClient {
    async fn search_players(&self, params: &SearchParameters) -> Result<Vec<Player>, NetworkError> {
        let path = format!("{}/players", self.base_url);
        let url = make_url(&path, &search_parameters_to_query_items(params))?;
        info!("Searching players: {}", url);
        let players: Vec<Player> = self.fetch_data(&url).await?;
        info!("Search returned {} players", players.len());
        Ok(players)
    }
}
