use std::time::Duration;

use reqwest::{Client, Url};

use crate::api::error::ApiError;
use crate::api::types::{is_affirmative, MovieDetail, MovieSummary, ResponseFlag, SearchEnvelope};
use crate::config::ApiConfig;

/// HTTP client for the OMDb API.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted, so
/// every spawned fetch task gets its own handle.
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl OmdbClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidRequest(format!("base URL: {}", e)))?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .user_agent(concat!("popcorn/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::InvalidRequest(format!("client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// `GET <base>/?apikey=<key>&s=<query>`.
    pub async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, ApiError> {
        let body = self.get("s", query).await?;
        let envelope: SearchEnvelope =
            serde_json::from_str(&body).map_err(|source| ApiError::Decode { source })?;

        if !is_affirmative(&envelope.response) {
            return Err(ApiError::NotFound {
                message: envelope
                    .error
                    .unwrap_or_else(|| "Movie not found!".to_string()),
            });
        }

        Ok(envelope.search)
    }

    /// `GET <base>/?apikey=<key>&i=<id>`.
    pub async fn detail(&self, imdb_id: &str) -> Result<MovieDetail, ApiError> {
        let body = self.get("i", imdb_id).await?;
        let flag: ResponseFlag =
            serde_json::from_str(&body).map_err(|source| ApiError::Decode { source })?;

        if !is_affirmative(&flag.response) {
            return Err(ApiError::NotFound {
                message: flag
                    .error
                    .unwrap_or_else(|| "Incorrect IMDb ID.".to_string()),
            });
        }

        let mut detail: MovieDetail =
            serde_json::from_str(&body).map_err(|source| ApiError::Decode { source })?;
        if detail.imdb_id.is_empty() {
            detail.imdb_id = imdb_id.to_string();
        }
        Ok(detail)
    }

    async fn get(&self, param: &str, value: &str) -> Result<String, ApiError> {
        let url = Url::parse_with_params(
            self.base_url.as_str(),
            &[("apikey", self.api_key.as_str()), (param, value)],
        )
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        tracing::debug!(param, value, "Requesting movie database");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Connection { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| ApiError::Connection { source })
    }
}
