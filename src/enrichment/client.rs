//! Song info HTTP client
//!
//! Handles communication with the external song info service. The base
//! URL comes from configuration; the only endpoint used is
//! `GET {base}/info?group=..&song=..`.
//!
//! No retry, no caching: one synchronous outbound call per lookup, with
//! reqwest's transport defaults for timeouts.

use super::domain::{EnrichmentError, SongDetails};
use super::dto;

/// Song info API client
pub struct SongInfoClient {
    http_client: reqwest::Client,
    base_url: String,
}

const USER_AGENT: &str = concat!("SongShelf/", env!("CARGO_PKG_VERSION"));

impl SongInfoClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Look up release date, lyrics, and link for a (group, song) pair
    pub async fn get_song_details(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongDetails, EnrichmentError> {
        let url = format!(
            "{}/info?group={}&song={}",
            self.base_url,
            urlencoding::encode(group),
            urlencoding::encode(song)
        );

        tracing::debug!(%url, "requesting song details");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            return Err(EnrichmentError::Api(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let details = response
            .json::<dto::SongDetailsResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))?;

        Ok(details.into())
    }
}
