//! Song info API Data Transfer Objects
//!
//! These types match EXACTLY what the info API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the enrichment module - convert to
//! domain types.
//!
//! The API exposes a single endpoint:
//! `GET /info?group=<group>&song=<song>`

use serde::{Deserialize, Serialize};

use super::domain::SongDetails;

/// Info lookup response for a (group, song) pair
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDetailsResponse {
    /// Release date as free-form text
    pub release_date: String,
    /// Full lyrics text
    pub text: String,
    /// Link to the song
    pub link: String,
}

impl From<SongDetailsResponse> for SongDetails {
    fn from(dto: SongDetailsResponse) -> Self {
        SongDetails {
            release_date: dto.release_date,
            text: dto.text,
            link: dto.link,
        }
    }
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
