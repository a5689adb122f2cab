//! Internal domain models for song enrichment.
//!
//! These types are OUR types - they don't change when the external API
//! changes. API responses get converted into these types before leaving
//! the enrichment module.

/// Song metadata obtained from the external info service.
///
/// Consumed once during song creation: release date and link overwrite
/// whatever the caller supplied, and the lyrics text is split into verses.
/// Never persisted as its own entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongDetails {
    /// Release date as free-form text
    pub release_date: String,
    /// Full lyrics text, verses separated by blank lines
    pub text: String,
    /// External link to the song
    pub link: String,
}

/// Errors that can occur during enrichment
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    #[error("network error: {0}")]
    Network(String),

    #[error("info API request failed: {0}")]
    Api(String),

    #[error("failed to parse info response: {0}")]
    Parse(String),
}
