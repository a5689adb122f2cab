//! Trait definition for the external song info API.
//!
//! The trait enables dependency injection and mocking for tests.
//! Production code uses [`SongInfoClient`], while tests substitute
//! mock implementations.

use async_trait::async_trait;

use super::client::SongInfoClient;
use super::domain::{EnrichmentError, SongDetails};

/// Trait for song info lookup.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait SongInfoApi: Send + Sync {
    /// Look up release date, lyrics, and link for a (group, song) pair.
    async fn get_song_details(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongDetails, EnrichmentError>;
}

#[async_trait]
impl SongInfoApi for SongInfoClient {
    async fn get_song_details(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongDetails, EnrichmentError> {
        self.get_song_details(group, song).await
    }
}
