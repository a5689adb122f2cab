//! Storage gateway for songs and verses.
//!
//! [`SongStore`] is the capability interface the rest of the application
//! depends on; [`sqlite::SqliteSongStore`] is the production adapter.
//! Tests substitute the in-memory fake from [`mocks`].

pub mod sqlite;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{NewVerse, Song, SongFilter, Verse};

/// Abstract contract over the relational persistence layer.
///
/// One operation per entity action; pagination and filters are explicit
/// parameters derived once at the API boundary.
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Persist group, song, release date, and link; returns the new id.
    async fn add_song(&self, song: &Song) -> Result<i64>;

    /// List songs in natural storage order with LIMIT/OFFSET. Non-empty
    /// filter fields narrow results (substring for group/song, exact for
    /// release date/link), combined with AND.
    async fn get_songs(&self, limit: i64, offset: i64, filter: &SongFilter) -> Result<Vec<Song>>;

    /// Fetch exactly one song, or `Error::NotFound`.
    async fn get_song_by_id(&self, id: i64) -> Result<Song>;

    /// Overwrite group/song/release date/link for the row matching the
    /// song's id. Succeeds silently when the id does not exist.
    async fn update_song(&self, song: &Song) -> Result<()>;

    /// Remove the row; no existence check.
    async fn delete_song(&self, id: i64) -> Result<()>;

    /// Insert all verses atomically: any failure rolls back the batch.
    async fn add_verses(&self, song_id: i64, verses: &[NewVerse]) -> Result<()>;

    /// List a song's verses, paginated.
    async fn get_verses_by_song_id(
        &self,
        song_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Verse>>;
}
