//! Library service - orchestrates song creation and delegates everything
//! else to the store.
//!
//! Creation is the only operation with real logic:
//! 1. Look up release date, lyrics, and link on the external info API
//! 2. Overwrite the caller's release date and link with the results
//! 3. Persist the song to obtain an id
//! 4. Split the lyrics into verses on blank-line boundaries and persist
//!    them as one batch
//!
//! If the verse batch fails after the song row exists, the service issues
//! a compensating delete so a reported failure never leaves a verse-less
//! song behind.

use std::sync::Arc;

use crate::enrichment::SongInfoApi;
use crate::error::Result;
use crate::model::{NewVerse, Song, SongFilter, Verse};
use crate::store::SongStore;

/// Service for the song library. Collaborators are injected as trait
/// objects so tests can substitute fakes.
pub struct LibraryService {
    store: Arc<dyn SongStore>,
    info: Arc<dyn SongInfoApi>,
}

impl LibraryService {
    pub fn new(store: Arc<dyn SongStore>, info: Arc<dyn SongInfoApi>) -> Self {
        Self { store, info }
    }

    /// Create a song, enriching it from the external info API.
    ///
    /// The caller's group and title are preserved; release date and link
    /// always come from the enrichment result. On enrichment failure
    /// nothing is persisted.
    pub async fn add_song(&self, mut song: Song) -> Result<i64> {
        let details = self.info.get_song_details(&song.group, &song.song).await?;

        song.release_date = details.release_date;
        song.link = details.link;

        let id = self.store.add_song(&song).await?;

        let verses: Vec<NewVerse> = split_into_verses(&details.text)
            .into_iter()
            .enumerate()
            .map(|(i, text)| NewVerse {
                verse_number: i as i64 + 1,
                text: text.to_string(),
            })
            .collect();

        if let Err(e) = self.store.add_verses(id, &verses).await {
            tracing::error!(song_id = id, error = %e, "verse insert failed, removing song");
            if let Err(cleanup) = self.store.delete_song(id).await {
                tracing::error!(song_id = id, error = %cleanup, "compensating delete failed");
            }
            return Err(e);
        }

        tracing::info!(song_id = id, verses = verses.len(), "song created");
        Ok(id)
    }

    pub async fn get_songs(
        &self,
        limit: i64,
        offset: i64,
        filter: &SongFilter,
    ) -> Result<Vec<Song>> {
        self.store.get_songs(limit, offset, filter).await
    }

    pub async fn get_song_by_id(&self, id: i64) -> Result<Song> {
        self.store.get_song_by_id(id).await
    }

    pub async fn update_song(&self, song: &Song) -> Result<()> {
        self.store.update_song(song).await
    }

    pub async fn delete_song(&self, id: i64) -> Result<()> {
        self.store.delete_song(id).await
    }

    pub async fn add_verses(&self, song_id: i64, verses: &[NewVerse]) -> Result<()> {
        self.store.add_verses(song_id, verses).await
    }

    pub async fn get_verses(&self, song_id: i64, limit: i64, offset: i64) -> Result<Vec<Verse>> {
        self.store.get_verses_by_song_id(song_id, limit, offset).await
    }
}

/// Split lyrics into verses on blank-line boundaries.
///
/// A run of two consecutive line breaks marks a boundary. Empty leading
/// or trailing segments are kept: lyrics that open with a blank line
/// produce an empty first verse rather than silently renumbering the rest.
fn split_into_verses(text: &str) -> Vec<&str> {
    text.split("\n\n").collect()
}
