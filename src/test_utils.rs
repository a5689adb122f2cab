//! Test utilities and fixtures for song-shelf tests.
//!
//! Provides common helpers - temporary databases, sample entities, and a
//! preassembled application state over in-memory fakes - to reduce
//! boilerplate in tests.

use std::sync::Arc;

use sqlx::sqlite::SqlitePool;
use tempfile::TempDir;

use crate::api::AppState;
use crate::enrichment::traits::mocks::MockSongInfo;
use crate::model::Song;
use crate::service::LibraryService;
use crate::store::mocks::MemorySongStore;
use crate::store::sqlite::{SqliteSongStore, init_db};

/// Creates a temporary database for testing.
///
/// The database lives in a temporary directory that is cleaned up when
/// the returned `TempDir` is dropped; keep it alive for the duration of
/// the test. Migrations are run automatically.
pub async fn temp_db() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db");
    let db_url = format!("sqlite:{}", db_path.display());

    let pool = init_db(&db_url)
        .await
        .expect("Failed to initialize test database");

    (pool, dir)
}

/// A SQLite-backed store over a temporary database.
pub async fn temp_store() -> (SqliteSongStore, TempDir) {
    let (pool, dir) = temp_db().await;
    (SqliteSongStore::new(pool), dir)
}

/// A song with the given group and title and empty enrichable fields,
/// the shape a creation request arrives in.
pub fn sample_song(group: &str, song: &str) -> Song {
    Song {
        id: 0,
        group: group.to_string(),
        song: song.to_string(),
        release_date: String::new(),
        link: String::new(),
        verses: Vec::new(),
    }
}

/// Application state over an in-memory store and the given info mock,
/// for exercising handlers without a database or network.
pub fn test_state(info: MockSongInfo) -> AppState {
    let library = LibraryService::new(Arc::new(MemorySongStore::new()), Arc::new(info));
    AppState {
        library: Arc::new(library),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_temp_db_creates_working_database() {
        let (pool, _dir) = temp_db().await;

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM songs")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }

    #[test]
    fn test_sample_song_shape() {
        let song = sample_song("Queen", "39");
        assert_eq!(song.id, 0);
        assert_eq!(song.group, "Queen");
        assert!(song.release_date.is_empty());
        assert!(song.verses.is_empty());
    }
}
