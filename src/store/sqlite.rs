//! SQLite adapter for the song store.
//!
//! Uses SQLx for lightweight, embedded persistence. Queries bind every
//! user-supplied value; the listing query is assembled condition by
//! condition the same way the filters combine (AND).
//!
//! # Example
//!
//! ```ignore
//! use song_shelf::store::sqlite::{init_db, SqliteSongStore};
//!
//! let pool = init_db("sqlite:song_shelf.db").await?;
//! let store = SqliteSongStore::new(pool);
//! ```

use async_trait::async_trait;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use super::SongStore;
use crate::error::{Error, Result};
use crate::model::{NewVerse, Song, SongFilter, Verse};

/// Default database filename.
pub const DEFAULT_DB_NAME: &str = "song_shelf.db";

/// Build a SQLite database URL from a path.
pub fn db_url(path: &std::path::Path) -> String {
    format!("sqlite:{}", path.display())
}

/// Initialize the database connection pool and run migrations.
///
/// Creates the database file if it doesn't exist, establishes a connection
/// pool with up to 5 connections, and runs all pending migrations.
///
/// # Errors
///
/// Returns an error if:
/// - Database creation fails
/// - Connection cannot be established
/// - Migration fails
pub async fn init_db(db_url: &str) -> Result<SqlitePool> {
    if !sqlx::Sqlite::database_exists(db_url).await.unwrap_or(false) {
        sqlx::Sqlite::create_database(db_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| Error::config(format!("migration failed: {e}")))?;

    Ok(pool)
}

/// [`SongStore`] backed by a SQLite connection pool.
pub struct SqliteSongStore {
    pool: SqlitePool,
}

impl SqliteSongStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongStore for SqliteSongStore {
    async fn add_song(&self, song: &Song) -> Result<i64> {
        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO songs ("group", song, release_date, link)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&song.group)
        .bind(&song.song)
        .bind(&song.release_date)
        .bind(&song.link)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(song_id = row.0, "song added");
        Ok(row.0)
    }

    async fn get_songs(&self, limit: i64, offset: i64, filter: &SongFilter) -> Result<Vec<Song>> {
        let mut sql = String::from(
            r#"SELECT id, "group", song, release_date, link FROM songs WHERE 1=1"#,
        );
        let mut binds: Vec<String> = Vec::new();

        // SQLite's LIKE is case-insensitive for ASCII, matching the
        // substring semantics of the group and song filters.
        if let Some(group) = filter.group.as_deref().filter(|s| !s.is_empty()) {
            sql.push_str(r#" AND "group" LIKE ?"#);
            binds.push(format!("%{group}%"));
        }
        if let Some(song) = filter.song.as_deref().filter(|s| !s.is_empty()) {
            sql.push_str(" AND song LIKE ?");
            binds.push(format!("%{song}%"));
        }
        if let Some(release_date) = filter.release_date.as_deref().filter(|s| !s.is_empty()) {
            sql.push_str(" AND release_date = ?");
            binds.push(release_date.to_string());
        }
        if let Some(link) = filter.link.as_deref().filter(|s| !s.is_empty()) {
            sql.push_str(" AND link = ?");
            binds.push(link.to_string());
        }

        sql.push_str(" LIMIT ? OFFSET ?");

        let mut query = sqlx::query_as::<_, Song>(&sql);
        for bind in &binds {
            query = query.bind(bind);
        }
        let songs = query.bind(limit).bind(offset).fetch_all(&self.pool).await?;

        Ok(songs)
    }

    async fn get_song_by_id(&self, id: i64) -> Result<Song> {
        sqlx::query_as::<_, Song>(
            r#"SELECT id, "group", song, release_date, link FROM songs WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::not_found(format!("song {id} not found")))
    }

    async fn update_song(&self, song: &Song) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE songs
            SET "group" = ?, song = ?, release_date = ?, link = ?
            WHERE id = ?
            "#,
        )
        .bind(&song.group)
        .bind(&song.song)
        .bind(&song.release_date)
        .bind(&song.link)
        .bind(song.id)
        .execute(&self.pool)
        .await?;

        tracing::info!(song_id = song.id, "song updated");
        Ok(())
    }

    async fn delete_song(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM songs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::info!(song_id = id, "song deleted");
        Ok(())
    }

    async fn add_verses(&self, song_id: i64, verses: &[NewVerse]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for verse in verses {
            sqlx::query("INSERT INTO verses (song_id, verse_number, text) VALUES (?, ?, ?)")
                .bind(song_id)
                .bind(verse.verse_number)
                .bind(&verse.text)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        tracing::info!(song_id, count = verses.len(), "verses added");
        Ok(())
    }

    async fn get_verses_by_song_id(
        &self,
        song_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Verse>> {
        let verses = sqlx::query_as::<_, Verse>(
            "SELECT id, song_id, verse_number, text FROM verses WHERE song_id = ? LIMIT ? OFFSET ?",
        )
        .bind(song_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(verses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_song, temp_store};

    fn verse(number: i64, text: &str) -> NewVerse {
        NewVerse {
            verse_number: number,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_and_get_song() {
        let (store, _dir) = temp_store().await;

        let mut song = sample_song("Queen", "Bohemian Rhapsody");
        song.release_date = "1975-10-31".to_string();
        song.link = "https://example.com/bo-rhap".to_string();

        let id = store.add_song(&song).await.unwrap();
        assert!(id > 0);

        let fetched = store.get_song_by_id(id).await.unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.group, "Queen");
        assert_eq!(fetched.song, "Bohemian Rhapsody");
        assert_eq!(fetched.release_date, "1975-10-31");
        assert_eq!(fetched.link, "https://example.com/bo-rhap");
        assert!(fetched.verses.is_empty());
    }

    #[tokio::test]
    async fn test_get_song_by_id_missing_is_not_found() {
        let (store, _dir) = temp_store().await;

        let err = store.get_song_by_id(9999).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_group_filter_is_case_insensitive_substring() {
        let (store, _dir) = temp_store().await;
        store.add_song(&sample_song("Queen", "39")).await.unwrap();
        store
            .add_song(&sample_song("Queens of the Stone Age", "No One Knows"))
            .await
            .unwrap();
        store.add_song(&sample_song("Muse", "Uprising")).await.unwrap();

        let filter = SongFilter {
            group: Some("QUEEN".to_string()),
            ..Default::default()
        };
        let songs = store.get_songs(10, 0, &filter).await.unwrap();
        assert_eq!(songs.len(), 2);
        assert!(songs.iter().all(|s| s.group.to_lowercase().contains("queen")));
    }

    #[tokio::test]
    async fn test_release_date_filter_is_exact() {
        let (store, _dir) = temp_store().await;

        let mut a = sample_song("Queen", "39");
        a.release_date = "1975".to_string();
        let mut b = sample_song("Muse", "Uprising");
        b.release_date = "1975-10-31".to_string();
        store.add_song(&a).await.unwrap();
        store.add_song(&b).await.unwrap();

        let filter = SongFilter {
            release_date: Some("1975".to_string()),
            ..Default::default()
        };
        let songs = store.get_songs(10, 0, &filter).await.unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].group, "Queen");
    }

    #[tokio::test]
    async fn test_filters_combine_with_and() {
        let (store, _dir) = temp_store().await;

        let mut a = sample_song("Queen", "39");
        a.link = "https://example.com/39".to_string();
        let mut b = sample_song("Queen", "Bohemian Rhapsody");
        b.link = "https://example.com/bo-rhap".to_string();
        store.add_song(&a).await.unwrap();
        store.add_song(&b).await.unwrap();

        let filter = SongFilter {
            group: Some("queen".to_string()),
            link: Some("https://example.com/39".to_string()),
            ..Default::default()
        };
        let songs = store.get_songs(10, 0, &filter).await.unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].song, "39");
    }

    #[tokio::test]
    async fn test_empty_filter_fields_do_not_narrow() {
        let (store, _dir) = temp_store().await;
        store.add_song(&sample_song("Queen", "39")).await.unwrap();
        store.add_song(&sample_song("Muse", "Uprising")).await.unwrap();

        let filter = SongFilter {
            group: Some(String::new()),
            song: Some(String::new()),
            ..Default::default()
        };
        let songs = store.get_songs(10, 0, &filter).await.unwrap();
        assert_eq!(songs.len(), 2);
    }

    #[tokio::test]
    async fn test_pagination_window_and_idempotence() {
        let (store, _dir) = temp_store().await;
        for i in 0..5 {
            store
                .add_song(&sample_song("Group", &format!("Song {i}")))
                .await
                .unwrap();
        }

        let filter = SongFilter::default();
        let page = store.get_songs(2, 0, &filter).await.unwrap();
        assert_eq!(page.len(), 2);

        // offset past the tail returns the remainder, then nothing
        assert_eq!(store.get_songs(2, 4, &filter).await.unwrap().len(), 1);
        assert_eq!(store.get_songs(2, 10, &filter).await.unwrap().len(), 0);

        // repeated calls over unmodified data return the same items in order
        let again = store.get_songs(2, 0, &filter).await.unwrap();
        let titles = |songs: &[Song]| songs.iter().map(|s| s.song.clone()).collect::<Vec<_>>();
        assert_eq!(titles(&page), titles(&again));
    }

    #[tokio::test]
    async fn test_update_song_overwrites_all_fields() {
        let (store, _dir) = temp_store().await;
        let id = store.add_song(&sample_song("Queen", "39")).await.unwrap();

        let updated = Song {
            id,
            group: "Queen II".to_string(),
            song: "39 (remaster)".to_string(),
            release_date: "2011".to_string(),
            link: "https://example.com/remaster".to_string(),
            verses: Vec::new(),
        };
        store.update_song(&updated).await.unwrap();

        let fetched = store.get_song_by_id(id).await.unwrap();
        assert_eq!(fetched.group, "Queen II");
        assert_eq!(fetched.song, "39 (remaster)");
        assert_eq!(fetched.release_date, "2011");
        assert_eq!(fetched.link, "https://example.com/remaster");
    }

    #[tokio::test]
    async fn test_update_missing_id_succeeds_silently() {
        let (store, _dir) = temp_store().await;

        let ghost = Song {
            id: 4242,
            ..sample_song("Nobody", "Nothing")
        };
        // no row-count check: this is the documented gap
        store.update_song(&ghost).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_song_and_delete_missing_id() {
        let (store, _dir) = temp_store().await;
        let id = store.add_song(&sample_song("Queen", "39")).await.unwrap();

        store.delete_song(id).await.unwrap();
        assert!(matches!(
            store.get_song_by_id(id).await.unwrap_err(),
            Error::NotFound(_)
        ));

        // deleting again is a silent success (documented gap)
        store.delete_song(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_and_get_verses() {
        let (store, _dir) = temp_store().await;
        let id = store.add_song(&sample_song("Queen", "39")).await.unwrap();

        store
            .add_verses(id, &[verse(1, "first"), verse(2, "second"), verse(3, "third")])
            .await
            .unwrap();

        let verses = store.get_verses_by_song_id(id, 10, 0).await.unwrap();
        assert_eq!(verses.len(), 3);
        assert_eq!(verses[0].verse_number, 1);
        assert_eq!(verses[0].text, "first");
        assert!(verses.iter().all(|v| v.song_id == id));

        let page = store.get_verses_by_song_id(id, 2, 2).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].text, "third");
    }

    #[tokio::test]
    async fn test_verse_batch_rolls_back_on_duplicate() {
        let (store, _dir) = temp_store().await;
        let id = store.add_song(&sample_song("Queen", "39")).await.unwrap();
        store.add_verses(id, &[verse(1, "one")]).await.unwrap();

        // verse 2 would insert fine, but the duplicate verse 1 fails the
        // batch and the transaction must roll back both
        let err = store
            .add_verses(id, &[verse(2, "two"), verse(1, "dup")])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));

        let verses = store.get_verses_by_song_id(id, 10, 0).await.unwrap();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].text, "one");
    }
}
