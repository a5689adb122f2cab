//! Core data models for the song library.
//!
//! Defines the primary entities: [`Song`] and [`Verse`], plus the input
//! shapes the API accepts. Database mapping is derived from SQLx, wire
//! format from serde.
//!
//! # Database Schema
//!
//! The models map to the following tables:
//! - `songs` - Song metadata (group, title, release date, link)
//! - `verses` - Numbered lyric segments belonging to one song

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A song in the library.
#[derive(Debug, Clone, Default, FromRow, Serialize, Deserialize)]
pub struct Song {
    /// Database ID (auto-generated, immutable once assigned)
    #[serde(default)]
    pub id: i64,
    /// Performing group or artist name
    pub group: String,
    /// Song title
    pub song: String,
    /// Release date as free-form text (not validated as a date)
    #[serde(default)]
    pub release_date: String,
    /// External link to the song
    #[serde(default)]
    pub link: String,
    /// Verses, populated only by an explicit verse fetch - never a column
    #[sqlx(skip)]
    #[serde(default)]
    pub verses: Vec<Verse>,
}

/// A numbered lyric segment of a song.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Verse {
    /// Database ID (auto-generated)
    pub id: i64,
    /// Owning song
    pub song_id: i64,
    /// Position within the song, starting at 1; unique per song
    pub verse_number: i64,
    /// Verse text
    pub text: String,
}

/// A verse to insert: what POST /songs/{id}/verses accepts and what the
/// service builds when splitting lyrics. The song id and row id are
/// assigned at insertion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVerse {
    pub verse_number: i64,
    pub text: String,
}

/// Optional listing filters; a `None` or empty field does not narrow
/// results. Group and song match case-insensitive substrings, release
/// date and link match exactly, and all predicates combine with AND.
#[derive(Debug, Clone, Default)]
pub struct SongFilter {
    pub group: Option<String>,
    pub song: Option<String>,
    pub release_date: Option<String>,
    pub link: Option<String>,
}
