//! Request handlers for the song library API.
//!
//! Handlers parse ids, pagination, and JSON bodies themselves so every
//! malformed input becomes a 400 that never reaches the service layer,
//! then delegate to [`LibraryService`].

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::{ApiError, AppState};
use crate::model::{NewVerse, Song, SongFilter, Verse};

/// Default page size when no limit parameter is supplied.
const DEFAULT_LIMIT: i64 = 10;

/// Query parameters for GET /songs: pagination plus optional filters.
/// Everything arrives as a string so validation errors are ours to shape.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub group: Option<String>,
    pub song: Option<String>,
    pub release_date: Option<String>,
    pub link: Option<String>,
}

/// Query parameters for GET /songs/{id}/verses.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

const DOCS_TEXT: &str = "\
Song Shelf API

  POST   /songs              create a song (body: group, song; release_date
                             and link are filled in from the info service)
  GET    /songs              list songs; query: limit, offset, group, song,
                             release_date, link
  GET    /songs/{id}         fetch one song
  PUT    /songs/{id}         overwrite group, song, release_date, link
  DELETE /songs/{id}         delete a song
  POST   /songs/{id}/verses  bulk-add verses (body: [{verse_number, text}])
  GET    /songs/{id}/verses  list verses; query: limit, offset
";

/// GET / - redirect to the documentation.
pub async fn root() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/docs")])
}

/// GET /docs - plain-text API summary.
pub async fn docs() -> &'static str {
    DOCS_TEXT
}

/// POST /songs - create a song via the enrichment pipeline.
pub async fn create_song(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let song: Song = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("invalid JSON body: {e}")))?;

    let id = app.library.add_song(song).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /songs - list songs with filters and pagination.
pub async fn get_songs(
    State(app): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Song>>, ApiError> {
    let (limit, offset) = parse_limit_offset(query.limit.as_deref(), query.offset.as_deref())?;
    let filter = SongFilter {
        group: query.group,
        song: query.song,
        release_date: query.release_date,
        link: query.link,
    };

    tracing::debug!(limit, offset, ?filter, "listing songs");
    let songs = app.library.get_songs(limit, offset, &filter).await?;
    Ok(Json(songs))
}

/// GET /songs/{id} - fetch one song.
pub async fn get_song(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Song>, ApiError> {
    let id = parse_id(&id)?;
    let song = app.library.get_song_by_id(id).await?;
    Ok(Json(song))
}

/// PUT /songs/{id} - full overwrite of a song's fields.
pub async fn update_song(
    State(app): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<StatusResponse>, ApiError> {
    let id = parse_id(&id)?;
    let mut song: Song = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("invalid JSON body: {e}")))?;
    song.id = id;

    app.library.update_song(&song).await?;
    Ok(Json(StatusResponse { status: "ok" }))
}

/// DELETE /songs/{id} - delete a song.
pub async fn delete_song(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let id = parse_id(&id)?;
    app.library.delete_song(id).await?;
    Ok(Json(StatusResponse { status: "ok" }))
}

/// POST /songs/{id}/verses - bulk-add verses to a song.
pub async fn add_verses(
    State(app): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let verses: Vec<NewVerse> = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("invalid JSON body: {e}")))?;

    app.library.add_verses(id, &verses).await?;
    Ok(StatusCode::CREATED)
}

/// GET /songs/{id}/verses - list a song's verses, paginated.
pub async fn get_verses(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Verse>>, ApiError> {
    let id = parse_id(&id)?;
    let (limit, offset) = parse_limit_offset(query.limit.as_deref(), query.offset.as_deref())?;

    let verses = app.library.get_verses(id, limit, offset).await?;
    Ok(Json(verses))
}

/// Parse a path id; non-integer values are a 400 before any storage call.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::bad_request(format!("invalid id: {raw}")))
}

/// Parse pagination parameters: limit defaults to 10 and must be positive,
/// offset defaults to 0 and must be non-negative.
fn parse_limit_offset(
    limit: Option<&str>,
    offset: Option<&str>,
) -> Result<(i64, i64), ApiError> {
    let limit = match limit {
        Some(raw) => match raw.parse::<i64>() {
            Ok(l) if l > 0 => l,
            _ => return Err(ApiError::bad_request(format!("invalid limit: {raw}"))),
        },
        None => DEFAULT_LIMIT,
    };

    let offset = match offset {
        Some(raw) => match raw.parse::<i64>() {
            Ok(o) if o >= 0 => o,
            _ => return Err(ApiError::bad_request(format!("invalid offset: {raw}"))),
        },
        None => 0,
    };

    Ok((limit, offset))
}
