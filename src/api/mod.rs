//! HTTP surface: axum router, application state, and the error-to-status
//! mapping.
//!
//! Validation failures (bad JSON, non-integer ids, invalid pagination)
//! become 400 before any storage call; everything else - not found,
//! persistence, enrichment - surfaces as a 500 with a free-text message,
//! with no further distinction exposed to the caller.

pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::error::Error;
use crate::service::LibraryService;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<LibraryService>,
}

/// Build the application router.
pub fn router(library: Arc<LibraryService>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/docs", get(handlers::docs))
        .route(
            "/songs",
            get(handlers::get_songs).post(handlers::create_song),
        )
        .route(
            "/songs/{id}",
            get(handlers::get_song)
                .put(handlers::update_song)
                .delete(handlers::delete_song),
        )
        .route(
            "/songs/{id}/verses",
            get(handlers::get_verses).post(handlers::add_verses),
        )
        .with_state(AppState { library })
}

/// Error shape returned to API callers: a status code and a free-text
/// message body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match err {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
        } else {
            tracing::warn!(error = %err, "request rejected");
        }
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}
