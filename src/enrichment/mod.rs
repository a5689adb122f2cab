//! Song enrichment module - fetches metadata for new songs from the
//! external info service.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`dto.rs`) - Exact API response shapes
//! - **Client** (`client.rs`) - HTTP client for the external API
//! - **Traits** (`traits.rs`) - Capability interface for dependency injection
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test the API contract independently
//! 3. The library service can run against a mock in tests

pub mod client;
pub mod domain;
pub mod dto;
pub mod traits;

pub use client::SongInfoClient;
pub use domain::{EnrichmentError, SongDetails};
pub use traits::SongInfoApi;
