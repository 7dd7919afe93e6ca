//! REST client module for the FCG backend.
//!
//! This module provides the `ApiClient` for issuing JSON requests against
//! the configured webhook root, attaching the session's bearer token when
//! one exists, and mapping failures into the `ApiError` taxonomy.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
