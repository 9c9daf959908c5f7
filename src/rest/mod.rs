//! REST Front-End Module
//!
//! The HTTP/JSON adapter over the catalog store.
//!
//! ## Endpoints
//! - `GET /books`: full catalog as a JSON array.
//! - `POST /books`: create a book, returning the stored record with its
//!   assigned id and a `201 Created` status.
//!
//! Requests are validated into typed payloads before reaching the store;
//! storage failures surface as `500` with a JSON error body, never as an
//! empty success.

pub mod handlers;
pub mod protocol;


use axum::{Router, extract::Extension, routing::get};
use std::sync::Arc;

use crate::catalog::store::CatalogStore;
use handlers::{handle_add_book, handle_list_books};
use protocol::ENDPOINT_BOOKS;

/// Builds the REST router over a shared catalog store.
pub fn router(store: Arc<CatalogStore>) -> Router {
    Router::new()
        .route(ENDPOINT_BOOKS, get(handle_list_books).post(handle_add_book))
        .layer(Extension(store))
}
