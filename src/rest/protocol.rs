//! REST API Protocol
//!
//! Defines the endpoint and the Data Transfer Objects (DTOs) of the
//! HTTP/JSON front-end, plus the validation step that turns a loosely-typed
//! request body into a typed catalog payload.

use serde::{Deserialize, Serialize};

use crate::catalog::types::NewBook;

/// The single catalog resource. `GET` lists, `POST` creates.
pub const ENDPOINT_BOOKS: &str = "/books";

/// Request body for creating a book.
///
/// The `id` is intentionally absent: identifiers are assigned by the store
/// and never accepted from clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddBookRequest {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl AddBookRequest {
    /// Validates the request into a typed [`NewBook`].
    ///
    /// Validation policy lives here in the front-end; the store accepts
    /// whatever it is handed.
    pub fn validate(self) -> Result<NewBook, String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.author.trim().is_empty() {
            return Err("author must not be empty".to_string());
        }

        Ok(NewBook {
            title: self.title,
            author: self.author,
            year: self.year,
        })
    }
}

/// JSON error body returned for rejected or failed requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
