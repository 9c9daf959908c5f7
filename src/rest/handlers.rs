use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
};
use std::sync::Arc;

use super::protocol::{AddBookRequest, ErrorResponse};
use crate::catalog::store::CatalogStore;
use crate::catalog::types::Book;

pub async fn handle_list_books(
    Extension(store): Extension<Arc<CatalogStore>>,
) -> Result<(StatusCode, Json<Vec<Book>>), (StatusCode, Json<ErrorResponse>)> {
    match store.list().await {
        Ok(books) => Ok((StatusCode::OK, Json(books))),
        Err(e) => {
            tracing::error!("Failed to list books: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            ))
        }
    }
}

pub async fn handle_add_book(
    Extension(store): Extension<Arc<CatalogStore>>,
    Json(req): Json<AddBookRequest>,
) -> Result<(StatusCode, Json<Book>), (StatusCode, Json<ErrorResponse>)> {
    let new_book = match req.validate() {
        Ok(new_book) => new_book,
        Err(msg) => {
            return Err((StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))));
        }
    };

    match store.add(new_book).await {
        Ok(book) => Ok((StatusCode::CREATED, Json(book))),
        Err(e) => {
            tracing::error!("Failed to add book: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            ))
        }
    }
}
