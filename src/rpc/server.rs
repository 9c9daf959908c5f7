use anyhow::Result;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

use super::protocol::{CatalogRequest, CatalogResponse, read_frame, write_frame};
use crate::catalog::store::CatalogStore;
use crate::catalog::types::NewBook;

/// The binary RPC front-end: an accept loop dispatching catalog calls onto
/// the shared store, one spawned task per client connection.
pub struct RpcServer {
    store: Arc<CatalogStore>,
}

impl RpcServer {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Runs the accept loop until the listener fails.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        loop {
            let (stream, peer) = listener.accept().await?;
            tracing::debug!("RPC connection from {}", peer);

            let store = self.store.clone();
            tokio::spawn(async move {
                if let Err(e) = handle_connection(stream, store).await {
                    tracing::warn!("RPC connection from {} failed: {}", peer, e);
                }
            });
        }
    }
}

/// Serves one connection: frames are handled in order until the peer
/// disconnects.
async fn handle_connection(mut stream: TcpStream, store: Arc<CatalogStore>) -> Result<()> {
    loop {
        let request = match read_frame::<_, CatalogRequest>(&mut stream).await? {
            Some((request, _)) => request,
            None => return Ok(()),
        };

        let response = dispatch(&store, request).await;
        write_frame(&mut stream, &response).await?;
    }
}

async fn dispatch(store: &CatalogStore, request: CatalogRequest) -> CatalogResponse {
    match request {
        CatalogRequest::ListBooks => match store.list().await {
            Ok(books) => CatalogResponse::Books { books },
            Err(e) => {
                tracing::error!("Failed to list books: {}", e);
                CatalogResponse::Error {
                    message: e.to_string(),
                }
            }
        },

        CatalogRequest::AddBook {
            title,
            author,
            year,
        } => {
            let new_book = match validate_add(title, author, year) {
                Ok(new_book) => new_book,
                Err(message) => return CatalogResponse::Error { message },
            };

            match store.add(new_book).await {
                Ok(book) => CatalogResponse::Added { book },
                Err(e) => {
                    tracing::error!("Failed to add book: {}", e);
                    CatalogResponse::Error {
                        message: e.to_string(),
                    }
                }
            }
        }
    }
}

/// Front-end validation policy, mirroring the REST side: the store itself
/// accepts whatever typed payload it is handed.
fn validate_add(title: String, author: String, year: i32) -> Result<NewBook, String> {
    if title.trim().is_empty() {
        return Err("title must not be empty".to_string());
    }
    if author.trim().is_empty() {
        return Err("author must not be empty".to_string());
    }

    Ok(NewBook {
        title,
        author,
        year,
    })
}
