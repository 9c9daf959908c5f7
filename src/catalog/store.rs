use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::error::CatalogError;
use super::types::{Book, NewBook};

/// File-backed record store shared by both protocol front-ends.
///
/// The backing file holds the complete catalog as a pretty-printed JSON
/// array. A missing file is the empty catalog. All writes are funneled
/// through `write_lock`, so the read-max-id/append/persist sequence of `add`
/// is atomic with respect to every other `add`.
pub struct CatalogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns every book in insertion order.
    ///
    /// Lock-free: the rename in `persist` is atomic, so a concurrent `add`
    /// can only make this observe the complete pre- or post-add catalog.
    pub async fn list(&self) -> Result<Vec<Book>, CatalogError> {
        self.read_all().await
    }

    /// Appends a new book, assigning the next free identifier.
    ///
    /// The returned record is durably persisted before this returns; a
    /// failed persist returns `StorageUnavailable` and leaves the catalog
    /// (and the identifier sequence) exactly as it was.
    pub async fn add(&self, new_book: NewBook) -> Result<Book, CatalogError> {
        let _guard = self.write_lock.lock().await;

        let mut books = self.read_all().await?;
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;

        let book = Book {
            id: next_id,
            title: new_book.title,
            author: new_book.author,
            year: new_book.year,
        };

        books.push(book.clone());
        self.persist(&books).await?;

        tracing::debug!("Added book {} ({:?})", book.id, book.title);
        Ok(book)
    }

    async fn read_all(&self) -> Result<Vec<Book>, CatalogError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CatalogError::unavailable(&self.path, e)),
        };

        serde_json::from_slice(&bytes).map_err(|e| CatalogError::unavailable(&self.path, e))
    }

    /// Writes the full catalog to a temp sibling, fsyncs, then renames over
    /// the backing file so a crash mid-write can never leave truncated state.
    async fn persist(&self, books: &[Book]) -> Result<(), CatalogError> {
        let encoded = serde_json::to_vec_pretty(books)
            .map_err(|e| CatalogError::unavailable(&self.path, e))?;

        let tmp_path = self.path.with_extension("tmp");

        let mut file = tokio::fs::File::create(&tmp_path)
            .await
            .map_err(|e| CatalogError::unavailable(&tmp_path, e))?;
        file.write_all(&encoded)
            .await
            .map_err(|e| CatalogError::unavailable(&tmp_path, e))?;
        file.sync_all()
            .await
            .map_err(|e| CatalogError::unavailable(&tmp_path, e))?;

        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| CatalogError::unavailable(&self.path, e))
    }
}
