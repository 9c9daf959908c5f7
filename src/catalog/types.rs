use serde::{Deserialize, Serialize};

/// A single catalog entry as stored on disk and returned to clients.
///
/// The `id` is assigned by the store and never supplied by callers. Field
/// names match the persisted JSON layout exactly (`id`, `title`, `author`,
/// `year`), which both front-ends and the bench tooling depend on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
}

/// A validated, id-less book payload ready to be appended to the catalog.
///
/// Front-ends construct this from their protocol-specific request types after
/// validation. The store itself accepts any `NewBook` as-is.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
}
