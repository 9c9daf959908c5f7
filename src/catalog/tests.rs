//! Catalog Store Tests
//!
//! Validates the correctness contract of the record store: identifier
//! uniqueness and monotonicity, read-your-write visibility, append-only
//! behavior, concurrent add safety, and failure semantics of the backing
//! file.

#[cfg(test)]
mod tests {
    use crate::catalog::error::CatalogError;
    use crate::catalog::store::CatalogStore;
    use crate::catalog::types::NewBook;
    use std::sync::Arc;

    fn new_book(title: &str, author: &str, year: i32) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }

    // ============================================================
    // IDENTIFIER ASSIGNMENT
    // ============================================================

    #[tokio::test]
    async fn test_first_add_assigns_id_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("books.json"));

        let book = store
            .add(new_book("Clean Code", "Robert C. Martin", 2008))
            .await
            .unwrap();

        assert_eq!(book.id, 1);
        assert_eq!(book.title, "Clean Code");
        assert_eq!(book.author, "Robert C. Martin");
        assert_eq!(book.year, 2008);

        let books = store.list().await.unwrap();
        assert_eq!(books, vec![book], "list() should contain exactly the new record");
    }

    #[tokio::test]
    async fn test_next_id_follows_max_existing_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");

        // Pre-seed a catalog with an id gap: {1, 2, 5}.
        let seeded = serde_json::json!([
            {"id": 1, "title": "A", "author": "a", "year": 2000},
            {"id": 2, "title": "B", "author": "b", "year": 2001},
            {"id": 5, "title": "C", "author": "c", "year": 2002},
        ]);
        std::fs::write(&path, serde_json::to_vec_pretty(&seeded).unwrap()).unwrap();

        let store = CatalogStore::new(&path);
        let book = store.add(new_book("D", "d", 2003)).await.unwrap();

        assert_eq!(book.id, 6, "new id should be max existing id + 1, not first gap");
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_monotonic() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("books.json"));

        for i in 0..5 {
            let book = store.add(new_book("Book", "Author", 2000 + i)).await.unwrap();
            assert_eq!(book.id, (i + 1) as u64);
        }

        let books = store.list().await.unwrap();
        let mut ids: Vec<u64> = books.iter().map(|b| b.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5, "all ids should be pairwise distinct");
    }

    // ============================================================
    // VISIBILITY AND ORDERING
    // ============================================================

    #[tokio::test]
    async fn test_list_is_empty_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("books.json"));

        let books = store.list().await.unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_add_does_not_mutate_existing_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("books.json"));

        let first = store
            .add(new_book("The Pragmatic Programmer", "Andrew Hunt", 1999))
            .await
            .unwrap();
        store
            .add(new_book("Design Patterns", "Gang of Four", 1994))
            .await
            .unwrap();

        let books = store.list().await.unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0], first, "earlier records must survive later adds unchanged");
    }

    #[tokio::test]
    async fn test_state_is_shared_across_store_handles() {
        // Two handles on the same backing file model the two front-ends of
        // the original two-process design: a write through one must be
        // visible to a read through the other.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");

        let writer = CatalogStore::new(&path);
        let reader = CatalogStore::new(&path);

        let book = writer.add(new_book("Refactoring", "Martin Fowler", 1999)).await.unwrap();

        let books = reader.list().await.unwrap();
        assert_eq!(books, vec![book]);
    }

    // ============================================================
    // CONCURRENCY
    // ============================================================

    #[tokio::test]
    async fn test_concurrent_adds_assign_distinct_contiguous_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(CatalogStore::new(dir.path().join("books.json")));

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .add(new_book(&format!("Book {}", i), "Author", 2020))
                    .await
                    .unwrap()
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }

        ids.sort_unstable();
        assert_eq!(
            ids,
            (1..=8).collect::<Vec<u64>>(),
            "8 concurrent adds must yield ids 1..=8 with none lost or duplicated"
        );

        let books = store.list().await.unwrap();
        assert_eq!(books.len(), 8, "every concurrent add must be persisted");
    }

    // ============================================================
    // FAILURE SEMANTICS
    // ============================================================

    #[tokio::test]
    async fn test_corrupted_file_reports_storage_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        std::fs::write(&path, b"{ not json ]").unwrap();

        let store = CatalogStore::new(&path);

        let result = store.list().await;
        assert!(
            matches!(result, Err(CatalogError::StorageUnavailable { .. })),
            "corrupted backing data must not be reported as an empty catalog"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_add_fails_cleanly_when_directory_is_read_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");

        let store = CatalogStore::new(&path);
        let existing = store.add(new_book("Clean Code", "Robert C. Martin", 2008)).await.unwrap();

        // The temp-file write in persist() needs directory write permission.
        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o555)).unwrap();

        let result = store.add(new_book("Lost Book", "Nobody", 2024)).await;
        assert!(matches!(result, Err(CatalogError::StorageUnavailable { .. })));

        // Restore so the tempdir can be cleaned up.
        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

        let books = store.list().await.unwrap();
        assert_eq!(
            books,
            vec![existing],
            "a failed add must leave no trace in the catalog"
        );

        // The failed add must not have burned an id either.
        let next = store.add(new_book("Next Book", "Somebody", 2024)).await.unwrap();
        assert_eq!(next.id, 2);
    }
}
