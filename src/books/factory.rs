use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::BookStore;

// The store is shared by every request handler for the life of the process.
pub(crate) fn create_book_repository() -> Arc<dyn BookRepository> {
    Arc::new(BookStore::new())
}
