pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, PaginatedResult};

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    // returns the id assigned by the store
    async fn add_book(&self, book: &BookDto) -> LibraryResult<String>;
    async fn remove_book(&self, id: &str) -> LibraryResult<()>;
    async fn update_book(&self, book: &BookDto) -> LibraryResult<()>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn list_books(&self, page: i32, page_size: i32) -> LibraryResult<PaginatedResult<BookDto>>;
    async fn search_books_by_price(&self, min_price: f64, max_price: f64) -> LibraryResult<Vec<BookDto>>;
}
