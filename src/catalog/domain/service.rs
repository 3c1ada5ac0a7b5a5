use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult, PageRequest, PaginatedResult};

pub(crate) struct CatalogServiceImpl {
    server_name: String,
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            server_name: config.server_name.to_string(),
            book_repository,
        }
    }

    fn log_failure(&self, op: &str, id: &str, err: &LibraryError) {
        match err {
            LibraryError::NotFound { .. } => {
                tracing::info!(server = %self.server_name, op, id, "book not found");
            }
            LibraryError::InvalidArgument { reason_code, .. } => {
                tracing::info!(server = %self.server_name, op, id, field = ?reason_code, error = %err, "rejected invalid argument");
            }
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<String> {
        tracing::info!(server = %self.server_name, title = %book.title, "creating book");
        let res = self.book_repository.create(BookEntity::from(book));
        match &res {
            Ok(id) => tracing::info!(server = %self.server_name, id = %id, "created book"),
            Err(err) => self.log_failure("add_book", "", err),
        }
        res
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        tracing::info!(server = %self.server_name, id, "removing book");
        let res = self.book_repository.delete(id).map(|_| ());
        match &res {
            Ok(_) => tracing::info!(server = %self.server_name, id, "removed book"),
            Err(err) => self.log_failure("remove_book", id, err),
        }
        res
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<()> {
        let id = book.book_id.as_str();
        tracing::info!(server = %self.server_name, id, "updating book");
        let res = self.book_repository.update(BookEntity::from(book)).map(|_| ());
        match &res {
            Ok(_) => tracing::info!(server = %self.server_name, id, "updated book"),
            Err(err) => self.log_failure("update_book", id, err),
        }
        res
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        tracing::info!(server = %self.server_name, id, "finding book");
        let res = self.book_repository.get(id).map(|b| BookDto::from(&b));
        if let Err(err) = &res {
            self.log_failure("find_book_by_id", id, err);
        }
        res
    }

    async fn list_books(&self, page: i32, page_size: i32) -> LibraryResult<PaginatedResult<BookDto>> {
        let request = PageRequest::new(page, page_size);
        let res = self.book_repository.query(request)?;
        tracing::info!(server = %self.server_name, total = res.total, page = res.page,
            page_size = res.page_size, "listed books");
        Ok(PaginatedResult::new(request, res.total, res.records.iter().map(BookDto::from).collect()))
    }

    async fn search_books_by_price(&self, min_price: f64, max_price: f64) -> LibraryResult<Vec<BookDto>> {
        tracing::info!(server = %self.server_name, min_price, max_price, "searching books by price");
        let res = self.book_repository.find_by_price_range(min_price, max_price);
        match &res {
            Ok(records) => tracing::info!(server = %self.server_name, found = records.len(), "searched books by price"),
            Err(err) => self.log_failure("search_books_by_price", "", err),
        }
        Ok(res?.iter().map(BookDto::from).collect())
    }
}
