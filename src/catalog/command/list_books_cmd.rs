use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::PaginatedResult;

pub(crate) struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Zero or negative values fall back to the first page and the default page size.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ListBooksCommandRequest {
    pub page: i32,
    pub page_size: i32,
}

#[cfg(test)]
impl ListBooksCommandRequest {
    pub fn new(page: i32, page_size: i32) -> Self {
        Self {
            page,
            page_size,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub total: usize,
}

impl From<PaginatedResult<BookDto>> for ListBooksCommandResponse {
    fn from(other: PaginatedResult<BookDto>) -> Self {
        Self {
            books: other.records,
            total: other.total,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books(req.page, req.page_size)
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::from)
    }
}
