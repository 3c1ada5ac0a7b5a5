use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) const BOOK_UPDATED: &str = "book updated successfully";

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// The whole record is replaced, so every field of the book is sent.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    pub book: BookDto,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, book: BookDto) -> Self {
        Self {
            book: BookDto {
                book_id: book_id.to_string(),
                ..book
            },
        }
    }
}


#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub message: String,
}

impl UpdateBookCommandResponse {
    pub fn new() -> Self {
        Self {
            message: BOOK_UPDATED.to_string(),
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(&req.book).await.map_err(CommandError::from).map(|_| UpdateBookCommandResponse::new())
    }
}
