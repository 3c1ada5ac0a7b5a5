use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchBooksByPriceCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchBooksByPriceCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Absent bounds decode to 0 and are then checked by the price range validation.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SearchBooksByPriceCommandRequest {
    pub min_price: f64,
    pub max_price: f64,
}

#[cfg(test)]
impl SearchBooksByPriceCommandRequest {
    pub fn new(min_price: f64, max_price: f64) -> Self {
        Self {
            min_price,
            max_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SearchBooksByPriceCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksByPriceCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksByPriceCommandRequest, SearchBooksByPriceCommandResponse> for SearchBooksByPriceCommand {
    async fn execute(&self, req: SearchBooksByPriceCommandRequest) -> Result<SearchBooksByPriceCommandResponse, CommandError> {
        self.catalog_service.search_books_by_price(req.min_price, req.max_price)
            .await.map_err(CommandError::from).map(SearchBooksByPriceCommandResponse::new)
    }
}
