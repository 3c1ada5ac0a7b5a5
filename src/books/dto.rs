use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

// BookDto is a data transfer object for Catalog service. Missing fields decode to their
// zero values so that an update overwrites everything it does not mention.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct BookDto {
    #[serde(rename = "id")]
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub description: String,
    pub publish_year: i32,
}

impl BookDto {
    pub fn new(title: &str, author: &str, price: f64, description: &str, publish_year: i32) -> BookDto {
        BookDto {
            book_id: String::new(),
            title: title.to_string(),
            author: author.to_string(),
            price,
            description: description.to_string(),
            publish_year,
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            price: other.price,
            description: other.description.to_string(),
            publish_year: other.publish_year,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            price: other.price,
            description: other.description.to_string(),
            publish_year: other.publish_year,
        }
    }
}
