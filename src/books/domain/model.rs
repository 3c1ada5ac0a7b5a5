use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the record held by the book store. Its book_id is assigned by the store
// on creation and always equals the key it is stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub description: String,
    pub publish_year: i32,
}

#[cfg(test)]
impl BookEntity {
    pub fn new(title: &str, author: &str, price: f64) -> Self {
        Self {
            book_id: String::new(),
            title: title.to_string(),
            author: author.to_string(),
            price,
            description: String::new(),
            publish_year: 0,
        }
    }

    pub fn with_details(mut self, description: &str, publish_year: i32) -> Self {
        self.description = description.to_string();
        self.publish_year = publish_year;
        self
    }

    pub fn with_id(mut self, book_id: &str) -> Self {
        self.book_id = book_id.to_string();
        self
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn price(&self) -> f64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("title", "author", 12.5)
            .with_details("description", 2008)
            .with_id("book-7");
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert_eq!(12.5, book.price);
        assert_eq!("description", book.description.as_str());
        assert_eq!(2008, book.publish_year);
        assert_eq!("book-7", book.id().as_str());
    }

    #[tokio::test]
    async fn test_should_build_books_without_id() {
        let book = BookEntity::new("title", "author", 1.0);
        assert!(book.book_id.is_empty());
        assert!(book.description.is_empty());
        assert_eq!(0, book.publish_year);
    }
}
