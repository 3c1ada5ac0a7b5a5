use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

pub mod model;

pub(crate) trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn price(&self) -> f64;
}

// Field checks shared by create and update. The first failing check wins.
pub(crate) fn validate_new_book(book: &dyn Book) -> LibraryResult<()> {
    if book.title().is_empty() {
        return Err(LibraryError::invalid_field("title", "book title must not be empty"));
    }
    if book.author().is_empty() {
        return Err(LibraryError::invalid_field("author", "book author must not be empty"));
    }
    if book.price().is_nan() || book.price() <= 0.0 {
        return Err(LibraryError::invalid_field("price",
            format!("book price must be greater than 0 but was {}", book.price()).as_str()));
    }
    Ok(())
}

pub(crate) fn validate_existing_book(book: &dyn Book) -> LibraryResult<()> {
    validate_id(book.id().as_str())?;
    validate_new_book(book)
}

pub(crate) fn validate_id(id: &str) -> LibraryResult<()> {
    if id.is_empty() {
        return Err(LibraryError::invalid_field("id", "book id must not be empty"));
    }
    Ok(())
}

pub(crate) fn validate_price_range(min_price: f64, max_price: f64) -> LibraryResult<()> {
    if min_price.is_nan() || min_price < 0.0 {
        return Err(LibraryError::invalid_field("min_price",
            format!("minimum price must not be negative but was {}", min_price).as_str()));
    }
    if max_price.is_nan() || max_price < min_price {
        return Err(LibraryError::invalid_field("max_price",
            format!("maximum price {} must not be less than minimum price {}", max_price, min_price).as_str()));
    }
    Ok(())
}
