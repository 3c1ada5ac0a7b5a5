pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


pub(crate) trait BookRepository: Repository<BookEntity> {
    // books whose price lies in the closed interval [min_price, max_price]
    fn find_by_price_range(&self, min_price: f64, max_price: f64) -> LibraryResult<Vec<BookEntity>>;
}
