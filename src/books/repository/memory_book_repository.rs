use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;

use crate::books::domain::{validate_existing_book, validate_id, validate_new_book, validate_price_range};
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult, PageRequest, PaginatedResult};
use crate::core::repository::Repository;

const ID_PREFIX: &str = "book-";

#[derive(Debug, Default)]
struct BookTable {
    // records keyed by creation sequence, which is also the enumeration order
    books: BTreeMap<u64, BookEntity>,
    // book_id -> creation sequence
    index: HashMap<String, u64>,
    // last assigned sequence, never rewound
    id_counter: u64,
}

/// In-memory book store.
///
/// A single readers-writer lock guards the records and the id counter. Reads share the
/// lock, writes hold it exclusively, and nothing suspends while it is held. Every record
/// handed out is a clone, so callers never alias stored state.
///
/// Records enumerate in creation order; an update keeps the record's position.
#[derive(Debug, Default)]
pub(crate) struct BookStore {
    table: RwLock<BookTable>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl BookStore {
    pub fn len(&self) -> usize {
        self.table.read().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Repository<BookEntity> for BookStore {
    fn create(&self, mut entity: BookEntity) -> LibraryResult<String> {
        validate_new_book(&entity)?;

        let mut table = self.table.write();
        table.id_counter += 1;
        let seq = table.id_counter;
        let book_id = format!("{}{}", ID_PREFIX, seq);
        entity.book_id = book_id.clone();
        table.index.insert(book_id.clone(), seq);
        table.books.insert(seq, entity);
        Ok(book_id)
    }

    fn update(&self, entity: BookEntity) -> LibraryResult<usize> {
        validate_existing_book(&entity)?;

        let mut table = self.table.write();
        let seq = match table.index.get(entity.book_id.as_str()) {
            Some(seq) => *seq,
            None => {
                return Err(LibraryError::not_found(format!("book not found for {}", entity.book_id).as_str()));
            }
        };
        table.books.insert(seq, entity);
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        validate_id(id)?;

        let table = self.table.read();
        table.index.get(id)
            .and_then(|seq| table.books.get(seq))
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    fn delete(&self, id: &str) -> LibraryResult<usize> {
        validate_id(id)?;

        let mut table = self.table.write();
        match table.index.remove(id) {
            Some(seq) => {
                table.books.remove(&seq);
                Ok(1)
            }
            None => Err(LibraryError::not_found(format!("book not found for {}", id).as_str())),
        }
    }

    fn query(&self, page: PageRequest) -> LibraryResult<PaginatedResult<BookEntity>> {
        let table = self.table.read();
        let total = table.books.len();
        let records = table.books.values()
            .skip(page.offset())
            .take(page.page_size)
            .cloned()
            .collect();
        Ok(PaginatedResult::new(page, total, records))
    }
}

impl BookRepository for BookStore {
    fn find_by_price_range(&self, min_price: f64, max_price: f64) -> LibraryResult<Vec<BookEntity>> {
        validate_price_range(min_price, max_price)?;

        let table = self.table.read();
        Ok(table.books.values()
            .filter(|book| book.price >= min_price && book.price <= max_price)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::BookStore;
    use crate::core::library::{LibraryError, PageRequest};
    use crate::core::repository::Repository;

    fn add_test_books(store: &BookStore, prices: &[f64]) -> Vec<String> {
        prices.iter().enumerate().map(|(i, price)| {
            let book = BookEntity::new(format!("title_{}", i).as_str(), format!("author_{}", i).as_str(), *price)
                .with_details(format!("description_{}", i).as_str(), 2000 + i as i32);
            store.create(book).expect("should create book")
        }).collect()
    }

    #[tokio::test]
    async fn test_should_create_get_books() {
        let store = BookStore::new();
        let book = BookEntity::new("The Go Programming Language", "Alan A. A. Donovan", 45.99)
            .with_details("definitive guide", 2015);
        let id = store.create(book.clone()).expect("should create book");
        assert_eq!("book-1", id.as_str());

        let loaded = store.get(id.as_str()).expect("should return book");
        assert_eq!(book.with_id(id.as_str()), loaded);
    }

    #[tokio::test]
    async fn test_should_ignore_client_supplied_id() {
        let store = BookStore::new();
        let id = store.create(BookEntity::new("title", "author", 1.0).with_id("custom")).expect("should create book");
        assert_eq!("book-1", id.as_str());
        assert!(matches!(store.get("custom"), Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_not_consume_ids_on_failed_create() {
        let store = BookStore::new();
        assert!(store.create(BookEntity::new("", "author", 1.0)).is_err());
        assert!(store.create(BookEntity::new("title", "", 1.0)).is_err());
        assert!(store.create(BookEntity::new("title", "author", 0.0)).is_err());
        let id = store.create(BookEntity::new("title", "author", 1.0)).expect("should create book");
        assert_eq!("book-1", id.as_str());
    }

    #[tokio::test]
    async fn test_should_leave_store_empty_on_invalid_create() {
        let store = BookStore::new();
        let res = store.create(BookEntity::new("", "A", 10.0));
        assert!(matches!(res, Err(LibraryError::InvalidArgument { .. })));
        let page = store.query(PageRequest::new(1, 10)).expect("should list books");
        assert_eq!(0, page.total);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_should_not_reuse_ids_after_delete() {
        let store = BookStore::new();
        let first = store.create(BookEntity::new("a", "b", 1.0)).expect("should create book");
        store.delete(first.as_str()).expect("should delete book");
        let second = store.create(BookEntity::new("a", "b", 1.0)).expect("should create book");
        assert_ne!(first, second);
        assert_eq!("book-2", second.as_str());
    }

    #[tokio::test]
    async fn test_should_create_update_books() {
        let store = BookStore::new();
        let id = store.create(BookEntity::new("title", "author", 29.99).with_details("old", 2001))
            .expect("should create book");

        let updated = BookEntity::new("new title", "new author", 39.99).with_id(id.as_str());
        let size = store.update(updated.clone()).expect("should update book");
        assert_eq!(1, size);

        // wholesale replace: the omitted description and year are cleared, not merged
        let loaded = store.get(id.as_str()).expect("should return book");
        assert_eq!(updated, loaded);
        assert!(loaded.description.is_empty());
        assert_eq!(0, loaded.publish_year);
    }

    #[tokio::test]
    async fn test_should_fail_update_for_missing_or_invalid_books() {
        let store = BookStore::new();
        let res = store.update(BookEntity::new("title", "author", 1.0).with_id("book-42"));
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        let res = store.update(BookEntity::new("title", "author", 1.0));
        assert!(matches!(res, Err(LibraryError::InvalidArgument { .. })));

        let id = store.create(BookEntity::new("title", "author", 1.0)).expect("should create book");
        let res = store.update(BookEntity::new("title", "author", -1.0).with_id(id.as_str()));
        assert!(matches!(res, Err(LibraryError::InvalidArgument { .. })));
        assert_eq!(1.0, store.get(id.as_str()).expect("should return book").price);
    }

    #[tokio::test]
    async fn test_should_create_delete_books() {
        let store = BookStore::new();
        let id = store.create(BookEntity::new("title", "author", 1.0)).expect("should create book");
        let deleted = store.delete(id.as_str()).expect("should delete book");
        assert_eq!(1, deleted);

        assert!(matches!(store.get(id.as_str()), Err(LibraryError::NotFound { .. })));
        assert!(matches!(store.delete(id.as_str()), Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_empty_ids() {
        let store = BookStore::new();
        assert!(matches!(store.get(""), Err(LibraryError::InvalidArgument { .. })));
        assert!(matches!(store.delete(""), Err(LibraryError::InvalidArgument { .. })));
    }

    #[tokio::test]
    async fn test_should_return_snapshots() {
        let store = BookStore::new();
        let id = store.create(BookEntity::new("title", "author", 1.0)).expect("should create book");
        let mut loaded = store.get(id.as_str()).expect("should return book");
        loaded.title = "changed".to_string();
        assert_eq!("title", store.get(id.as_str()).expect("should return book").title.as_str());
    }

    #[tokio::test]
    async fn test_should_paginate_books() {
        let store = BookStore::new();
        add_test_books(&store, &[10.0, 20.0, 30.0]);

        let res = store.query(PageRequest::new(1, 10)).expect("should list books");
        assert_eq!(3, res.total);
        assert_eq!(3, res.records.len());

        let res = store.query(PageRequest::new(2, 10)).expect("should list books");
        assert_eq!(3, res.total);
        assert_eq!(0, res.records.len());
    }

    #[tokio::test]
    async fn test_should_paginate_in_creation_order() {
        let store = BookStore::new();
        let ids = add_test_books(&store, &[1.0; 25]);

        let mut seen = vec![];
        for page in 1..=3 {
            let res = store.query(PageRequest::new(page, 10)).expect("should list books");
            assert_eq!(25, res.total);
            seen.extend(res.records.into_iter().map(|b| b.book_id));
        }
        assert_eq!(ids, seen);

        // updates keep the position of the record
        store.update(BookEntity::new("moved?", "no", 2.0).with_id(ids[0].as_str())).expect("should update book");
        let res = store.query(PageRequest::new(1, 1)).expect("should list books");
        assert_eq!(ids[0], res.records[0].book_id);
    }

    #[tokio::test]
    async fn test_should_keep_total_for_degenerate_pages() {
        let store = BookStore::new();
        add_test_books(&store, &[1.0; 150]);

        let res = store.query(PageRequest::new(0, 0)).expect("should list books");
        assert_eq!(150, res.total);
        assert_eq!(10, res.records.len());

        let res = store.query(PageRequest::new(1, 1000)).expect("should list books");
        assert_eq!(150, res.total);
        assert_eq!(100, res.records.len());

        let res = store.query(PageRequest::new(i32::MAX, i32::MAX)).expect("should list books");
        assert_eq!(150, res.total);
        assert!(res.records.is_empty());
    }

    #[tokio::test]
    async fn test_should_search_by_price_range() {
        let store = BookStore::new();
        let ids = add_test_books(&store, &[19.99, 39.99, 59.99]);

        let res = store.find_by_price_range(30.0, 50.0).expect("should search books");
        assert_eq!(1, res.len());
        assert_eq!(ids[1], res[0].book_id);
        assert_eq!(39.99, res[0].price);
    }

    #[tokio::test]
    async fn test_should_include_price_range_bounds() {
        let store = BookStore::new();
        add_test_books(&store, &[10.0, 20.0, 30.0, 40.0]);

        let res = store.find_by_price_range(20.0, 30.0).expect("should search books");
        let prices: Vec<f64> = res.iter().map(|b| b.price).collect();
        assert_eq!(vec![20.0, 30.0], prices);

        let res = store.find_by_price_range(0.0, 100.0).expect("should search books");
        assert_eq!(4, res.len());
        let res = store.find_by_price_range(41.0, 41.0).expect("should search books");
        assert!(res.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_bad_price_range() {
        let store = BookStore::new();
        assert!(matches!(store.find_by_price_range(-1.0, 10.0), Err(LibraryError::InvalidArgument { .. })));
        assert!(matches!(store.find_by_price_range(10.0, 5.0), Err(LibraryError::InvalidArgument { .. })));
    }

    #[tokio::test]
    async fn test_should_assign_unique_ids_to_concurrent_writers() {
        let store = Arc::new(BookStore::new());
        let handles: Vec<_> = (0..8).map(|t| {
            let store = store.clone();
            thread::spawn(move || {
                (0..50).map(|i| {
                    let title = format!("title_{}_{}", t, i);
                    let id = store.create(BookEntity::new(title.as_str(), "author", 1.0 + i as f64))
                        .expect("should create book");
                    (id, title)
                }).collect::<Vec<_>>()
            })
        }).collect();

        let created: Vec<(String, String)> = handles.into_iter()
            .flat_map(|h| h.join().expect("writer should finish"))
            .collect();
        let ids: HashSet<&String> = created.iter().map(|(id, _)| id).collect();
        assert_eq!(400, ids.len());
        for (id, title) in &created {
            assert_eq!(*title, store.get(id.as_str()).expect("should return book").title);
        }
        assert_eq!(400, store.len());
    }

    #[tokio::test]
    async fn test_should_serve_readers_during_writes() {
        let store = Arc::new(BookStore::new());
        add_test_books(&store, &[5.0; 10]);

        let writer = {
            let store = store.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    let id = store.create(BookEntity::new("w", "w", 1.0 + i as f64)).expect("should create book");
                    store.delete(id.as_str()).expect("should delete book");
                }
            })
        };
        let readers: Vec<_> = (0..4).map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    let res = store.query(PageRequest::new(1, 100)).expect("should list books");
                    // a reader sees either the fixed books or the fixed books plus one in-flight create
                    assert!(res.total == 10 || res.total == 11);
                    assert_eq!(res.total, res.records.len());
                }
            })
        }).collect();

        writer.join().expect("writer should finish");
        for reader in readers {
            reader.join().expect("reader should finish");
        }
        assert_eq!(10, store.len());
    }
}
