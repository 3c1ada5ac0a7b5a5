use std::time::Duration;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::AddBookCommandResponse;
use crate::catalog::command::get_book_cmd::GetBookCommandResponse;
use crate::catalog::command::list_books_cmd::ListBooksCommandResponse;
use crate::catalog::command::remove_book_cmd::RemoveBookCommandResponse;
use crate::catalog::command::search_books_by_price_cmd::SearchBooksByPriceCommandResponse;
use crate::catalog::command::update_book_cmd::UpdateBookCommandResponse;
use crate::core::domain::Configuration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ClientError {
    // connection, timeout or decoding failures
    #[error("transport error {message}")]
    Transport {
        message: String,
    },
    // the service answered with a non-success status
    #[error("status {status} {message}")]
    Status {
        status: u16,
        message: String,
    },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport { message: format!("{:?}", err) }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

// BookClient talks to the bookstore service over HTTP/JSON
pub(crate) struct BookClient {
    client: Client,
    base_url: String,
}

impl BookClient {
    pub(crate) fn new(base_url: &str) -> ClientResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) async fn create_book(&self, book: &BookDto) -> ClientResult<String> {
        let res = self.client.post(format!("{}/books", self.base_url))
            .json(book).send().await?;
        let res: AddBookCommandResponse = decode(res).await?;
        tracing::info!(id = %res.id, message = %res.message, "created book");
        Ok(res.id)
    }

    pub(crate) async fn get_book(&self, id: &str) -> ClientResult<BookDto> {
        let res = self.client.get(format!("{}/books/{}", self.base_url, id))
            .send().await?;
        let res: GetBookCommandResponse = decode(res).await?;
        Ok(res.book)
    }

    pub(crate) async fn update_book(&self, id: &str, book: &BookDto) -> ClientResult<String> {
        let res = self.client.put(format!("{}/books/{}", self.base_url, id))
            .json(book).send().await?;
        let res: UpdateBookCommandResponse = decode(res).await?;
        tracing::info!(id, message = %res.message, "updated book");
        Ok(res.message)
    }

    pub(crate) async fn delete_book(&self, id: &str) -> ClientResult<String> {
        let res = self.client.delete(format!("{}/books/{}", self.base_url, id))
            .send().await?;
        let res: RemoveBookCommandResponse = decode(res).await?;
        tracing::info!(id, message = %res.message, "deleted book");
        Ok(res.message)
    }

    pub(crate) async fn list_books(&self, page: i32, page_size: i32) -> ClientResult<(Vec<BookDto>, usize)> {
        let res = self.client.get(format!("{}/books", self.base_url))
            .query(&[("page", page), ("page_size", page_size)])
            .send().await?;
        let res: ListBooksCommandResponse = decode(res).await?;
        tracing::info!(total = res.total, page, "listed books");
        Ok((res.books, res.total))
    }

    pub(crate) async fn search_books_by_price(&self, min_price: f64, max_price: f64) -> ClientResult<Vec<BookDto>> {
        let res = self.client.get(format!("{}/books/search", self.base_url))
            .query(&[("min_price", min_price), ("max_price", max_price)])
            .send().await?;
        let res: SearchBooksByPriceCommandResponse = decode(res).await?;
        tracing::info!(found = res.books.len(), "searched books by price");
        Ok(res.books)
    }
}

async fn decode<T: DeserializeOwned>(res: Response) -> ClientResult<T> {
    let status = res.status();
    if !status.is_success() {
        let message = res.text().await.unwrap_or_default();
        return Err(ClientError::Status { status: status.as_u16(), message });
    }
    Ok(res.json::<T>().await?)
}

fn print_book(book: &BookDto) {
    println!("Book:");
    println!("   ID: {}", book.book_id);
    println!("   Title: {}", book.title);
    println!("   Author: {}", book.author);
    println!("   Price: {:.2}", book.price);
    println!("   Description: {}", book.description);
    println!("   Published: {}", book.publish_year);
    println!();
}

fn print_books(books: &[BookDto]) {
    if books.is_empty() {
        println!("No books");
        return;
    }
    println!("Books ({}):", books.len());
    for (i, book) in books.iter().enumerate() {
        println!("{}. {} - {} ({:.2})", i + 1, book.title, book.author, book.price);
    }
    println!();
}

// run_demo walks through every operation of the service. A failed step is logged and the
// walkthrough moves on.
pub async fn run_demo(config: &Configuration) -> ClientResult<()> {
    let client = BookClient::new(config.server_url.as_str())?;
    tracing::info!(server_url = %config.server_url, "starting bookstore demo");

    let mut ids = vec![];
    for book in [
        BookDto::new("The Go Programming Language", "Alan A. A. Donovan", 45.99,
                     "The authoritative guide to Go for newcomers and experienced developers", 2015),
        BookDto::new("Design Patterns", "Erich Gamma", 39.99,
                     "The classic catalog of object-oriented design patterns", 1994),
        BookDto::new("Clean Code", "Robert C. Martin", 29.99,
                     "Practices for writing maintainable code", 2008),
    ] {
        match client.create_book(&book).await {
            Ok(id) => ids.push(id),
            Err(err) => tracing::error!(title = %book.title, error = %err, "failed to create book"),
        }
    }
    let (first, last) = match (ids.first(), ids.last()) {
        (Some(first), Some(last)) => (first.to_string(), last.to_string()),
        _ => {
            tracing::error!("no books were created, stopping demo");
            return Ok(());
        }
    };

    match client.get_book(first.as_str()).await {
        Ok(book) => print_book(&book),
        Err(err) => tracing::error!(id = %first, error = %err, "failed to get book"),
    }

    let updated = BookDto::new("The Go Programming Language (Updated)", "Alan A. A. Donovan", 49.99,
                               "The authoritative guide to Go for newcomers and experienced developers (updated edition)", 2015);
    if let Err(err) = client.update_book(first.as_str(), &updated).await {
        tracing::error!(id = %first, error = %err, "failed to update book");
    }
    match client.get_book(first.as_str()).await {
        Ok(book) => print_book(&book),
        Err(err) => tracing::error!(id = %first, error = %err, "failed to get updated book"),
    }

    match client.list_books(1, 10).await {
        Ok((books, total)) => {
            println!("{} books in total", total);
            print_books(&books);
        }
        Err(err) => tracing::error!(error = %err, "failed to list books"),
    }

    match client.search_books_by_price(30.0, 50.0).await {
        Ok(books) => print_books(&books),
        Err(err) => tracing::error!(error = %err, "failed to search books by price"),
    }

    if let Err(err) = client.delete_book(last.as_str()).await {
        tracing::error!(id = %last, error = %err, "failed to delete book");
    }
    match client.list_books(1, 10).await {
        Ok((books, _)) => print_books(&books),
        Err(err) => tracing::error!(error = %err, "failed to list books"),
    }

    tracing::info!("bookstore demo finished");
    Ok(())
}
