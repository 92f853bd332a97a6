//! Backend API abstraction
//!
//! Every network call the client makes goes through [`BookApi`]. The only
//! required method is a raw `GET`; the typed endpoints are provided on top of
//! it so that alternative transports (and test doubles) stay tiny.

mod http;

pub use http::HttpBookApi;

use crate::error::ApiError;
use crate::request::{book_path, SearchRequest, HEALTH_PATH, RANDOM_BOOKS_PATH};
use crate::types::Book;
use async_trait::async_trait;
use serde::Deserialize;

/// Result type for backend calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Read-only access to the book-search backend
#[async_trait]
pub trait BookApi: Send + Sync {
    /// Issue a GET for `target` (path plus query string) and return the body
    /// of a successful response. Non-2xx statuses are errors.
    async fn get(&self, target: &str) -> ApiResult<String>;

    /// GET a target that answers with a list of books
    async fn fetch_books(&self, target: &str) -> ApiResult<Vec<Book>> {
        let body = self.get(target).await?;
        parse_books(&body)
    }

    /// Run a semantic or keyword search
    async fn run_search(&self, request: &SearchRequest) -> ApiResult<Vec<Book>> {
        self.fetch_books(&request.target()).await
    }

    /// Fetch the startup selection of random books
    async fn random_books(&self) -> ApiResult<Vec<Book>> {
        self.fetch_books(RANDOM_BOOKS_PATH).await
    }

    /// Look up one book by ISBN
    async fn book_by_isbn(&self, isbn: &str) -> ApiResult<Book> {
        let body = self.get(&book_path(isbn)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Backend status string
    async fn health(&self) -> ApiResult<String> {
        #[derive(Deserialize)]
        struct Health {
            status: String,
        }

        let body = self.get(HEALTH_PATH).await?;
        let health: Health = serde_json::from_str(&body)?;
        Ok(health.status)
    }
}

/// Parse a book-list body. A JSON `null` is treated as an empty list.
pub fn parse_books(body: &str) -> ApiResult<Vec<Book>> {
    let books: Option<Vec<Book>> = serde_json::from_str(body)?;
    Ok(books.unwrap_or_default())
}
