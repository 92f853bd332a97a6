//! Resolution of user input into backend request targets

use crate::types::Mode;

/// Path of the random-books endpoint
pub const RANDOM_BOOKS_PATH: &str = "/random-books";

/// Path of the backend health endpoint
pub const HEALTH_PATH: &str = "/";

/// A validated search: a mode plus non-empty, trimmed query text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    mode: Mode,
    query: String,
}

impl SearchRequest {
    /// Build a request from raw input. Returns `None` when the input is
    /// empty after trimming, in which case no request must be issued.
    pub fn new(mode: Mode, raw: &str) -> Option<Self> {
        let query = raw.trim();
        if query.is_empty() {
            return None;
        }
        Some(Self {
            mode,
            query: query.to_string(),
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Path and query string relative to the backend base URL
    pub fn target(&self) -> String {
        format!(
            "{}?{}={}",
            self.mode.endpoint(),
            self.mode.param_name(),
            urlencoding::encode(&self.query)
        )
    }
}

/// Path for a single-book lookup
pub fn book_path(isbn: &str) -> String {
    format!("/books/{}", urlencoding::encode(isbn.trim()))
}
