//! Bookfinder Core Library
//!
//! This crate provides the client side of the Bookfinder book search system:
//! the book model, search modes, the backend API client, the card view model
//! and the HTML rendering used by the web UI. The [`SearchClient`] ties them
//! together into a single UI controller.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod request;
pub mod types;
pub mod view;

pub use api::{BookApi, HttpBookApi};
pub use client::{PendingSearch, RandomPanel, ResultsArea, SearchClient};
pub use config::Config;
pub use error::{ApiError, BookfinderError, ConfigError, Result};
pub use request::SearchRequest;
pub use types::{Book, Mode, Year};
pub use view::{CardState, CardStyle, CardView, Description, Poster, ViewState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_recommend() {
        assert_eq!(Mode::default(), Mode::Recommend);
    }
}
