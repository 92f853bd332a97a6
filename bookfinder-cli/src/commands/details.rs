//! Details command implementation

use crate::output;
use anyhow::{bail, Context, Result};
use bookfinder_core::{BookApi, CardStyle, CardView};
use std::sync::Arc;

/// Look up one book by ISBN and print it with its full description
pub async fn details(api: Arc<dyn BookApi>, isbn: &str, json: bool) -> Result<()> {
    let book = match api.book_by_isbn(isbn).await {
        Ok(book) => book,
        Err(e) if e.is_not_found() => bail!("No book found with ISBN {}", isbn),
        Err(e) => return Err(e).context("Failed to fetch book details"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        let card = CardView::new(&book, 0, CardStyle::Detailed);
        println!("{}", output::format_card(&card, true));
    }

    Ok(())
}
