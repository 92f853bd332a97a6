//! Random books command implementation

use crate::output;
use anyhow::Result;
use bookfinder_core::{BookApi, CardStyle, CardView, RandomPanel, SearchClient};
use std::sync::Arc;

/// Print the backend's random selection. Prints nothing if none is available.
pub async fn random(api: Arc<dyn BookApi>, json: bool) -> Result<()> {
    let mut client = SearchClient::new(api);
    client.load_random_books().await;

    if let RandomPanel::Visible(books) = client.random_panel() {
        if json {
            println!("{}", serde_json::to_string_pretty(books)?);
        } else {
            output::print_cards(&CardView::list(books, CardStyle::Compact), None);
        }
    }

    Ok(())
}
