//! Recommend and search command implementation

use crate::output;
use anyhow::{bail, Result};
use bookfinder_core::render::{EMPTY_MESSAGE, ERROR_HEADLINE};
use bookfinder_core::{BookApi, Mode, ResultsArea, SearchClient};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

/// Run a search in `mode` and print the result cards
pub async fn search(
    api: Arc<dyn BookApi>,
    mode: Mode,
    query: &str,
    full: bool,
    json: bool,
) -> Result<()> {
    let mut client = SearchClient::new(api);
    client.set_mode(mode);
    client.set_input(query);

    let Some(pending) = client.begin_search() else {
        tracing::debug!("Empty query, nothing to search");
        return Ok(());
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    spinner.set_message(format!("Searching ({})...", mode));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = client.api().run_search(&pending.request).await;
    client.complete_search(pending.seq, outcome);
    spinner.finish_and_clear();

    if full {
        client.expand_all_descriptions();
    }

    match client.results() {
        ResultsArea::Cards { books, view } => {
            if json {
                println!("{}", serde_json::to_string_pretty(books)?);
            } else {
                output::print_cards(&client.result_cards(), Some(view));
            }
        }
        ResultsArea::Empty => {
            if json {
                println!("[]");
            } else {
                println!("{}", EMPTY_MESSAGE);
            }
        }
        ResultsArea::Failed { message } => bail!("{}\n{}", ERROR_HEADLINE, message),
        ResultsArea::Idle => {}
    }

    Ok(())
}
