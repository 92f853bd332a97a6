//! Bookfinder CLI - search the book backend from the terminal

mod commands;
mod output;

use anyhow::{Context, Result};
use bookfinder_core::{BookApi, Config, HttpBookApi, Mode};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookfinder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Backend base URL (defaults to BOOKFINDER_API_URL or http://127.0.0.1:8000)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find books by meaning (semantic search)
    Recommend {
        /// What the book is about
        query: Vec<String>,

        /// Show full descriptions instead of truncating them
        #[arg(long)]
        full: bool,
    },

    /// Find books by title or author (keyword search)
    Search {
        /// Title or author text
        query: Vec<String>,

        /// Show full descriptions instead of truncating them
        #[arg(long)]
        full: bool,
    },

    /// Show a random selection of books
    Random,

    /// Look up a single book by ISBN
    Details {
        /// ISBN of the book
        isbn: String,
    },

    /// Check that the backend is reachable
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookfinder_cli=debug,bookfinder_core=debug"
    } else {
        "bookfinder_cli=info,bookfinder_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    let http = HttpBookApi::from_config(&config)
        .with_context(|| format!("Cannot use backend URL {}", config.api_url))?;
    let api: Arc<dyn BookApi> = Arc::new(http);

    match cli.command {
        Commands::Recommend { query, full } => {
            commands::search(api, Mode::Recommend, &query.join(" "), full, cli.json).await
        }

        Commands::Search { query, full } => {
            commands::search(api, Mode::Search, &query.join(" "), full, cli.json).await
        }

        Commands::Random => commands::random(api, cli.json).await,

        Commands::Details { isbn } => commands::details(api, &isbn, cli.json).await,

        Commands::Status => commands::status(api, &config.api_url).await,
    }
}
