//! Status command implementation

use anyhow::{Context, Result};
use bookfinder_core::BookApi;
use std::sync::Arc;

/// Print the backend's health status
pub async fn status(api: Arc<dyn BookApi>, api_url: &str) -> Result<()> {
    let status = api
        .health()
        .await
        .with_context(|| format!("Backend at {} is not reachable", api_url))?;

    println!("Backend:  {}", api_url);
    println!("Status:   {}", status);

    Ok(())
}
