use anyhow::Context;
use clap::Parser;
use colored::*;
use repo_pinboard::actors::SearchController;
use repo_pinboard::cli::{Cli, WidgetConfig};
use repo_pinboard::github::GitHubClient;
use repo_pinboard::tui;
use std::fs::File;
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let config = WidgetConfig::from(Cli::parse());

    // The terminal belongs to the UI, so logs go to a file
    let log_file = File::create(&config.log_file)
        .with_context(|| format!("Failed to create log file {}", config.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("debug"))
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!(api_url = %config.api_url, "Starting repo pinboard");

    let client = GitHubClient::with_base_url(&config.api_url, config.request_timeout)
        .context("Failed to create GitHub client")?;

    let widget = SearchController::start(config.controller.clone(), Arc::new(client))
        .await
        .context("Failed to start search controller")?;

    let view = tui::run(widget).await?;

    println!("{}", "Pinned repositories".bold().green());
    println!("{}", "=".repeat(40).dimmed());
    if view.pinned().is_empty() {
        println!("{}", "Nothing pinned".yellow());
    }
    for entry in view.pinned() {
        println!(
            "{}  {}  {}",
            entry.name_label().bold(),
            entry.owner_label(),
            entry.stars_label().yellow()
        );
    }

    Ok(())
}
