//! Live-stream M3U playlist generator
//!
//! Fetches a category-nested catalog of live and scheduled streams from a
//! remote API, resolves each stream's playback link with a second call,
//! derives timezone-correct display titles, and writes one M3U playlist
//! for IPTV players. Optionally commits and pushes the result.

mod api;
mod assemble;
mod catalog;
mod config;
mod error;
mod m3u;
mod publish;
mod timefmt;
mod title;

use chrono::Utc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::ApiClient;
use crate::assemble::AssembleOptions;
use crate::config::Config;
use crate::error::Result;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "live-m3u";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    tracing::info!("{} v{} starting", APP_NAME, VERSION);

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = if std::path::Path::new(&config_path).exists() {
        match Config::from_file(&config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(
                    "Failed to load config file {}: {}. Using defaults.",
                    config_path,
                    e
                );
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    tracing::info!("Configuration loaded: {:?}", config);

    run(&config).await
}

/// One full generation run: fetch, resolve, format, sort, write, publish.
///
/// Three terminal outcomes: playlist written with N entries (publish step
/// may follow), nothing to publish (no file written, returns Ok), or a
/// sink failure (returns Err).
async fn run(config: &Config) -> Result<()> {
    let timezone = config.format.timezone()?;
    let stale_after = config.format.stale_after()?;
    let client = ApiClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )?;

    let catalog = client.fetch_catalog().await;
    let records = catalog::aggregate(&catalog);
    if records.is_empty() {
        tracing::info!("No streams in catalog, nothing to publish");
        return Ok(());
    }
    tracing::info!("Aggregated {} stream records", records.len());

    let opts = AssembleOptions { timezone, stale_after };
    let entries = assemble::assemble(&records, &client, Utc::now(), &opts).await;
    if entries.is_empty() {
        tracing::info!("No stream resolved a playback link, nothing to publish");
        return Ok(());
    }

    m3u::write_playlist(&config.output.path, &entries)?;
    tracing::info!(
        "Playlist with {} entries written to {}",
        entries.len(),
        config.output.path.display()
    );

    if config.publish.enabled {
        publish::publish(&config.output.path, &config.publish).await;
    }

    Ok(())
}

/// Initialize logging with tracing
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "live_m3u=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
