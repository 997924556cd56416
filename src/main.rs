//! Pipeline driver: extract, transform, load
//!
//! The three load sinks are attempted independently; a sink failure is
//! logged but never prevents the remaining sinks from running, and the
//! process exit code reflects only whether extraction produced data and
//! transformation succeeded.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};

use fashion_etl::application::{clean_and_transform, ProductScraper};
use fashion_etl::domain::product::CleanProduct;
use fashion_etl::infrastructure::sinks::{save_to_csv, save_to_google_sheets, save_to_postgres};
use fashion_etl::infrastructure::{logging, AppConfig, HttpClient, HttpClientConfig, ProductCardParser};

const CONFIG_PATH: &str = "fashion-etl.json";

#[tokio::main]
async fn main() -> ExitCode {
    // Tolerate a missing .env; the postgres sink re-checks its variables.
    dotenvy::dotenv().ok();
    logging::init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::load(Path::new(CONFIG_PATH)).await?;

    // Step 1: Extract
    info!("Starting data scraping...");
    let raw = extract(&config).await?;
    if raw.is_empty() {
        anyhow::bail!("Scraping failed or produced no data. Stopping.");
    }
    info!("Raw data extracted from {}.", config.scraping.base_url);

    // Step 2: Transform
    info!("Cleaning and transforming data...");
    let clean = clean_and_transform(&raw, config.transform.conversion_rate)
        .context("Data transformation failed")?;
    info!("Dataset cleaned and transformed.");

    // Step 3: Load — each sink runs regardless of the others' outcome
    load(&config, &clean).await;

    Ok(())
}

async fn extract(config: &AppConfig) -> Result<Vec<fashion_etl::domain::product::RawProduct>> {
    let client_config = HttpClientConfig {
        base_url: config.scraping.base_url.clone(),
        user_agent: config.scraping.user_agent.clone(),
        timeout_seconds: config.scraping.timeout_seconds,
        max_requests_per_second: config.scraping.max_requests_per_second,
    };
    let fetcher = Arc::new(HttpClient::new(client_config)?);
    let parser = ProductCardParser::new()?;
    let scraper = ProductScraper::new(fetcher, parser);

    Ok(scraper.scrape_all_pages(config.scraping.max_pages).await)
}

async fn load(config: &AppConfig, clean: &[CleanProduct]) {
    // Each sink logs its own outcome; errors are dropped here on purpose.
    info!("Saving data to CSV file...");
    let _ = save_to_csv(clean, Path::new(&config.sinks.csv_path));

    info!("Saving data to Google Sheets...");
    let _ = save_to_google_sheets(
        clean,
        &config.sinks.spreadsheet_id,
        &config.sinks.sheet_range,
        Path::new(&config.sinks.credentials_path),
    )
    .await;

    info!("Saving data to PostgreSQL database...");
    let _ = save_to_postgres(clean, &config.sinks.postgres_table).await;
}
