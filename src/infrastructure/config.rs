//! Configuration infrastructure
//!
//! Pipeline configuration with serde defaults, optionally overridden by a
//! JSON file. Every section falls back to working defaults so the binary
//! runs without any config file present.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

use crate::domain::constants::{scraping, site, transform};

/// Complete pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Extraction settings
    #[serde(default)]
    pub scraping: ScrapingConfig,

    /// Transformation settings
    #[serde(default)]
    pub transform: TransformConfig,

    /// Load sink settings
    #[serde(default)]
    pub sinks: SinkConfig,
}

/// Extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapingConfig {
    /// Catalog root URL
    pub base_url: String,

    /// Maximum pages to scrape in one run
    pub max_pages: u32,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Request rate cap
    pub max_requests_per_second: u32,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            base_url: site::BASE_URL.to_string(),
            max_pages: scraping::DEFAULT_MAX_PAGES,
            timeout_seconds: scraping::DEFAULT_TIMEOUT_SECONDS,
            max_requests_per_second: scraping::DEFAULT_MAX_REQUESTS_PER_SECOND,
            user_agent: "fashion-etl/0.1 (Educational Purpose)".to_string(),
        }
    }
}

/// Transformation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Source currency units to IDR
    pub conversion_rate: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            conversion_rate: transform::DEFAULT_CONVERSION_RATE,
        }
    }
}

/// Load sink settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Output path for the flat-file sink
    pub csv_path: String,

    /// Target spreadsheet for the Google Sheets sink
    pub spreadsheet_id: String,

    /// Target range within the spreadsheet (A1 notation)
    pub sheet_range: String,

    /// Path to the service-account credential JSON
    pub credentials_path: String,

    /// Target table for the PostgreSQL sink
    pub postgres_table: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            csv_path: "products.csv".to_string(),
            spreadsheet_id: "1e_gNgqKhynGGdQGJNsT48YoTroUaQRzWwMRE0AmYo7U".to_string(),
            sheet_range: "Sheet1!A2:J".to_string(),
            credentials_path: "google-sheets-api.json".to_string(),
            postgres_table: "products".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file, or defaults when the file
    /// does not exist
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(
                "Config file {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_catalog() {
        let config = AppConfig::default();
        assert_eq!(config.scraping.base_url, "https://fashion-studio.dicoding.dev");
        assert_eq!(config.scraping.max_pages, 50);
        assert_eq!(config.scraping.timeout_seconds, 10);
        assert_eq!(config.transform.conversion_rate, 16000.0);
        assert_eq!(config.sinks.csv_path, "products.csv");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"scraping": {"max_pages": 3}}"#).unwrap();
        assert_eq!(config.scraping.max_pages, 3);
        assert_eq!(config.scraping.timeout_seconds, 10);
        assert_eq!(config.transform.conversion_rate, 16000.0);
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/config.json"))
            .await
            .unwrap();
        assert_eq!(config.scraping.max_pages, 50);
    }
}
