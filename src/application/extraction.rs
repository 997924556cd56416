//! Extraction use case
//!
//! Drives the page fetcher and card parser across a bounded page range.
//! A single page's failure contributes zero records and never stops the
//! run; the loop always covers the configured page count.

use std::sync::Arc;

use chrono::Utc;
use scraper::Html;
use tracing::{error, info};

use crate::domain::product::RawProduct;
use crate::domain::services::PageFetcher;
use crate::infrastructure::html_parser::ProductCardParser;

/// Sequential scraper over the catalog's paginated listing
pub struct ProductScraper {
    fetcher: Arc<dyn PageFetcher>,
    parser: ProductCardParser,
}

impl ProductScraper {
    pub fn new(fetcher: Arc<dyn PageFetcher>, parser: ProductCardParser) -> Self {
        Self { fetcher, parser }
    }

    /// Scrape one page, fail-soft
    ///
    /// A fetch failure (timeout, connection error, non-2xx) is logged with
    /// the page index and yields an empty record set. All records from a
    /// successful fetch share one capture timestamp.
    pub async fn scrape_page(&self, page: u32) -> Vec<RawProduct> {
        let body = match self.fetcher.fetch_page(page).await {
            Ok(body) => body,
            Err(e) => {
                error!("Request failed on page {}: {:#}", page, e);
                return Vec::new();
            }
        };

        let timestamp = Utc::now();
        let html = Html::parse_document(&body);
        self.parser.parse_page(&html, timestamp)
    }

    /// Scrape pages 1..=max_pages in order, accumulating every page's
    /// records into one sequence
    pub async fn scrape_all_pages(&self, max_pages: u32) -> Vec<RawProduct> {
        let mut all_records = Vec::new();

        for page in 1..=max_pages {
            let mut records = self.scrape_page(page).await;
            all_records.append(&mut records);
        }

        info!("Total products scraped: {}", all_records.len());
        all_records
    }
}
