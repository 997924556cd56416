//! Service layer traits
//!
//! Seams between the extraction use case and its infrastructure
//! collaborators, so orchestration can be exercised with stub
//! implementations in tests.

use anyhow::Result;
use async_trait::async_trait;

/// Fetches the raw markup of one catalog page
///
/// Implementations construct the page URL themselves (page 1 is the bare
/// catalog root, page N > 1 a page-suffixed path). Any transport failure,
/// timeout, or non-2xx status surfaces as `Err`; recovery is the caller's
/// decision, not the fetcher's.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<String>;
}
