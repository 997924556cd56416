//! Site characteristics and domain constants
//!
//! Constants specific to the fashion-studio.dicoding.dev catalog and the
//! normalization rules applied to its listings.

/// fashion-studio.dicoding.dev site constants
pub mod site {
    /// Catalog root URL
    pub const BASE_URL: &str = "https://fashion-studio.dicoding.dev";

    /// Path segment prefix for pages after the first (page 2 -> "/page2")
    pub const PAGE_PATH_PREFIX: &str = "page";

    /// Page numbering is 1-based
    pub const PAGE_NUMBERING_BASE: u32 = 1;

    /// CSS class of one listing card
    pub const CARD_CLASS: &str = "collection-card";
}

/// Scraping defaults
pub mod scraping {
    /// Default maximum pages per run
    pub const DEFAULT_MAX_PAGES: u32 = 50;

    /// Per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

    /// Default request rate cap
    pub const DEFAULT_MAX_REQUESTS_PER_SECOND: u32 = 5;
}

/// Sentinel strings the catalog renders for intentionally absent values
pub mod sentinels {
    /// Title placeholder for delisted products (matched case-insensitively)
    pub const UNKNOWN_PRODUCT: &str = "unknown product";

    /// Rating placeholders
    pub const INVALID_RATINGS: [&str; 2] = ["Invalid Rating / 5", "Not Rated"];

    /// Price placeholder
    pub const PRICE_UNAVAILABLE: &str = "Price Unavailable";
}

/// Field classification keywords and label prefixes
pub mod fields {
    /// Rating line marker
    pub const RATING_KEYWORD: &str = "Rating:";

    /// Color-count line marker
    pub const COLORS_KEYWORD: &str = "Colors";

    /// Size line marker, also the prefix stripped during normalization
    pub const SIZE_PREFIX: &str = "Size:";

    /// Gender line marker, also the prefix stripped during normalization
    pub const GENDER_PREFIX: &str = "Gender:";
}

/// Transformation defaults
pub mod transform {
    /// Source currency units to IDR
    pub const DEFAULT_CONVERSION_RATE: f64 = 16000.0;
}
