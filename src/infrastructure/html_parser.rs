//! HTML parsing and data extraction for catalog listing pages
//!
//! Locates listing cards in one page's markup and extracts the raw product
//! fields, tolerating missing sub-elements and inconsistent price markup.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::domain::constants::fields;
use crate::domain::product::RawProduct;

/// Raw fields classified by keyword substring scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Rating,
    Colors,
    Size,
    Gender,
}

/// Ordered (keyword, field) matchers applied to each paragraph line
///
/// A line is assigned to the first matcher whose keyword it contains, and a
/// field keeps the first line assigned to it. Order matters: a line that
/// mentions several keywords goes to the earliest entry.
pub const FIELD_MATCHERS: [(&str, FieldKind); 4] = [
    (fields::RATING_KEYWORD, FieldKind::Rating),
    (fields::COLORS_KEYWORD, FieldKind::Colors),
    (fields::SIZE_PREFIX, FieldKind::Size),
    (fields::GENDER_PREFIX, FieldKind::Gender),
];

/// Classify one text line by the matcher table
pub fn classify_line(text: &str) -> Option<FieldKind> {
    FIELD_MATCHERS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|&(_, field)| field)
}

/// CSS selectors for the card extraction, matching the catalog's markup
#[derive(Debug, Clone)]
pub struct CardSelectors {
    pub card: String,
    pub title: String,
    pub price_container: String,
    pub price: String,
    pub price_fallback: String,
    pub paragraph: String,
}

impl Default for CardSelectors {
    fn default() -> Self {
        Self {
            card: ".collection-card".to_string(),
            title: ".product-title".to_string(),
            price_container: ".price-container".to_string(),
            price: ".price".to_string(),
            price_fallback: "p.price".to_string(),
            paragraph: "p".to_string(),
        }
    }
}

/// Parser for extracting raw product records from listing pages
pub struct ProductCardParser {
    card_selector: Selector,
    title_selector: Selector,
    price_container_selector: Selector,
    price_selector: Selector,
    price_fallback_selector: Selector,
    paragraph_selector: Selector,
}

impl ProductCardParser {
    /// Create a parser with the default catalog selectors
    pub fn new() -> Result<Self> {
        Self::with_selectors(&CardSelectors::default())
    }

    /// Create a parser with custom selectors
    pub fn with_selectors(selectors: &CardSelectors) -> Result<Self> {
        Ok(Self {
            card_selector: Self::compile(&selectors.card)?,
            title_selector: Self::compile(&selectors.title)?,
            price_container_selector: Self::compile(&selectors.price_container)?,
            price_selector: Self::compile(&selectors.price)?,
            price_fallback_selector: Self::compile(&selectors.price_fallback)?,
            paragraph_selector: Self::compile(&selectors.paragraph)?,
        })
    }

    fn compile(selector: &str) -> Result<Selector> {
        Selector::parse(selector).map_err(|e| anyhow!("Invalid selector '{selector}': {e}"))
    }

    /// Extract every listing card on one page
    ///
    /// All records share the page's capture timestamp. A card whose
    /// extraction fails is logged and skipped; the remaining cards on the
    /// page still parse.
    pub fn parse_page(&self, html: &Html, timestamp: DateTime<Utc>) -> Vec<RawProduct> {
        let mut records = Vec::new();

        for (index, card) in html.select(&self.card_selector).enumerate() {
            match self.extract_card(card, timestamp) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("Skipping malformed card at index {}: {}", index, e);
                }
            }
        }

        debug!("Extracted {} records from page", records.len());
        records
    }

    /// Extract the raw fields of a single card
    fn extract_card(&self, card: ElementRef, timestamp: DateTime<Utc>) -> Result<RawProduct> {
        let title = self.element_text(&card, &self.title_selector);
        let price = self.extract_price(&card);

        let mut rating = None;
        let mut colors = None;
        let mut size = None;
        let mut gender = None;

        // Field placement varies between cards; classify each paragraph by
        // keyword, first match wins per field.
        for paragraph in card.select(&self.paragraph_selector) {
            let text = collect_text(&paragraph);
            if text.is_empty() {
                continue;
            }
            match classify_line(&text) {
                Some(FieldKind::Rating) => {
                    if rating.is_none() {
                        rating = Some(text);
                    }
                }
                Some(FieldKind::Colors) => {
                    if colors.is_none() {
                        colors = Some(text);
                    }
                }
                Some(FieldKind::Size) => {
                    if size.is_none() {
                        size = Some(text);
                    }
                }
                Some(FieldKind::Gender) => {
                    if gender.is_none() {
                        gender = Some(text);
                    }
                }
                None => {}
            }
        }

        Ok(RawProduct {
            title,
            price,
            rating,
            colors,
            size,
            gender,
            timestamp,
        })
    }

    /// Two-tier price extraction
    ///
    /// The catalog renders price markup inconsistently: most cards nest the
    /// value inside a price container, some carry a bare price paragraph.
    /// The nested value is preferred; the top-level paragraph is only used
    /// when the nested one is absent or empty.
    fn extract_price(&self, card: &ElementRef) -> Option<String> {
        let nested = card
            .select(&self.price_container_selector)
            .next()
            .and_then(|container| self.element_text(&container, &self.price_selector));

        nested.or_else(|| self.element_text(card, &self.price_fallback_selector))
    }

    /// Text of the first selector match under an element, trimmed;
    /// empty text is treated as absent
    fn element_text(&self, element: &ElementRef, selector: &Selector) -> Option<String> {
        element
            .select(selector)
            .next()
            .map(|el| collect_text(&el))
            .filter(|text| !text.is_empty())
    }
}

fn collect_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
