//! Transformation use case (the normalizer)
//!
//! Turns the accumulated raw records into the strict clean schema: filter
//! pipeline first (missing fields, sentinel values, duplicates), then
//! per-field parsing and casting, then an advisory schema check.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::constants::{fields, sentinels};
use crate::domain::product::{CleanProduct, RawProduct};

/// Hard precondition failures of the transformation stage
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransformError {
    #[error("Input must not be empty.")]
    EmptyInput,
}

/// First decimal-number substring, e.g. "4.5" out of "Rating: ⭐ 4.5 / 5"
static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.?\d*").unwrap());

/// First integer substring, e.g. "3" out of "3 Colors"
static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Clean and normalize the raw dataset
///
/// Empty input is a hard error: it signals an upstream scraping failure
/// that must stop the pipeline. Rows failing any validity filter or field
/// parse are dropped, never null-filled, so every returned row is fully
/// populated. Exact duplicates (all fields, timestamp included) collapse
/// to their first occurrence.
pub fn clean_and_transform(
    raw: &[RawProduct],
    conversion_rate: f64,
) -> Result<Vec<CleanProduct>, TransformError> {
    if raw.is_empty() {
        return Err(TransformError::EmptyInput);
    }

    let mut seen: HashSet<&RawProduct> = HashSet::new();
    let mut rows = Vec::new();

    for record in raw {
        if !is_complete(record)
            || !has_valid_title(record)
            || !has_valid_rating(record)
            || !has_valid_price(record)
        {
            continue;
        }
        if !seen.insert(record) {
            continue;
        }
        if let Some(row) = convert_record(record, conversion_rate) {
            rows.push(row);
        }
    }

    validate_schema(&rows);

    info!("Dataset cleaned: {} rows", rows.len());
    Ok(rows)
}

// --- filter predicates -------------------------------------------------

/// Keep only rows with every field present
fn is_complete(record: &RawProduct) -> bool {
    !record.has_missing_field()
}

/// Drop the "unknown product" placeholder titles, any case
fn has_valid_title(record: &RawProduct) -> bool {
    record
        .title
        .as_ref()
        .is_some_and(|t| !t.to_lowercase().contains(sentinels::UNKNOWN_PRODUCT))
}

/// Drop rating sentinel strings
fn has_valid_rating(record: &RawProduct) -> bool {
    record
        .rating
        .as_ref()
        .is_some_and(|r| !sentinels::INVALID_RATINGS.contains(&r.as_str()))
}

/// Drop the price sentinel string
fn has_valid_price(record: &RawProduct) -> bool {
    record
        .price
        .as_ref()
        .is_some_and(|p| p != sentinels::PRICE_UNAVAILABLE)
}

// --- field conversion ---------------------------------------------------

/// Parse and cast every field of a surviving row
///
/// Preceding filters guarantee all fields are present; a row whose text
/// defeats the field parsers is dropped with a warning.
fn convert_record(record: &RawProduct, conversion_rate: f64) -> Option<CleanProduct> {
    let title = record.title.clone()?;

    let price_text = record.price.as_deref()?;
    let Some(price) = parse_price(price_text) else {
        warn!("Dropping row '{}': unparsable price '{}'", title, price_text);
        return None;
    };

    let rating_text = record.rating.as_deref()?;
    let Some(rating) = parse_rating(rating_text) else {
        warn!(
            "Dropping row '{}': unparsable rating '{}'",
            title, rating_text
        );
        return None;
    };

    let colors_text = record.colors.as_deref()?;
    let Some(colors) = parse_colors(colors_text) else {
        warn!(
            "Dropping row '{}': unparsable colors '{}'",
            title, colors_text
        );
        return None;
    };

    Some(CleanProduct {
        title,
        price: price * conversion_rate,
        rating,
        colors,
        size: strip_label(record.size.as_deref()?, fields::SIZE_PREFIX),
        gender: strip_label(record.gender.as_deref()?, fields::GENDER_PREFIX),
        timestamp: record.timestamp.to_rfc3339(),
    })
}

/// Strip every character that is not a digit or decimal point, then cast
fn parse_price(text: &str) -> Option<f64> {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

fn parse_rating(text: &str) -> Option<f64> {
    DECIMAL_RE.find(text)?.as_str().parse().ok()
}

fn parse_colors(text: &str) -> Option<i64> {
    INTEGER_RE.find(text)?.as_str().parse().ok()
}

/// Remove the label prefix and surrounding whitespace ("Size: L" -> "L")
fn strip_label(text: &str, prefix: &str) -> String {
    text.replacen(prefix, "", 1).trim().to_string()
}

// --- advisory schema check ----------------------------------------------

/// Value-level schema advisories
///
/// Warns per violating column, never fails the run. Column types are
/// enforced by construction; this surfaces out-of-range values the typed
/// schema cannot reject.
fn validate_schema(rows: &[CleanProduct]) {
    let checks: [(&str, Box<dyn Fn(&CleanProduct) -> bool>); 6] = [
        ("title", Box::new(|r| !r.title.is_empty())),
        ("price", Box::new(|r| r.price.is_finite() && r.price >= 0.0)),
        (
            "rating",
            Box::new(|r| (0.0..=5.0).contains(&r.rating)),
        ),
        ("colors", Box::new(|r| r.colors >= 0)),
        ("size", Box::new(|r| !r.size.is_empty())),
        ("gender", Box::new(|r| !r.gender.is_empty())),
    ];

    for (column, check) in &checks {
        let violations = rows.iter().filter(|row| !check(row)).count();
        if violations == 0 {
            info!("Column '{}' conforms to the expected schema", column);
        } else {
            warn!(
                "Column '{}' has {} value(s) outside the expected schema",
                column, violations
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn raw(
        title: &str,
        price: &str,
        rating: &str,
        colors: &str,
        size: &str,
        gender: &str,
    ) -> RawProduct {
        RawProduct {
            title: Some(title.to_string()),
            price: Some(price.to_string()),
            rating: Some(rating.to_string()),
            colors: Some(colors.to_string()),
            size: Some(size.to_string()),
            gender: Some(gender.to_string()),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn rating_extraction_skips_leading_symbols() {
        assert_eq!(parse_rating("Rating: ⭐ 4.5 / 5"), Some(4.5));
        assert_eq!(parse_rating("Rating: 3 / 5"), Some(3.0));
        assert_eq!(parse_rating("no digits"), None);
    }

    #[test]
    fn price_stripping_keeps_digits_and_dot() {
        assert_eq!(parse_price("$50.00"), Some(50.0));
        assert_eq!(parse_price("Rp 99.000"), Some(99.0));
        assert_eq!(parse_price("free"), None);
    }

    #[test]
    fn label_stripping_trims() {
        assert_eq!(strip_label("Size: L", "Size:"), "L");
        assert_eq!(strip_label("Gender: Men ", "Gender:"), "Men");
    }

    #[test]
    fn full_row_conversion() {
        let input = vec![raw(
            "Jacket 1",
            "$50.00",
            "Rating: ⭐ 4.5 / 5",
            "3 Colors",
            "Size: L",
            "Gender: Men",
        )];

        let rows = clean_and_transform(&input, 16000.0).unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.title, "Jacket 1");
        assert_eq!(row.price, 50.0 * 16000.0);
        assert_eq!(row.rating, 4.5);
        assert_eq!(row.colors, 3);
        assert_eq!(row.size, "L");
        assert_eq!(row.gender, "Men");
    }

    #[test]
    fn empty_input_is_a_hard_error() {
        assert_eq!(
            clean_and_transform(&[], 16000.0),
            Err(TransformError::EmptyInput)
        );
    }

    #[test]
    fn unparsable_numeric_row_is_dropped() {
        let input = vec![raw(
            "Jacket 1",
            "contact seller",
            "Rating: ⭐ 4.5 / 5",
            "3 Colors",
            "Size: L",
            "Gender: Men",
        )];

        let rows = clean_and_transform(&input, 16000.0).unwrap();
        assert!(rows.is_empty());
    }
}
