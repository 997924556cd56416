//! Normalizer property tests

use chrono::{TimeZone, Utc};

use fashion_etl::application::{clean_and_transform, TransformError};
use fashion_etl::domain::product::RawProduct;

const RATE: f64 = 16000.0;

fn raw_full() -> RawProduct {
    RawProduct {
        title: Some("Jacket 1".to_string()),
        price: Some("$50.00".to_string()),
        rating: Some("Rating: ⭐ 4.5 / 5".to_string()),
        colors: Some("3 Colors".to_string()),
        size: Some("Size: L".to_string()),
        gender: Some("Gender: Men".to_string()),
        timestamp: Utc.with_ymd_and_hms(2025, 5, 12, 10, 0, 0).unwrap(),
    }
}

#[test]
fn empty_input_fails_with_precondition_error() {
    assert_eq!(clean_and_transform(&[], RATE), Err(TransformError::EmptyInput));
}

#[test]
fn reference_row_converts_to_expected_values() {
    let rows = clean_and_transform(&[raw_full()], RATE).unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.title, "Jacket 1");
    assert_eq!(row.price, 50.0 * 16000.0);
    assert_eq!(row.rating, 4.5);
    assert_eq!(row.colors, 3);
    assert_eq!(row.size, "L");
    assert_eq!(row.gender, "Men");
    assert_eq!(row.timestamp, "2025-05-12T10:00:00+00:00");
}

#[test]
fn unknown_product_titles_are_dropped_any_case() {
    for title in ["Unknown Product", "UNKNOWN PRODUCT", "unknown product 12"] {
        let record = RawProduct {
            title: Some(title.to_string()),
            ..raw_full()
        };
        let rows = clean_and_transform(&[record], RATE).unwrap();
        assert!(rows.is_empty(), "title '{title}' should be dropped");
    }
}

#[test]
fn rating_sentinels_are_dropped() {
    for rating in ["Not Rated", "Invalid Rating / 5"] {
        let record = RawProduct {
            rating: Some(rating.to_string()),
            ..raw_full()
        };
        let rows = clean_and_transform(&[record], RATE).unwrap();
        assert!(rows.is_empty(), "rating '{rating}' should be dropped");
    }
}

#[test]
fn price_sentinel_is_dropped() {
    let record = RawProduct {
        price: Some("Price Unavailable".to_string()),
        ..raw_full()
    };
    let rows = clean_and_transform(&[record], RATE).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn row_with_any_missing_field_is_dropped() {
    let record = RawProduct {
        gender: None,
        ..raw_full()
    };
    let rows = clean_and_transform(&[record], RATE).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn identical_rows_collapse_to_one() {
    let rows = clean_and_transform(&[raw_full(), raw_full()], RATE).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn rows_differing_only_by_timestamp_are_both_kept() {
    let first = raw_full();
    let second = RawProduct {
        timestamp: Utc.with_ymd_and_hms(2025, 5, 12, 11, 0, 0).unwrap(),
        ..raw_full()
    };
    let rows = clean_and_transform(&[first, second], RATE).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn mixed_batch_keeps_only_valid_unique_rows() {
    let valid = raw_full();
    let sentinel_title = RawProduct {
        title: Some("Unknown Product".to_string()),
        ..raw_full()
    };
    let duplicate = raw_full();
    let incomplete = RawProduct {
        colors: None,
        ..raw_full()
    };

    let rows =
        clean_and_transform(&[valid, sentinel_title, duplicate, incomplete], RATE).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Jacket 1");
}

#[test]
fn conversion_rate_is_applied_not_hardcoded() {
    let rows = clean_and_transform(&[raw_full()], 2.0).unwrap();
    assert_eq!(rows[0].price, 100.0);
}

#[test]
fn fallback_price_text_converts() {
    // Verbatim fallback text from the card parser, e.g. "Rp 99.000".
    let record = RawProduct {
        price: Some("Rp 99.000".to_string()),
        ..raw_full()
    };
    let rows = clean_and_transform(&[record], RATE).unwrap();
    assert_eq!(rows[0].price, 99.0 * 16000.0);
}
