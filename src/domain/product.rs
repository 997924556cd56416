use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw product record as scraped from one listing card
///
/// Every text field is optional: the catalog omits or mangles markup freely,
/// and a missing sub-element must stay distinguishable from an empty string.
/// The timestamp is assigned once per page-fetch pass, so all records from
/// the same page carry the same capture time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawProduct {
    pub title: Option<String>,
    pub price: Option<String>,
    pub rating: Option<String>,
    pub colors: Option<String>,
    pub size: Option<String>,
    pub gender: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl RawProduct {
    /// True when any field is missing
    pub fn has_missing_field(&self) -> bool {
        self.title.is_none()
            || self.price.is_none()
            || self.rating.is_none()
            || self.colors.is_none()
            || self.size.is_none()
            || self.gender.is_none()
    }
}

/// Validated, normalized product record
///
/// Every field is fully populated; rows that could not satisfy the schema
/// were dropped during transformation, never null-filled. The capture
/// timestamp is carried through to every sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanProduct {
    pub title: String,
    pub price: f64,
    pub rating: f64,
    pub colors: i64,
    pub size: String,
    pub gender: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_detection() {
        let now = Utc::now();
        let full = RawProduct {
            title: Some("T-shirt 2".into()),
            price: Some("$100.00".into()),
            rating: Some("Rating: ⭐ 3.9 / 5".into()),
            colors: Some("3 Colors".into()),
            size: Some("Size: M".into()),
            gender: Some("Gender: Women".into()),
            timestamp: now,
        };
        assert!(!full.has_missing_field());

        let partial = RawProduct {
            rating: None,
            ..full
        };
        assert!(partial.has_missing_field());
    }
}
