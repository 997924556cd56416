//! Flat-file sink

use std::path::Path;

use tracing::{error, info};

use super::SinkError;
use crate::domain::product::CleanProduct;

/// Column order for the delimited output, header row included
pub const CSV_HEADER: [&str; 7] = [
    "title",
    "price",
    "rating",
    "colors",
    "size",
    "gender",
    "timestamp",
];

/// Write the clean dataset to a delimited file, header row included,
/// no index column
pub fn save_to_csv(products: &[CleanProduct], path: &Path) -> Result<(), SinkError> {
    let result = write_csv(products, path);
    match &result {
        Ok(()) => info!("Data saved to {}", path.display()),
        Err(e) => error!("Failed to save data to CSV: {}", e),
    }
    result
}

fn write_csv(products: &[CleanProduct], path: &Path) -> Result<(), SinkError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;

    for product in products {
        let record = [
            product.title.clone(),
            product.price.to_string(),
            product.rating.to_string(),
            product.colors.to_string(),
            product.size.clone(),
            product.gender.clone(),
            product.timestamp.clone(),
        ];
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CleanProduct {
        CleanProduct {
            title: "T-shirt 2".to_string(),
            price: 1_634_400.0,
            rating: 3.9,
            colors: 3,
            size: "M".to_string(),
            gender: "Women".to_string(),
            timestamp: "2025-05-12T10:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");

        save_to_csv(&[sample()], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "title,price,rating,colors,size,gender,timestamp"
        );
        assert_eq!(
            lines.next().unwrap(),
            "T-shirt 2,1634400,3.9,3,M,Women,2025-05-12T10:00:00+00:00"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let result = save_to_csv(&[sample()], Path::new("/nonexistent/dir/products.csv"));
        assert!(result.is_err());
    }
}
