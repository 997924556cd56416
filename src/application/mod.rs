//! Application layer: the extract and transform use cases

pub mod extraction;
pub mod transform;

pub use extraction::ProductScraper;
pub use transform::{clean_and_transform, TransformError};
