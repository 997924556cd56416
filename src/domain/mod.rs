//! Domain layer: product models, site constants, and service traits

pub mod constants;
pub mod product;
pub mod services;

pub use product::{CleanProduct, RawProduct};
pub use services::PageFetcher;
