//! Infrastructure layer: HTTP transport, markup parsing, configuration,
//! logging, and the load sinks

pub mod config;
pub mod html_parser;
pub mod http_client;
pub mod logging;
pub mod sinks;

pub use config::AppConfig;
pub use html_parser::ProductCardParser;
pub use http_client::{HttpClient, HttpClientConfig};
