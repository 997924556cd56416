//! Load sinks for the clean dataset
//!
//! Each sink consumes the full normalized table and is independently
//! fallible; the pipeline driver attempts every sink regardless of earlier
//! sink failures.

pub mod csv_sink;
pub mod postgres_sink;
pub mod sheets_sink;

pub use csv_sink::save_to_csv;
pub use postgres_sink::save_to_postgres;
pub use sheets_sink::save_to_google_sheets;

use thiserror::Error;

/// Failures surfaced by the load sinks
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Missing environment variable: {name}")]
    MissingEnv { name: &'static str },

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Credential file error: {0}")]
    Credentials(String),

    #[error("JWT signing failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sheets API rejected the write: status {status}: {body}")]
    SheetsApi { status: u16, body: String },

    #[error("Database failure: {0}")]
    Database(#[from] sqlx::Error),
}
