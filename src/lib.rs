//! fashion-etl — batch ETL for fashion-studio.dicoding.dev product listings
//!
//! Extracts product cards from the paginated catalog, normalizes the raw
//! text fields into a strict tabular schema, and loads the clean dataset
//! into CSV, Google Sheets, and PostgreSQL sinks.

pub mod application;
pub mod domain;
pub mod infrastructure;
