//! Google Sheets sink
//!
//! Authenticates with a service-account credential file (RS256 JWT
//! assertion exchanged for a bearer token) and overwrites the configured
//! range with the table's raw values, no header row.

use std::path::Path;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};

use super::SinkError;
use crate::domain::product::CleanProduct;

const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Subset of the service-account key file needed for the token exchange
#[derive(Debug, Deserialize)]
struct ServiceAccountKey {
    client_email: String,
    private_key: String,
    token_uri: String,
}

#[derive(Debug, Serialize)]
struct Claims {
    iss: String,
    scope: String,
    aud: String,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Write the clean dataset to a Google Sheets range, overwrite semantics
pub async fn save_to_google_sheets(
    products: &[CleanProduct],
    spreadsheet_id: &str,
    range: &str,
    credentials_path: &Path,
) -> Result<(), SinkError> {
    let result = write_sheet(products, spreadsheet_id, range, credentials_path).await;
    match &result {
        Ok(()) => info!("Data written to Google Sheets."),
        Err(e) => error!("Failed to write data to Google Sheets: {}", e),
    }
    result
}

async fn write_sheet(
    products: &[CleanProduct],
    spreadsheet_id: &str,
    range: &str,
    credentials_path: &Path,
) -> Result<(), SinkError> {
    let key = load_key(credentials_path).await?;
    let client = reqwest::Client::new();
    let token = fetch_access_token(&client, &key).await?;

    let values = to_raw_values(products);
    let row_count = values.len();
    let url = format!(
        "{SHEETS_API_BASE}/{spreadsheet_id}/values/{range}?valueInputOption=RAW"
    );

    let response = client
        .put(&url)
        .bearer_auth(&token)
        .json(&json!({ "values": values }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SinkError::SheetsApi {
            status: status.as_u16(),
            body,
        });
    }

    info!(
        "Wrote {} rows without header to range {}",
        row_count, range
    );
    Ok(())
}

async fn load_key(path: &Path) -> Result<ServiceAccountKey, SinkError> {
    let content = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&content)
        .map_err(|e| SinkError::Credentials(format!("{}: {}", path.display(), e)))
}

/// Exchange a signed service-account assertion for a bearer token
async fn fetch_access_token(
    client: &reqwest::Client,
    key: &ServiceAccountKey,
) -> Result<String, SinkError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        iss: key.client_email.clone(),
        scope: SHEETS_SCOPE.to_string(),
        aud: key.token_uri.clone(),
        iat: now,
        exp: now + 3600,
    };

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)?;

    let response: TokenResponse = client
        .post(&key.token_uri)
        .form(&[
            ("grant_type", JWT_BEARER_GRANT),
            ("assertion", assertion.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response.access_token)
}

/// Rows as raw Sheets values, preserving column order, no header
fn to_raw_values(products: &[CleanProduct]) -> Vec<Vec<Value>> {
    products
        .iter()
        .map(|p| {
            vec![
                json!(p.title),
                json!(p.price),
                json!(p.rating),
                json!(p.colors),
                json!(p.size),
                json!(p.gender),
                json!(p.timestamp),
            ]
        })
        .collect()
}
