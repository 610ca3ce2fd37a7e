//! REST client for the Supabase (PostgREST) table API
//!
//! Inserts rows through `POST {url}/rest/v1/{table}` and asks PostgREST to
//! echo the created row back as a single JSON object.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use std::time::Duration;

use super::{InsertedRecord, RecordStore, StoreError};
use crate::config::ServiceSettings;
use crate::state::SubmissionRecord;

/// Media type that makes PostgREST return one object instead of an array
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Client for a Supabase project's REST endpoint
pub struct SupabaseClient {
    /// The HTTP client
    client: reqwest::Client,
    /// Project URL, without trailing slash
    base_url: String,
    /// Anon or service key
    api_key: String,
}

impl SupabaseClient {
    /// Create a client from resolved settings
    pub fn new(settings: &ServiceSettings) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.url.trim_end_matches('/').to_string(),
            api_key: settings.anon_key.clone(),
        })
    }

    /// Endpoint for a table
    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn headers(&self) -> Result<HeaderMap, StoreError> {
        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| StoreError::Transport(format!("invalid api key header: {e}")))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| StoreError::Transport(format!("invalid api key header: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static(SINGLE_OBJECT));
        headers.insert("prefer", HeaderValue::from_static("return=representation"));
        Ok(headers)
    }
}

#[async_trait]
impl RecordStore for SupabaseClient {
    async fn insert(
        &self,
        table: &str,
        record: &SubmissionRecord,
    ) -> Result<InsertedRecord, StoreError> {
        let url = self.table_url(table);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(&[record])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: describe_error_body(&body),
            });
        }

        serde_json::from_str::<InsertedRecord>(&body).map_err(|e| {
            tracing::error!("Failed to decode inserted row: {}", e);
            StoreError::Transport(format!("unexpected response body: {e}"))
        })
    }
}

/// Error payload PostgREST sends with non-2xx responses
#[derive(Debug, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    message: String,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

/// Turn an error response body into a one-line message
fn describe_error_body(body: &str) -> String {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => {
            let mut message = match err.code {
                Some(code) if !code.is_empty() => format!("[{}] {}", code, err.message),
                _ => err.message,
            };
            if let Some(details) = err.details.filter(|d| !d.is_empty()) {
                message.push_str(&format!(" ({details})"));
            }
            if let Some(hint) = err.hint.filter(|h| !h.is_empty()) {
                message.push_str(&format!(" hint: {hint}"));
            }
            message
        }
        Err(_) if body.trim().is_empty() => "empty error response".to_string(),
        Err(_) => body.chars().take(200).collect(),
    }
}
