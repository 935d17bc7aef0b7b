//! Remote dataset retrieval. Compiled behind the `remote-data` feature.

use reqwest::blocking::Client;
use tracing::debug;

use crate::core::{GeoPoint, IndicatorTable};
use crate::error::{BoardError, BoardResult};
use crate::ingest::datasets::{GeoPreset, TablePreset};
use crate::ingest::loader::{read_geo_csv, read_table_csv};
use crate::ingest::schema::{GeoSchema, TableSchema};

fn fetch_error(url: &str, message: impl Into<String>) -> BoardError {
    BoardError::Fetch {
        url: url.to_owned(),
        message: message.into(),
    }
}

/// Fetches `url` and returns its body as text. Non-success statuses are
/// errors; there is no retry.
pub fn fetch_text(url: &str) -> BoardResult<String> {
    let response = Client::new()
        .get(url)
        .send()
        .map_err(|e| fetch_error(url, e.to_string()))?;
    if !response.status().is_success() {
        return Err(fetch_error(
            url,
            format!("status {}", response.status()),
        ));
    }
    let body = response
        .text()
        .map_err(|e| fetch_error(url, e.to_string()))?;
    debug!(url, bytes = body.len(), "dataset fetched");
    Ok(body)
}

pub fn load_remote_table(url: &str, schema: &TableSchema) -> BoardResult<IndicatorTable> {
    let body = fetch_text(url)?;
    read_table_csv(body.as_bytes(), schema)
}

pub fn load_remote_geo(url: &str, schema: &GeoSchema) -> BoardResult<Vec<GeoPoint>> {
    let body = fetch_text(url)?;
    read_geo_csv(body.as_bytes(), schema)
}

impl TablePreset {
    /// Fetches and reads the preset in one step.
    pub fn load(&self) -> BoardResult<IndicatorTable> {
        load_remote_table(self.url, &self.schema)
    }
}

impl GeoPreset {
    pub fn load(&self) -> BoardResult<Vec<GeoPoint>> {
        load_remote_geo(self.url, &self.schema)
    }
}
