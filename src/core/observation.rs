use serde::{Deserialize, Serialize};

/// One long-form data point: a country's value for an indicator in a year.
///
/// `code` and `continent` are enrichment fields resolved during ingest; an
/// unrecognised country leaves them empty rather than failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub country: String,
    pub indicator: String,
    pub year: i32,
    pub value: f64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub continent: String,
}

impl Observation {
    #[must_use]
    pub fn new(
        country: impl Into<String>,
        indicator: impl Into<String>,
        year: i32,
        value: f64,
    ) -> Self {
        Self {
            country: country.into(),
            indicator: indicator.into(),
            year,
            value,
            code: String::new(),
            continent: String::new(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, code: impl Into<String>, continent: impl Into<String>) -> Self {
        self.code = code.into();
        self.continent = continent.into();
        self
    }
}

/// One located record for geo scatter plots: a position, a hover label and a
/// weight that drives marker color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
    pub label: String,
    pub weight: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(lon: f64, lat: f64, label: impl Into<String>, weight: f64) -> Self {
        Self {
            lon,
            lat,
            label: label.into(),
            weight,
        }
    }
}
