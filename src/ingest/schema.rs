//! Column schemas for the delimited flat files the loader understands.
//!
//! Schemas are serializable so replay scenarios and host configs can name
//! their columns without touching code. Defaults match the world development
//! indicators file.

use serde::{Deserialize, Serialize};

/// Long form: one observation per row, columns naming country, indicator,
/// year and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongSchema {
    #[serde(default = "default_country_column")]
    pub country: String,
    #[serde(default = "default_indicator_column")]
    pub indicator: String,
    #[serde(default = "default_year_column")]
    pub year: String,
    #[serde(default = "default_value_column")]
    pub value: String,
}

fn default_country_column() -> String {
    "Country Name".to_owned()
}

fn default_indicator_column() -> String {
    "Indicator Name".to_owned()
}

fn default_year_column() -> String {
    "Year".to_owned()
}

fn default_value_column() -> String {
    "Value".to_owned()
}

impl Default for LongSchema {
    fn default() -> Self {
        Self {
            country: default_country_column(),
            indicator: default_indicator_column(),
            year: default_year_column(),
            value: default_value_column(),
        }
    }
}

impl LongSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_country_column(mut self, name: impl Into<String>) -> Self {
        self.country = name.into();
        self
    }

    #[must_use]
    pub fn with_indicator_column(mut self, name: impl Into<String>) -> Self {
        self.indicator = name.into();
        self
    }

    #[must_use]
    pub fn with_year_column(mut self, name: impl Into<String>) -> Self {
        self.year = name.into();
        self
    }

    #[must_use]
    pub fn with_value_column(mut self, name: impl Into<String>) -> Self {
        self.value = name.into();
        self
    }
}

/// Where a wide-form file's year comes from: a column per row, or one fixed
/// year for the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WideYear {
    Column(String),
    Fixed(i32),
}

/// Wide form: one row per country, selected numeric columns melted into one
/// indicator each. An optional group column supplies the continent label
/// directly instead of the derived lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WideSchema {
    pub country: String,
    pub year: WideYear,
    #[serde(default)]
    pub group: Option<String>,
    pub values: Vec<String>,
}

impl WideSchema {
    #[must_use]
    pub fn new(country: impl Into<String>, year: WideYear) -> Self {
        Self {
            country: country.into(),
            year,
            group: None,
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_group_column(mut self, name: impl Into<String>) -> Self {
        self.group = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_value_columns(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.values = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Either table shape, for callers configured at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableSchema {
    Long(LongSchema),
    Wide(WideSchema),
}

/// One piece of a geo record's hover label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPart {
    /// The row's value in the named column, verbatim.
    Column(String),
    /// Fixed text.
    Literal(String),
}

/// Columns for files of located records (geo scatter input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoSchema {
    pub lon: String,
    pub lat: String,
    pub weight: String,
    #[serde(default)]
    pub label: Vec<LabelPart>,
}

impl GeoSchema {
    #[must_use]
    pub fn new(
        lon: impl Into<String>,
        lat: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            lon: lon.into(),
            lat: lat.into(),
            weight: weight.into(),
            label: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, parts: impl IntoIterator<Item = LabelPart>) -> Self {
        self.label = parts.into_iter().collect();
        self
    }
}
