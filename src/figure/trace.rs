use serde::{Deserialize, Serialize};

/// One chart series. Internally tagged so the serialized form carries the
/// Plotly `type` discriminator alongside the trace fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Choropleth(ChoroplethTrace),
    Scattergeo(GeoScatterTrace),
    Bar(BarTrace),
}

/// Marker series in data coordinates. `None` cells serialize as JSON `null`,
/// which Plotly renders as a gap rather than a zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub text: Vec<String>,
    pub mode: TraceMode,
    pub opacity: f64,
    pub marker: ScatterMarker,
    pub name: String,
}

/// Filled world-map regions keyed by ISO-3166 alpha-3 codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethTrace {
    pub locations: Vec<String>,
    pub z: Vec<f64>,
    pub text: Vec<String>,
    pub zmax: f64,
    pub zmid: f64,
    pub zmin: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

/// Point markers positioned by longitude/latitude on a geo subplot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoScatterTrace {
    pub locationmode: LocationMode,
    pub lon: Vec<f64>,
    pub lat: Vec<f64>,
    pub text: Vec<String>,
    pub mode: TraceMode,
    pub marker: GeoMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub name: String,
}

impl BarTrace {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        x: impl IntoIterator<Item = impl Into<String>>,
        y: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            x: x.into_iter().map(Into::into).collect(),
            y: y.into_iter().collect(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    Markers,
    Lines,
}

/// Marker styling for [`ScatterTrace`]. Size is either one number for the
/// whole series or a per-point column; the `size*` companions only appear in
/// the per-point case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterMarker {
    pub size: MarkerSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<SizeMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizemin: Option<f64>,
    pub line: MarkerLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerSize {
    Fixed(f64),
    PerPoint(Vec<Option<f64>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
    Area,
    Diameter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLine {
    pub width: f64,
    pub color: String,
}

impl MarkerLine {
    #[must_use]
    pub fn new(width: f64, color: impl Into<String>) -> Self {
        Self {
            width,
            color: color.into(),
        }
    }
}

/// Marker styling for [`GeoScatterTrace`]: one shared color scale driven by a
/// per-point weight column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoMarker {
    pub size: f64,
    pub opacity: f64,
    pub reversescale: bool,
    pub autocolorscale: bool,
    pub symbol: MarkerSymbol,
    pub line: MarkerLine,
    pub colorscale: Vec<ColorStop>,
    pub cmin: f64,
    pub color: Vec<f64>,
    pub cmax: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSymbol {
    Circle,
    Square,
}

/// One `[fraction, color]` stop of a color scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop(pub f64, pub String);

impl ColorStop {
    #[must_use]
    pub fn new(fraction: f64, color: impl Into<String>) -> Self {
        Self(fraction, color.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBar {
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationMode {
    #[serde(rename = "USA-states")]
    UsaStates,
    #[serde(rename = "ISO-3")]
    Iso3,
    #[serde(rename = "country names")]
    CountryNames,
}
