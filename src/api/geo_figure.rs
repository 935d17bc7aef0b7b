//! Geo scatter figure builder for located point records.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::GeoPoint;
use crate::figure::{
    ColorBar, ColorStop, Figure, Geo, GeoMarker, GeoProjection, GeoScatterTrace, GeoScope, Layout,
    LocationMode, MarkerLine, MarkerSymbol, ProjectionKind, Title, Trace, TraceMode,
};

/// Presentation knobs for [`geo_scatter_figure`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoFigureConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub scope: GeoFigureScope,
    #[serde(default)]
    pub colorbar_title: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoFigureScope {
    #[default]
    UsStates,
    World,
}

impl GeoFigureConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: GeoFigureScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn with_colorbar_title(mut self, title: impl Into<String>) -> Self {
        self.colorbar_title = Some(title.into());
        self
    }
}

/// Blue-to-grey scale shared by weight-colored geo markers.
fn weight_colorscale() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, "rgb(5, 10, 172)"),
        ColorStop::new(0.35, "rgb(40, 60, 190)"),
        ColorStop::new(0.5, "rgb(70, 100, 245)"),
        ColorStop::new(0.6, "rgb(90, 120, 245)"),
        ColorStop::new(0.7, "rgb(106, 137, 247)"),
        ColorStop::new(1.0, "rgb(220, 220, 220)"),
    ]
}

/// Square markers positioned by longitude/latitude and colored by weight.
///
/// The color domain is anchored at zero and tops out at the heaviest point,
/// so relative intensity reads directly off the shared scale.
#[must_use]
pub fn geo_scatter_figure(points: &[GeoPoint], config: &GeoFigureConfig) -> Figure {
    let cmax = points
        .iter()
        .map(|point| OrderedFloat(point.weight))
        .max()
        .map_or(0.0, |max| max.0);

    let trace = GeoScatterTrace {
        locationmode: match config.scope {
            GeoFigureScope::UsStates => LocationMode::UsaStates,
            GeoFigureScope::World => LocationMode::Iso3,
        },
        lon: points.iter().map(|point| point.lon).collect(),
        lat: points.iter().map(|point| point.lat).collect(),
        text: points.iter().map(|point| point.label.clone()).collect(),
        mode: TraceMode::Markers,
        marker: GeoMarker {
            size: 8.0,
            opacity: 0.8,
            reversescale: true,
            autocolorscale: false,
            symbol: MarkerSymbol::Square,
            line: MarkerLine::new(1.0, "rgba(102, 102, 102)"),
            colorscale: weight_colorscale(),
            cmin: 0.0,
            color: points.iter().map(|point| point.weight).collect(),
            cmax,
            colorbar: config
                .colorbar_title
                .clone()
                .map(|title| ColorBar { title }),
        },
    };

    let layout = Layout {
        title: config.title.clone().map(Title::plain),
        geo: Some(match config.scope {
            GeoFigureScope::UsStates => Geo {
                scope: Some(GeoScope::Usa),
                projection: Some(GeoProjection {
                    kind: ProjectionKind::AlbersUsa,
                }),
                showframe: None,
                showland: Some(true),
            },
            GeoFigureScope::World => Geo {
                scope: Some(GeoScope::World),
                projection: Some(GeoProjection {
                    kind: ProjectionKind::NaturalEarth,
                }),
                showframe: Some(false),
                showland: Some(true),
            },
        }),
        ..Layout::default()
    };

    Figure::new(vec![Trace::Scattergeo(trace)], layout)
}
