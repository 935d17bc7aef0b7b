//! Declarative, Plotly-shaped figure model.
//!
//! Figures are plain data: trace arrays plus layout metadata, serialized in
//! the field order Plotly's JSON schema expects. Nothing in this module reads
//! a table or performs I/O; builders under `crate::api` assemble these types
//! from projections.

pub mod contract;
pub mod layout;
pub mod model;
pub mod trace;

pub use contract::{FIGURE_JSON_SCHEMA_V1, FigureJsonContractV1};
pub use layout::{
    Axis, Geo, GeoProjection, GeoScope, HoverMode, Layout, Legend, Margin, ProjectionKind, Title,
    Transition, XAnchor, YAnchor,
};
pub use model::{Figure, Frame};
pub use trace::{
    BarTrace, ChoroplethTrace, ColorBar, ColorStop, GeoMarker, GeoScatterTrace, LocationMode,
    MarkerLine, MarkerSize, MarkerSymbol, ScatterMarker, ScatterTrace, SizeMode, Trace, TraceMode,
};
