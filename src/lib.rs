//! plotboard: reactive dashboard core.
//!
//! Loads tabular indicator data into an immutable in-memory table, reshapes
//! it per user selection (indicators, year, grouping) and produces
//! declarative Plotly-shaped figures. Display, transport and widget concerns
//! stay with the host; this crate is the pure recompute loop between them.

pub mod api;
pub mod core;
pub mod error;
pub mod figure;
pub mod ingest;
pub mod telemetry;

pub use api::{DashboardController, Response, SelectionEvent};
pub use core::{IndicatorTable, Selection};
pub use error::{BoardError, BoardResult};
pub use figure::Figure;
