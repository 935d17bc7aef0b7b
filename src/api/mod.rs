//! Public API surface: the engine, the figure builders and the controller.

pub mod animation;
pub mod bar_figure;
pub mod choropleth_figure;
pub mod controller;
pub mod geo_figure;
pub mod options;
pub mod presenter;
pub mod projection;
pub mod scatter_figure;

pub use animation::{animated_scatter_figure, animation_frames};
pub use bar_figure::bar_figure;
pub use choropleth_figure::choropleth_figure;
pub use controller::{ControllerState, DashboardController, Response, SelectionEvent};
pub use geo_figure::{GeoFigureConfig, GeoFigureScope, geo_scatter_figure};
pub use options::{IndicatorOption, filter_options, indicator_options};
pub use presenter::{FigurePresenter, JsonWriterPresenter, NullPresenter, RecordingPresenter};
pub use projection::{GroupSlice, GroupedPivot, PivotRow, pivot_groups};
pub use scatter_figure::scatter_figure;
