//! Titled bar figure from pre-assembled named series.

use crate::figure::{BarTrace, Figure, Layout, Title, Trace};

/// Wraps parallel-array bar series in a titled figure. Series order is
/// preserved, which fixes both legend order and bar group order.
#[must_use]
pub fn bar_figure(title: impl Into<String>, series: Vec<BarTrace>) -> Figure {
    let layout = Layout {
        title: Some(Title::plain(title)),
        ..Layout::default()
    };
    Figure::new(series.into_iter().map(Trace::Bar).collect(), layout)
}
