//! Per-year animation frames for the grouped scatter.

use crate::api::projection::pivot_groups;
use crate::api::scatter_figure::{scatter_figure, scatter_traces};
use crate::core::{IndicatorTable, Selection};
use crate::error::BoardResult;
use crate::figure::{Figure, Frame};

/// One scatter frame per distinct year in the table, ascending, each named
/// by its year. Frames reuse the selection's indicators and grouping; only
/// the year varies. An unplottable selection yields no frames.
pub fn animation_frames(table: &IndicatorTable, selection: &Selection) -> BoardResult<Vec<Frame>> {
    let mut frames = Vec::with_capacity(table.years().len());
    for &year in table.years() {
        let yearly = Selection {
            year,
            ..selection.clone()
        };
        if let Some(pivot) = pivot_groups(table, &yearly)? {
            frames.push(Frame::new(year.to_string(), scatter_traces(table, &pivot)?));
        }
    }
    Ok(frames)
}

/// The selection's own scatter figure carrying one frame per year, ready for
/// a play-through-time control. The base traces show the selected year.
pub fn animated_scatter_figure(
    table: &IndicatorTable,
    selection: &Selection,
) -> BoardResult<Figure> {
    let figure = scatter_figure(table, selection)?;
    if figure.data.is_empty() {
        return Ok(figure);
    }
    Ok(figure.with_frames(animation_frames(table, selection)?))
}
