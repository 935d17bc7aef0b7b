//! Grouped scatter/bubble figure builder.

use crate::api::projection::{GroupedPivot, pivot_groups};
use crate::core::{IndicatorId, IndicatorTable, Selection};
use crate::error::{BoardError, BoardResult};
use crate::figure::{
    Axis, Figure, HoverMode, Layout, Legend, Margin, MarkerLine, MarkerSize, ScatterMarker,
    ScatterTrace, SizeMode, Title, Trace, TraceMode, Transition,
};

const MARKER_OPACITY: f64 = 0.7;
const FIXED_MARKER_SIZE: f64 = 15.0;
const MIN_MARKER_SIZE: f64 = 4.0;
const MAX_BUBBLE_DIAMETER_PX: f64 = 40.0;
const TRANSITION_MS: u64 = 500;

/// One marker trace per group for the selected indicators and year.
///
/// Two indicators plot x against y with fixed-size markers; a third switches
/// the markers to area sizing driven by its column. Fewer than two honored
/// indicators produce the empty figure.
pub fn scatter_figure(table: &IndicatorTable, selection: &Selection) -> BoardResult<Figure> {
    let Some(pivot) = pivot_groups(table, selection)? else {
        return Ok(Figure::empty());
    };
    Ok(Figure::new(
        scatter_traces(table, &pivot)?,
        scatter_layout(table, &pivot)?,
    ))
}

/// `sizeref` that caps the largest bubble at the standard diameter.
fn size_reference(max_value: f64) -> f64 {
    2.0 * max_value / (MAX_BUBBLE_DIAMETER_PX * MAX_BUBBLE_DIAMETER_PX)
}

fn white_outline() -> MarkerLine {
    MarkerLine::new(0.5, "white")
}

fn label_of(table: &IndicatorTable, id: IndicatorId) -> BoardResult<&str> {
    table
        .catalog()
        .label(id)
        .ok_or(BoardError::UnknownIndicator { id })
}

pub(crate) fn scatter_traces(
    table: &IndicatorTable,
    pivot: &GroupedPivot,
) -> BoardResult<Vec<Trace>> {
    let size_channel = pivot.has_size_channel();
    let sizeref = if size_channel {
        table
            .extents(pivot.indicators[2])
            .map_or(1.0, |extents| size_reference(extents.max))
    } else {
        1.0
    };

    let mut traces = Vec::with_capacity(pivot.groups.len());
    for slice in &pivot.groups {
        let x: Vec<Option<f64>> = slice.rows.iter().map(|row| row.cell(0)).collect();
        let y: Vec<Option<f64>> = slice.rows.iter().map(|row| row.cell(1)).collect();
        let text: Vec<String> = slice
            .rows
            .iter()
            .map(|row| {
                // With a size channel the hover label leads with the size
                // value; a missing cell falls back to the country alone.
                match row.cell(2) {
                    Some(size) => format!("{size}{}", row.country),
                    None => row.country.clone(),
                }
            })
            .collect();
        let marker = if size_channel {
            ScatterMarker {
                size: MarkerSize::PerPoint(slice.rows.iter().map(|row| row.cell(2)).collect()),
                sizemode: Some(SizeMode::Area),
                sizeref: Some(sizeref),
                sizemin: Some(MIN_MARKER_SIZE),
                line: white_outline(),
            }
        } else {
            ScatterMarker {
                size: MarkerSize::Fixed(FIXED_MARKER_SIZE),
                sizemode: None,
                sizeref: None,
                sizemin: None,
                line: white_outline(),
            }
        };
        traces.push(Trace::Scatter(ScatterTrace {
            x,
            y,
            text,
            mode: TraceMode::Markers,
            opacity: MARKER_OPACITY,
            marker,
            name: slice.group.clone(),
        }));
    }
    Ok(traces)
}

pub(crate) fn scatter_layout(table: &IndicatorTable, pivot: &GroupedPivot) -> BoardResult<Layout> {
    let x_label = label_of(table, pivot.indicators[0])?;
    let y_label = label_of(table, pivot.indicators[1])?;
    let title = if pivot.has_size_channel() {
        let size_label = label_of(table, pivot.indicators[2])?;
        format!(
            "{x_label} vs. {y_label} <br> for {size_label} (size) in {}",
            pivot.year
        )
    } else {
        format!("{x_label} vs. {y_label} in {}", pivot.year)
    };

    Ok(Layout {
        title: Some(Title::centered(title)),
        xaxis: Some(ranged_axis(table, pivot.indicators[0], x_label)),
        yaxis: Some(ranged_axis(table, pivot.indicators[1], y_label)),
        margin: Some(Margin {
            l: 40.0,
            b: 40.0,
            t: 10.0,
            r: 10.0,
        }),
        legend: Some(Legend { x: 1.0, y: 0.0 }),
        hovermode: Some(HoverMode::Closest),
        transition: Some(Transition {
            duration: TRANSITION_MS,
        }),
        geo: None,
    })
}

/// Axis titled by the indicator and ranged by its full-table extents, so the
/// frame does not jump when the year changes.
fn ranged_axis(table: &IndicatorTable, id: IndicatorId, label: &str) -> Axis {
    let axis = Axis::titled(label);
    match table.extents(id) {
        Some(extents) => axis.with_range(extents.range()),
        None => axis,
    }
}
