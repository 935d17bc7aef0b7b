//! The filter-and-project engine.
//!
//! Reshapes a long-form [`IndicatorTable`] into per-group pivot slices for
//! one selection: rows keyed by country, one column per honored indicator.
//! Pure and allocation-light; every recompute starts from the full table,
//! so no state leaks between selections.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{
    GroupKey, IndicatorId, IndicatorTable, MAX_PLOTTED_INDICATORS, Selection,
};
use crate::error::{BoardError, BoardResult};

/// One pivoted row: a country plus one cell per honored indicator, in
/// selection order. `None` marks a combination the table never observed.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotRow {
    pub country: String,
    pub cells: SmallVec<[Option<f64>; MAX_PLOTTED_INDICATORS]>,
}

impl PivotRow {
    /// Cell for the `index`-th honored indicator, `None` past the end.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<f64> {
        self.cells.get(index).copied().flatten()
    }
}

/// All pivot rows belonging to one group value.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSlice {
    pub group: String,
    pub rows: Vec<PivotRow>,
}

/// The engine's output: one slice per distinct group value in the table, in
/// first-appearance order, plus the selection facts the figure builders need.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedPivot {
    pub indicators: SmallVec<[IndicatorId; MAX_PLOTTED_INDICATORS]>,
    pub year: i32,
    pub group_by: GroupKey,
    pub groups: Vec<GroupSlice>,
}

impl GroupedPivot {
    /// Whether the size channel is active (exactly three indicators).
    #[must_use]
    pub fn has_size_channel(&self) -> bool {
        self.indicators.len() == MAX_PLOTTED_INDICATORS
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|slice| slice.rows.len()).sum()
    }
}

/// Pivots `table` for `selection`.
///
/// Returns `Ok(None)` when fewer than two indicators are selected (the
/// no-figure outcome, not an error). Selections longer than three indicators
/// are truncated to their first three, so the result is identical to
/// selecting exactly those three. A year absent from the table yields every
/// group with an empty row list.
///
/// # Errors
///
/// [`BoardError::UnknownIndicator`] when an honored id is not in the
/// table's catalog.
pub fn pivot_groups(
    table: &IndicatorTable,
    selection: &Selection,
) -> BoardResult<Option<GroupedPivot>> {
    if !selection.is_plottable() {
        return Ok(None);
    }
    let indicators: SmallVec<[IndicatorId; MAX_PLOTTED_INDICATORS]> =
        selection.honored().iter().copied().collect();
    for &id in &indicators {
        if !table.catalog().contains(id) {
            return Err(BoardError::UnknownIndicator { id });
        }
    }

    let year = selection.year;
    let mut groups = Vec::new();
    for group in table.group_values(selection.group_by) {
        let mut rows: Vec<PivotRow> = Vec::new();
        for country in table.countries_in_group(selection.group_by, group) {
            let cells: SmallVec<[Option<f64>; MAX_PLOTTED_INDICATORS]> = indicators
                .iter()
                .map(|&id| table.value(country, id, year))
                .collect();
            // A pivot row exists only where at least one selected indicator
            // was observed for that country and year.
            if cells.iter().any(Option::is_some) {
                rows.push(PivotRow {
                    country: country.to_owned(),
                    cells,
                });
            }
        }
        rows.sort_by(|a, b| a.country.cmp(&b.country));
        groups.push(GroupSlice {
            group: group.to_owned(),
            rows,
        });
    }

    let pivot = GroupedPivot {
        indicators,
        year,
        group_by: selection.group_by,
        groups,
    };
    trace!(
        year,
        indicators = pivot.indicators.len(),
        groups = pivot.groups.len(),
        rows = pivot.row_count(),
        "pivot computed"
    );
    Ok(Some(pivot))
}
