use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::IndicatorId;

/// Most indicators a single figure plots: x, y and an optional size channel.
pub const MAX_PLOTTED_INDICATORS: usize = 3;

/// Fewest indicators that produce a figure at all (x and y).
pub const MIN_PLOTTED_INDICATORS: usize = 2;

/// Which column partitions pivot rows into trace groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    #[default]
    Continent,
    Country,
}

/// What the user currently wants plotted: indicators, a year, a grouping.
///
/// The indicator list is stored as chosen; overlong selections are truncated
/// only when read through [`Selection::honored`], so the original choice
/// survives round-trips through serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub indicators: SmallVec<[IndicatorId; MAX_PLOTTED_INDICATORS]>,
    pub year: i32,
    #[serde(default)]
    pub group_by: GroupKey,
}

impl Selection {
    #[must_use]
    pub fn new(indicators: impl IntoIterator<Item = IndicatorId>, year: i32) -> Self {
        Self {
            indicators: indicators.into_iter().collect(),
            year,
            group_by: GroupKey::default(),
        }
    }

    #[must_use]
    pub fn with_group_by(mut self, group_by: GroupKey) -> Self {
        self.group_by = group_by;
        self
    }

    /// The indicators that actually get plotted: the first
    /// [`MAX_PLOTTED_INDICATORS`], in selection order.
    #[must_use]
    pub fn honored(&self) -> &[IndicatorId] {
        let take = self.indicators.len().min(MAX_PLOTTED_INDICATORS);
        &self.indicators[..take]
    }

    /// Whether enough indicators are selected to draw anything.
    #[must_use]
    pub fn is_plottable(&self) -> bool {
        self.honored().len() >= MIN_PLOTTED_INDICATORS
    }
}
