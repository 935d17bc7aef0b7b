use serde::{Deserialize, Serialize};

/// Min/max/mean of an indicator over every observation in a table.
///
/// Computed once per indicator at load time and never from a filtered slice,
/// so axis ranges and color domains stay fixed while the year or selection
/// changes underneath them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueExtents {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ValueExtents {
    /// Axis-range form, `[min, max]`.
    #[must_use]
    pub fn range(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

/// Streaming accumulator behind [`ValueExtents`].
#[derive(Debug, Clone)]
pub(crate) struct ExtentsAccumulator {
    min: f64,
    max: f64,
    sum: f64,
    count: usize,
}

impl Default for ExtentsAccumulator {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            count: 0,
        }
    }
}

impl ExtentsAccumulator {
    /// Folds one value in. Non-finite values are ignored.
    pub(crate) fn push(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
        self.count += 1;
    }

    /// `None` when no finite value was ever pushed.
    pub(crate) fn finish(&self) -> Option<ValueExtents> {
        if self.count == 0 {
            return None;
        }
        Some(ValueExtents {
            min: self.min,
            max: self.max,
            mean: self.sum / self.count as f64,
        })
    }
}
