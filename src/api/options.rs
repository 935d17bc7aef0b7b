//! Selection-widget option lists.

use serde::{Deserialize, Serialize};

use crate::core::{IndicatorCatalog, IndicatorId};

/// One dropdown entry: display label plus the typed id widgets hand back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorOption {
    pub label: String,
    pub value: IndicatorId,
}

/// Every indicator as an option, in catalog (first-appearance) order.
#[must_use]
pub fn indicator_options(catalog: &IndicatorCatalog) -> Vec<IndicatorOption> {
    catalog
        .iter()
        .map(|(value, label)| IndicatorOption {
            label: label.to_owned(),
            value,
        })
        .collect()
}

/// Search-narrowed option list: options whose label contains `search`
/// (case-sensitive substring) plus every currently selected option, so an
/// active selection never disappears from the widget while filtering.
///
/// An empty search returns `None`, the widget's no-update signal.
#[must_use]
pub fn filter_options(
    catalog: &IndicatorCatalog,
    search: &str,
    selected: &[IndicatorId],
) -> Option<Vec<IndicatorOption>> {
    if search.is_empty() {
        return None;
    }
    Some(
        catalog
            .iter()
            .filter(|(value, label)| label.contains(search) || selected.contains(value))
            .map(|(value, label)| IndicatorOption {
                label: label.to_owned(),
                value,
            })
            .collect(),
    )
}
