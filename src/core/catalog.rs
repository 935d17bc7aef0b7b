use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Opaque handle for an interned indicator label.
///
/// Ids are dense and assigned in first-appearance order, so they double as
/// stable column positions in pivot output and option lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorId(u32);

impl IndicatorId {
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Interned indicator labels in first-appearance order.
///
/// The typed replacement for the loose label/value option lists a web
/// dashboard feeds its dropdowns: widgets hold ids, display strings come
/// from the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorCatalog {
    labels: IndexSet<String>,
}

impl IndicatorCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `label`, returning the existing id when already present.
    pub fn intern(&mut self, label: &str) -> IndicatorId {
        if let Some(index) = self.labels.get_index_of(label) {
            return IndicatorId(index as u32);
        }
        let (index, _) = self.labels.insert_full(label.to_owned());
        IndicatorId(index as u32)
    }

    #[must_use]
    pub fn id(&self, label: &str) -> Option<IndicatorId> {
        self.labels
            .get_index_of(label)
            .map(|index| IndicatorId(index as u32))
    }

    #[must_use]
    pub fn label(&self, id: IndicatorId) -> Option<&str> {
        self.labels.get_index(id.0 as usize).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, id: IndicatorId) -> bool {
        (id.0 as usize) < self.labels.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates `(id, label)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (IndicatorId, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| (IndicatorId(index as u32), label.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::IndicatorCatalog;

    #[test]
    fn intern_is_idempotent_and_order_preserving() {
        let mut catalog = IndicatorCatalog::new();
        let fertility = catalog.intern("Fertility rate");
        let life = catalog.intern("Life expectancy");
        assert_eq!(catalog.intern("Fertility rate"), fertility);
        assert_eq!(catalog.len(), 2);

        let labels: Vec<&str> = catalog.iter().map(|(_, label)| label).collect();
        assert_eq!(labels, vec!["Fertility rate", "Life expectancy"]);
        assert_eq!(catalog.label(life), Some("Life expectancy"));
        assert_eq!(catalog.id("Life expectancy"), Some(life));
    }
}
