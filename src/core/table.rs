use std::collections::{BTreeSet, HashMap};

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::catalog::{IndicatorCatalog, IndicatorId};
use crate::core::extents::{ExtentsAccumulator, ValueExtents};
use crate::core::observation::Observation;
use crate::core::selection::GroupKey;

/// Location metadata attached to a country on first sight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryMeta {
    pub code: String,
    pub continent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CellKey {
    country: u32,
    indicator: IndicatorId,
    year: i32,
}

/// Immutable long-form dataset with the lookup structures every projection
/// needs: interned indicators, per-country metadata, the sorted year axis,
/// mean-aggregated `(country, indicator, year)` cells and full-table extents.
///
/// Built once per dataset; projections borrow it and never mutate it.
#[derive(Debug, Clone, Default)]
pub struct IndicatorTable {
    rows: Vec<Observation>,
    catalog: IndicatorCatalog,
    countries: IndexMap<String, CountryMeta>,
    continents: IndexSet<String>,
    years: Vec<i32>,
    cells: HashMap<CellKey, f64>,
    extents: Vec<Option<ValueExtents>>,
}

impl IndicatorTable {
    /// Builds the table in one pass over `rows`.
    ///
    /// Duplicate `(country, indicator, year)` cells collapse to their
    /// arithmetic mean. Country metadata is first-seen-wins, and the
    /// continent roster keeps first-appearance order, empty string included.
    #[must_use]
    pub fn from_observations(rows: Vec<Observation>) -> Self {
        let mut catalog = IndicatorCatalog::new();
        let mut countries: IndexMap<String, CountryMeta> = IndexMap::new();
        let mut continents: IndexSet<String> = IndexSet::new();
        let mut year_set: BTreeSet<i32> = BTreeSet::new();
        let mut sums: HashMap<CellKey, (f64, usize)> = HashMap::new();
        let mut accumulators: Vec<ExtentsAccumulator> = Vec::new();

        for row in &rows {
            let indicator = catalog.intern(&row.indicator);
            let country_index = match countries.get_index_of(&row.country) {
                Some(index) => index,
                None => {
                    let (index, _) = countries.insert_full(
                        row.country.clone(),
                        CountryMeta {
                            code: row.code.clone(),
                            continent: row.continent.clone(),
                        },
                    );
                    index
                }
            };
            continents.insert(row.continent.clone());
            year_set.insert(row.year);

            let key = CellKey {
                country: country_index as u32,
                indicator,
                year: row.year,
            };
            let slot = sums.entry(key).or_insert((0.0, 0));
            slot.0 += row.value;
            slot.1 += 1;

            let slot = indicator.raw() as usize;
            if accumulators.len() <= slot {
                accumulators.resize_with(slot + 1, ExtentsAccumulator::default);
            }
            accumulators[slot].push(row.value);
        }

        let cells = sums
            .into_iter()
            .map(|(key, (sum, count))| (key, sum / count as f64))
            .collect();
        let extents = accumulators.iter().map(ExtentsAccumulator::finish).collect();
        let years: Vec<i32> = year_set.into_iter().collect();

        debug!(
            rows = rows.len(),
            indicators = catalog.len(),
            countries = countries.len(),
            years = years.len(),
            "indicator table built"
        );

        Self {
            rows,
            catalog,
            countries,
            continents,
            years,
            cells,
            extents,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    #[must_use]
    pub fn catalog(&self) -> &IndicatorCatalog {
        &self.catalog
    }

    /// Indicator labels in first-appearance order.
    pub fn indicator_labels(&self) -> impl Iterator<Item = (IndicatorId, &str)> {
        self.catalog.iter()
    }

    /// Full-table extents for one indicator; `None` when it never carried a
    /// finite value.
    #[must_use]
    pub fn extents(&self, indicator: IndicatorId) -> Option<ValueExtents> {
        self.extents
            .get(indicator.raw() as usize)
            .copied()
            .flatten()
    }

    /// All years present, ascending.
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// `(first, last)` year, or `None` for an empty table.
    #[must_use]
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        Some((*self.years.first()?, *self.years.last()?))
    }

    /// The present year closest to `wanted`, ties resolved toward the
    /// earlier year.
    #[must_use]
    pub fn nearest_year(&self, wanted: i32) -> Option<i32> {
        self.years
            .iter()
            .copied()
            .min_by_key(|year| (i64::from(*year) - i64::from(wanted)).abs())
    }

    #[must_use]
    pub fn country_meta(&self, country: &str) -> Option<&CountryMeta> {
        self.countries.get(country)
    }

    /// Country names in first-appearance order.
    pub fn country_names(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Distinct group values under `key`, in first-appearance order. For
    /// [`GroupKey::Continent`] this includes the empty string when any
    /// country resolved to no continent.
    #[must_use]
    pub fn group_values(&self, key: GroupKey) -> Vec<&str> {
        match key {
            GroupKey::Continent => self.continents.iter().map(String::as_str).collect(),
            GroupKey::Country => self.country_names().collect(),
        }
    }

    /// Countries whose `key` column equals `group`, in first-appearance
    /// order.
    #[must_use]
    pub fn countries_in_group(&self, key: GroupKey, group: &str) -> Vec<&str> {
        match key {
            GroupKey::Continent => self
                .countries
                .iter()
                .filter(|(_, meta)| meta.continent == group)
                .map(|(name, _)| name.as_str())
                .collect(),
            GroupKey::Country => self
                .countries
                .get_key_value(group)
                .map(|(name, _)| vec![name.as_str()])
                .unwrap_or_default(),
        }
    }

    /// Mean-aggregated cell value, or `None` when the combination never
    /// occurred.
    #[must_use]
    pub fn value(&self, country: &str, indicator: IndicatorId, year: i32) -> Option<f64> {
        let country = self.countries.get_index_of(country)? as u32;
        self.cells
            .get(&CellKey {
                country,
                indicator,
                year,
            })
            .copied()
    }
}
