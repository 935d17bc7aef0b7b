//! Delimited-file readers producing tables and geo records.
//!
//! Header columns are resolved by name up front, so a misconfigured schema
//! fails before any row is read. Rows whose value cell is empty or
//! non-numeric are skipped and counted, mirroring how NaN cells are
//! invisible in the charts; an unparsable year is a malformed file and
//! aborts the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::core::{GeoPoint, IndicatorTable, Observation};
use crate::error::{BoardError, BoardResult};
use crate::ingest::countries;
use crate::ingest::schema::{GeoSchema, LabelPart, LongSchema, TableSchema, WideSchema, WideYear};

fn column_index(headers: &StringRecord, name: &str) -> BoardResult<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| BoardError::MissingColumn {
            column: name.to_owned(),
        })
}

fn parse_year(cell: &str, row: usize) -> BoardResult<i32> {
    cell.trim()
        .parse::<i32>()
        .map_err(|_| BoardError::MalformedRow {
            row,
            message: format!("`{cell}` is not a year"),
        })
}

/// `None` for empty, non-numeric and non-finite cells.
fn parse_value(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn locate(observation: Observation) -> Observation {
    match countries::lookup(&observation.country) {
        Some(info) => observation.with_location(info.alpha3, info.continent),
        None => observation,
    }
}

/// Reads a long-form file: one observation per row.
pub fn read_long_csv<R: Read>(reader: R, schema: &LongSchema) -> BoardResult<IndicatorTable> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    let country_idx = column_index(&headers, &schema.country)?;
    let indicator_idx = column_index(&headers, &schema.indicator)?;
    let year_idx = column_index(&headers, &schema.year)?;
    let value_idx = column_index(&headers, &schema.value)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        // The header occupies line 1.
        let row = index + 2;
        let country = record.get(country_idx).unwrap_or("").trim();
        let indicator = record.get(indicator_idx).unwrap_or("").trim();
        let year = parse_year(record.get(year_idx).unwrap_or(""), row)?;
        let Some(value) = parse_value(record.get(value_idx).unwrap_or("")) else {
            skipped += 1;
            continue;
        };
        rows.push(locate(Observation::new(country, indicator, year, value)));
    }
    if skipped > 0 {
        debug!(skipped, "rows without a numeric value were skipped");
    }
    Ok(IndicatorTable::from_observations(rows))
}

enum YearSource {
    Column(usize),
    Fixed(i32),
}

/// Reads a wide-form file: one row per country, each configured value
/// column melted into its own indicator.
pub fn read_wide_csv<R: Read>(reader: R, schema: &WideSchema) -> BoardResult<IndicatorTable> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    let country_idx = column_index(&headers, &schema.country)?;
    let year_source = match &schema.year {
        WideYear::Column(name) => YearSource::Column(column_index(&headers, name)?),
        WideYear::Fixed(year) => YearSource::Fixed(*year),
    };
    let group_idx = match schema.group.as_deref() {
        Some(name) => Some(column_index(&headers, name)?),
        None => None,
    };
    let mut value_idxs = Vec::with_capacity(schema.values.len());
    for name in &schema.values {
        value_idxs.push((column_index(&headers, name)?, name.as_str()));
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let row = index + 2;
        let country = record.get(country_idx).unwrap_or("").trim();
        let year = match year_source {
            YearSource::Column(idx) => parse_year(record.get(idx).unwrap_or(""), row)?,
            YearSource::Fixed(year) => year,
        };
        let info = countries::lookup(country);
        let code = info.map_or("", |info| info.alpha3);
        // A group column in the file wins over the derived continent.
        let continent = match group_idx {
            Some(idx) => record.get(idx).unwrap_or("").trim(),
            None => info.map_or("", |info| info.continent),
        };
        for &(idx, name) in &value_idxs {
            let Some(value) = parse_value(record.get(idx).unwrap_or("")) else {
                skipped += 1;
                continue;
            };
            rows.push(Observation::new(country, name, year, value).with_location(code, continent));
        }
    }
    if skipped > 0 {
        debug!(skipped, "cells without a numeric value were skipped");
    }
    Ok(IndicatorTable::from_observations(rows))
}

/// Schema-dispatching table reader.
pub fn read_table_csv<R: Read>(reader: R, schema: &TableSchema) -> BoardResult<IndicatorTable> {
    match schema {
        TableSchema::Long(schema) => read_long_csv(reader, schema),
        TableSchema::Wide(schema) => read_wide_csv(reader, schema),
    }
}

enum LabelSource {
    Column(usize),
    Literal(String),
}

/// Reads located records for geo scatter plots. Rows missing a numeric
/// longitude, latitude or weight are skipped, since they cannot be placed.
pub fn read_geo_csv<R: Read>(reader: R, schema: &GeoSchema) -> BoardResult<Vec<GeoPoint>> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    let lon_idx = column_index(&headers, &schema.lon)?;
    let lat_idx = column_index(&headers, &schema.lat)?;
    let weight_idx = column_index(&headers, &schema.weight)?;
    let mut label_sources = Vec::with_capacity(schema.label.len());
    for part in &schema.label {
        label_sources.push(match part {
            LabelPart::Column(name) => LabelSource::Column(column_index(&headers, name)?),
            LabelPart::Literal(text) => LabelSource::Literal(text.clone()),
        });
    }

    let mut points = Vec::new();
    let mut skipped = 0usize;
    for result in reader.records() {
        let record = result?;
        let (Some(lon), Some(lat), Some(weight)) = (
            parse_value(record.get(lon_idx).unwrap_or("")),
            parse_value(record.get(lat_idx).unwrap_or("")),
            parse_value(record.get(weight_idx).unwrap_or("")),
        ) else {
            skipped += 1;
            continue;
        };
        let mut label = String::new();
        for source in &label_sources {
            match source {
                LabelSource::Column(idx) => label.push_str(record.get(*idx).unwrap_or("")),
                LabelSource::Literal(text) => label.push_str(text),
            }
        }
        points.push(GeoPoint::new(lon, lat, label, weight));
    }
    if skipped > 0 {
        debug!(skipped, "geo rows without numeric coordinates were skipped");
    }
    Ok(points)
}

pub fn read_table_path(path: &Path, schema: &TableSchema) -> BoardResult<IndicatorTable> {
    read_table_csv(File::open(path)?, schema)
}

pub fn read_geo_path(path: &Path, schema: &GeoSchema) -> BoardResult<Vec<GeoPoint>> {
    read_geo_csv(File::open(path)?, schema)
}
