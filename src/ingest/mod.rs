//! Dataset ingestion: schemas, readers, the country registry and the
//! canonical dataset presets.

pub mod countries;
pub mod datasets;
#[cfg(feature = "remote-data")]
pub mod fetch;
pub mod loader;
pub mod schema;

pub use countries::{CountryInfo, lookup};
pub use datasets::{GeoPreset, TablePreset};
#[cfg(feature = "remote-data")]
pub use fetch::{fetch_text, load_remote_geo, load_remote_table};
pub use loader::{
    read_geo_csv, read_geo_path, read_long_csv, read_table_csv, read_table_path, read_wide_csv,
};
pub use schema::{GeoSchema, LabelPart, LongSchema, TableSchema, WideSchema, WideYear};
