pub mod catalog;
pub mod extents;
pub mod observation;
pub mod selection;
pub mod table;

pub use catalog::{IndicatorCatalog, IndicatorId};
pub use extents::ValueExtents;
pub use observation::{GeoPoint, Observation};
pub use selection::{GroupKey, MAX_PLOTTED_INDICATORS, MIN_PLOTTED_INDICATORS, Selection};
pub use table::{CountryMeta, IndicatorTable};
