//! Canonical dataset presets: source URLs plus the schemas that fit them.

use crate::ingest::schema::{GeoSchema, LabelPart, LongSchema, TableSchema, WideSchema, WideYear};

pub const COUNTRY_INDICATORS_URL: &str =
    "https://plotly.github.io/datasets/country_indicators.csv";
pub const GAPMINDER_FIVE_YEAR_URL: &str =
    "https://raw.githubusercontent.com/plotly/datasets/master/gapminderDataFiveYear.csv";
pub const GDP_LIFE_EXP_2007_URL: &str =
    "https://gist.githubusercontent.com/chriddyp/5d1ea79569ed194d432e56108a04d188/raw/a9f9e8076b837d541398e999dcbac2b2826a81f8/gdp-life-exp-2007.csv";
pub const AGRICULTURAL_EXPORTS_2011_URL: &str =
    "https://gist.githubusercontent.com/chriddyp/c78bf172206ce24f77d6363a2d754b59/raw/c353e8ef842413cae56ae3920b8fd78468aa4cb2/usa-agricultural-exports-2011.csv";
pub const AIRPORT_TRAFFIC_2011_URL: &str =
    "https://raw.githubusercontent.com/plotly/datasets/master/2011_february_us_airport_traffic.csv";

/// A retrievable table: where it lives and how to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePreset {
    pub url: &'static str,
    pub schema: TableSchema,
}

/// A retrievable file of located records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoPreset {
    pub url: &'static str,
    pub schema: GeoSchema,
}

/// World development indicators, long form, one observation per row.
#[must_use]
pub fn country_indicators() -> TablePreset {
    TablePreset {
        url: COUNTRY_INDICATORS_URL,
        schema: TableSchema::Long(LongSchema::default()),
    }
}

/// Gapminder demographic data in five-year steps; the continent column in
/// the file labels the groups.
#[must_use]
pub fn gapminder_five_year() -> TablePreset {
    TablePreset {
        url: GAPMINDER_FIVE_YEAR_URL,
        schema: TableSchema::Wide(
            WideSchema::new("country", WideYear::Column("year".to_owned()))
                .with_group_column("continent")
                .with_value_columns(["pop", "lifeExp", "gdpPercap"]),
        ),
    }
}

/// GDP against life expectancy, one 2007 snapshot per country.
#[must_use]
pub fn gdp_life_exp_2007() -> TablePreset {
    TablePreset {
        url: GDP_LIFE_EXP_2007_URL,
        schema: TableSchema::Wide(
            WideSchema::new("country", WideYear::Fixed(2007))
                .with_group_column("continent")
                .with_value_columns(["gdp per capita", "life expectancy"]),
        ),
    }
}

/// US agricultural exports by state, 2011. States miss the country lookup,
/// so their derived code and continent stay empty.
#[must_use]
pub fn agricultural_exports_2011() -> TablePreset {
    TablePreset {
        url: AGRICULTURAL_EXPORTS_2011_URL,
        schema: TableSchema::Wide(
            WideSchema::new("state", WideYear::Fixed(2011)).with_value_columns([
                "total exports",
                "beef",
                "pork",
                "poultry",
                "dairy",
                "corn",
                "wheat",
                "cotton",
            ]),
        ),
    }
}

/// US airport arrivals, February 2011. The label template reproduces the
/// source's concatenation, including its missing separators.
#[must_use]
pub fn airport_traffic_2011() -> GeoPreset {
    GeoPreset {
        url: AIRPORT_TRAFFIC_2011_URL,
        schema: GeoSchema::new("long", "lat", "cnt").with_label([
            LabelPart::Column("airport".to_owned()),
            LabelPart::Column("city".to_owned()),
            LabelPart::Literal(", ".to_owned()),
            LabelPart::Column("state".to_owned()),
            LabelPart::Literal("Arrivals: ".to_owned()),
            LabelPart::Column("cnt".to_owned()),
        ]),
    }
}
