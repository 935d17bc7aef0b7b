//! Best-effort country registry: English names to ISO-3166 alpha-3 codes and
//! continent labels.
//!
//! Matching is exact on the name as it appears in the source file. Dataset
//! vocabularies differ ("Russia" vs "Russian Federation", "Slovakia" vs
//! "Slovak Republic"), so common aliases get their own entries. A miss is
//! not an error; callers leave the derived fields empty.

use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryInfo {
    pub name: &'static str,
    pub alpha3: &'static str,
    pub continent: &'static str,
}

const AFRICA: &str = "Africa";
const ASIA: &str = "Asia";
const EUROPE: &str = "Europe";
const NORTH_AMERICA: &str = "North America";
const OCEANIA: &str = "Oceania";
const SOUTH_AMERICA: &str = "South America";

const fn entry(
    name: &'static str,
    alpha3: &'static str,
    continent: &'static str,
) -> CountryInfo {
    CountryInfo {
        name,
        alpha3,
        continent,
    }
}

static REGISTRY: &[CountryInfo] = &[
    entry("Afghanistan", "AFG", ASIA),
    entry("Albania", "ALB", EUROPE),
    entry("Algeria", "DZA", AFRICA),
    entry("Angola", "AGO", AFRICA),
    entry("Argentina", "ARG", SOUTH_AMERICA),
    entry("Armenia", "ARM", ASIA),
    entry("Australia", "AUS", OCEANIA),
    entry("Austria", "AUT", EUROPE),
    entry("Azerbaijan", "AZE", ASIA),
    entry("Bahamas", "BHS", NORTH_AMERICA),
    entry("Bahrain", "BHR", ASIA),
    entry("Bangladesh", "BGD", ASIA),
    entry("Barbados", "BRB", NORTH_AMERICA),
    entry("Belarus", "BLR", EUROPE),
    entry("Belgium", "BEL", EUROPE),
    entry("Belize", "BLZ", NORTH_AMERICA),
    entry("Benin", "BEN", AFRICA),
    entry("Bhutan", "BTN", ASIA),
    entry("Bolivia", "BOL", SOUTH_AMERICA),
    entry("Bosnia and Herzegovina", "BIH", EUROPE),
    entry("Botswana", "BWA", AFRICA),
    entry("Brazil", "BRA", SOUTH_AMERICA),
    entry("Brunei Darussalam", "BRN", ASIA),
    entry("Bulgaria", "BGR", EUROPE),
    entry("Burkina Faso", "BFA", AFRICA),
    entry("Burundi", "BDI", AFRICA),
    entry("Cambodia", "KHM", ASIA),
    entry("Cameroon", "CMR", AFRICA),
    entry("Canada", "CAN", NORTH_AMERICA),
    entry("Central African Republic", "CAF", AFRICA),
    entry("Chad", "TCD", AFRICA),
    entry("Chile", "CHL", SOUTH_AMERICA),
    entry("China", "CHN", ASIA),
    entry("Colombia", "COL", SOUTH_AMERICA),
    entry("Comoros", "COM", AFRICA),
    entry("Congo, Dem. Rep.", "COD", AFRICA),
    entry("Congo, Rep.", "COG", AFRICA),
    entry("Costa Rica", "CRI", NORTH_AMERICA),
    entry("Cote d'Ivoire", "CIV", AFRICA),
    entry("Croatia", "HRV", EUROPE),
    entry("Cuba", "CUB", NORTH_AMERICA),
    entry("Cyprus", "CYP", ASIA),
    entry("Czech Republic", "CZE", EUROPE),
    entry("Czechia", "CZE", EUROPE),
    entry("Denmark", "DNK", EUROPE),
    entry("Djibouti", "DJI", AFRICA),
    entry("Dominican Republic", "DOM", NORTH_AMERICA),
    entry("Ecuador", "ECU", SOUTH_AMERICA),
    entry("Egypt", "EGY", AFRICA),
    entry("Egypt, Arab Rep.", "EGY", AFRICA),
    entry("El Salvador", "SLV", NORTH_AMERICA),
    entry("Equatorial Guinea", "GNQ", AFRICA),
    entry("Eritrea", "ERI", AFRICA),
    entry("Estonia", "EST", EUROPE),
    entry("Eswatini", "SWZ", AFRICA),
    entry("Ethiopia", "ETH", AFRICA),
    entry("Fiji", "FJI", OCEANIA),
    entry("Finland", "FIN", EUROPE),
    entry("France", "FRA", EUROPE),
    entry("Gabon", "GAB", AFRICA),
    entry("Gambia", "GMB", AFRICA),
    entry("Georgia", "GEO", ASIA),
    entry("Germany", "DEU", EUROPE),
    entry("Ghana", "GHA", AFRICA),
    entry("Greece", "GRC", EUROPE),
    entry("Guatemala", "GTM", NORTH_AMERICA),
    entry("Guinea", "GIN", AFRICA),
    entry("Guinea-Bissau", "GNB", AFRICA),
    entry("Haiti", "HTI", NORTH_AMERICA),
    entry("Honduras", "HND", NORTH_AMERICA),
    entry("Hong Kong, China", "HKG", ASIA),
    entry("Hungary", "HUN", EUROPE),
    entry("Iceland", "ISL", EUROPE),
    entry("India", "IND", ASIA),
    entry("Indonesia", "IDN", ASIA),
    entry("Iran", "IRN", ASIA),
    entry("Iran, Islamic Rep.", "IRN", ASIA),
    entry("Iraq", "IRQ", ASIA),
    entry("Ireland", "IRL", EUROPE),
    entry("Israel", "ISR", ASIA),
    entry("Italy", "ITA", EUROPE),
    entry("Jamaica", "JAM", NORTH_AMERICA),
    entry("Japan", "JPN", ASIA),
    entry("Jordan", "JOR", ASIA),
    entry("Kazakhstan", "KAZ", ASIA),
    entry("Kenya", "KEN", AFRICA),
    entry("Korea, Dem. Rep.", "PRK", ASIA),
    entry("Korea, Rep.", "KOR", ASIA),
    entry("Kuwait", "KWT", ASIA),
    entry("Kyrgyz Republic", "KGZ", ASIA),
    entry("Kyrgyzstan", "KGZ", ASIA),
    entry("Laos", "LAO", ASIA),
    entry("Latvia", "LVA", EUROPE),
    entry("Lebanon", "LBN", ASIA),
    entry("Lesotho", "LSO", AFRICA),
    entry("Liberia", "LBR", AFRICA),
    entry("Libya", "LBY", AFRICA),
    entry("Lithuania", "LTU", EUROPE),
    entry("Luxembourg", "LUX", EUROPE),
    entry("Madagascar", "MDG", AFRICA),
    entry("Malawi", "MWI", AFRICA),
    entry("Malaysia", "MYS", ASIA),
    entry("Mali", "MLI", AFRICA),
    entry("Malta", "MLT", EUROPE),
    entry("Mauritania", "MRT", AFRICA),
    entry("Mauritius", "MUS", AFRICA),
    entry("Mexico", "MEX", NORTH_AMERICA),
    entry("Moldova", "MDA", EUROPE),
    entry("Mongolia", "MNG", ASIA),
    entry("Montenegro", "MNE", EUROPE),
    entry("Morocco", "MAR", AFRICA),
    entry("Mozambique", "MOZ", AFRICA),
    entry("Myanmar", "MMR", ASIA),
    entry("Namibia", "NAM", AFRICA),
    entry("Nepal", "NPL", ASIA),
    entry("Netherlands", "NLD", EUROPE),
    entry("New Zealand", "NZL", OCEANIA),
    entry("Nicaragua", "NIC", NORTH_AMERICA),
    entry("Niger", "NER", AFRICA),
    entry("Nigeria", "NGA", AFRICA),
    entry("Norway", "NOR", EUROPE),
    entry("Oman", "OMN", ASIA),
    entry("Pakistan", "PAK", ASIA),
    entry("Panama", "PAN", NORTH_AMERICA),
    entry("Papua New Guinea", "PNG", OCEANIA),
    entry("Paraguay", "PRY", SOUTH_AMERICA),
    entry("Peru", "PER", SOUTH_AMERICA),
    entry("Philippines", "PHL", ASIA),
    entry("Poland", "POL", EUROPE),
    entry("Portugal", "PRT", EUROPE),
    entry("Puerto Rico", "PRI", NORTH_AMERICA),
    entry("Qatar", "QAT", ASIA),
    entry("Reunion", "REU", AFRICA),
    entry("Romania", "ROU", EUROPE),
    entry("Russia", "RUS", EUROPE),
    entry("Russian Federation", "RUS", EUROPE),
    entry("Rwanda", "RWA", AFRICA),
    entry("Sao Tome and Principe", "STP", AFRICA),
    entry("Saudi Arabia", "SAU", ASIA),
    entry("Senegal", "SEN", AFRICA),
    entry("Serbia", "SRB", EUROPE),
    entry("Sierra Leone", "SLE", AFRICA),
    entry("Singapore", "SGP", ASIA),
    entry("Slovak Republic", "SVK", EUROPE),
    entry("Slovakia", "SVK", EUROPE),
    entry("Slovenia", "SVN", EUROPE),
    entry("Somalia", "SOM", AFRICA),
    entry("South Africa", "ZAF", AFRICA),
    entry("South Sudan", "SSD", AFRICA),
    entry("Spain", "ESP", EUROPE),
    entry("Sri Lanka", "LKA", ASIA),
    entry("Sudan", "SDN", AFRICA),
    entry("Suriname", "SUR", SOUTH_AMERICA),
    entry("Swaziland", "SWZ", AFRICA),
    entry("Sweden", "SWE", EUROPE),
    entry("Switzerland", "CHE", EUROPE),
    entry("Syria", "SYR", ASIA),
    entry("Syrian Arab Republic", "SYR", ASIA),
    entry("Taiwan", "TWN", ASIA),
    entry("Tajikistan", "TJK", ASIA),
    entry("Tanzania", "TZA", AFRICA),
    entry("Thailand", "THA", ASIA),
    entry("Togo", "TGO", AFRICA),
    entry("Trinidad and Tobago", "TTO", NORTH_AMERICA),
    entry("Tunisia", "TUN", AFRICA),
    entry("Turkey", "TUR", ASIA),
    entry("Turkmenistan", "TKM", ASIA),
    entry("Uganda", "UGA", AFRICA),
    entry("Ukraine", "UKR", EUROPE),
    entry("United Arab Emirates", "ARE", ASIA),
    entry("United Kingdom", "GBR", EUROPE),
    entry("United States", "USA", NORTH_AMERICA),
    entry("Uruguay", "URY", SOUTH_AMERICA),
    entry("Uzbekistan", "UZB", ASIA),
    entry("Venezuela", "VEN", SOUTH_AMERICA),
    entry("Venezuela, RB", "VEN", SOUTH_AMERICA),
    entry("Vietnam", "VNM", ASIA),
    entry("West Bank and Gaza", "PSE", ASIA),
    entry("Yemen, Rep.", "YEM", ASIA),
    entry("Zambia", "ZMB", AFRICA),
    entry("Zimbabwe", "ZWE", AFRICA),
];

fn index() -> &'static HashMap<&'static str, &'static CountryInfo> {
    static INDEX: OnceLock<HashMap<&'static str, &'static CountryInfo>> = OnceLock::new();
    INDEX.get_or_init(|| REGISTRY.iter().map(|info| (info.name, info)).collect())
}

/// Exact-name lookup. `None` for anything the registry does not know.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static CountryInfo> {
    index().get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::lookup;

    #[test]
    fn known_countries_resolve() {
        let info = lookup("United States").unwrap();
        assert_eq!(info.alpha3, "USA");
        assert_eq!(info.continent, "North America");
    }

    #[test]
    fn aliases_share_a_code() {
        assert_eq!(lookup("Russia").unwrap().alpha3, "RUS");
        assert_eq!(lookup("Russian Federation").unwrap().alpha3, "RUS");
    }

    #[test]
    fn unknown_names_miss() {
        assert!(lookup("Atlantis").is_none());
        assert!(lookup("united states").is_none());
    }
}
