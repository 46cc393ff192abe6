use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Currency facet
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyData {
    pub name: String,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso3: Option<String>,
}

/// Capital facet
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalData {
    pub name: String,
    pub capital: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso3: Option<String>,
}

/// ISO 3166 codes of a country. The upstream capitalizes these keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoData {
    pub name: String,
    #[serde(rename = "Iso2")]
    pub iso2: String,
    #[serde(rename = "Iso3")]
    pub iso3: String,
}

/// Flag facet; `flag` is an image URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagData {
    pub name: String,
    pub flag: String,
    pub iso2: String,
    #[serde(default)]
    pub iso3: String,
}

/// Population facet as merged into a country record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Population {
    pub data: PopulationData,
}

impl From<PopulationData> for Population {
    fn from(data: PopulationData) -> Self {
        Population { data }
    }
}

/// Population payload of the facts service, projected at decode time.
///
/// Only `code`, `country` and `{year, value}` per sample survive decoding;
/// anything else the upstream sends (`iso3`, per-sample extras) is dropped by
/// serde. Sample order is the upstream's.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationData {
    pub code: String,
    pub country: String,
    #[serde(default)]
    pub population_counts: Vec<PopulationCount>,
}

/// One yearly sample. Numbers are kept exactly as the upstream wrote them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopulationCount {
    pub year: Number,
    pub value: Number,
}
