use serde::{Deserialize, Serialize};

use super::facts::{CapitalData, CurrencyData, FlagData, IsoData, Population};

/// Entry of the available-countries list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub country_code: String,
    pub name: String,
}

/// Country record from the country-metadata service.
///
/// The metadata service only fills the identity fields and `borders`; the
/// facet fields stay empty until the aggregation layer merges them in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    pub common_name: String,
    pub official_name: String,
    pub country_code: String,
    #[serde(default)]
    pub region: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<CountryInfo>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<Population>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<CapitalData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codes: Option<IsoData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<FlagData>,
}
