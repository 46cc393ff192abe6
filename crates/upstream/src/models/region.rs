use serde::{Deserialize, Serialize};

/// Population history of a single city.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityData {
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub population_counts: Vec<CityPopulationCount>,
}

/// City samples come back as strings, with the upstream's own spelling of
/// `reliabilty`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityPopulationCount {
    pub year: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliabilty: Option<String>,
}
