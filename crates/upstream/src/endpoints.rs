//! Fixed upstream endpoint locations.

/// Base URL of the country-metadata service.
pub const COUNTRY_METADATA_BASE_URL: &str = "https://date.nager.at/api/v3";

/// Base URL of the country-facts service.
pub const COUNTRY_FACTS_BASE_URL: &str = "https://countriesnow.space/api/v0.1/countries";

/// Resolves every gateway operation to its endpoint URL.
///
/// Built once at startup and owned by the gateway. The defaults point at the
/// public services; other bases are only useful for pointing the gateway at a
/// local stand-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    metadata_base: String,
    facts_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(COUNTRY_METADATA_BASE_URL, COUNTRY_FACTS_BASE_URL)
    }
}

impl Endpoints {
    pub fn new(metadata_base: impl Into<String>, facts_base: impl Into<String>) -> Self {
        Self {
            metadata_base: metadata_base.into().trim_end_matches('/').to_string(),
            facts_base: facts_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn metadata_base(&self) -> &str {
        &self.metadata_base
    }

    pub fn facts_base(&self) -> &str {
        &self.facts_base
    }

    pub fn available_countries(&self) -> String {
        format!("{}/AvailableCountries", self.metadata_base)
    }

    /// Country info by code. The code is percent-encoded into the path.
    pub fn country_info(&self, country_code: &str) -> String {
        format!(
            "{}/CountryInfo/{}",
            self.metadata_base,
            urlencoding::encode(country_code)
        )
    }

    pub fn population(&self) -> String {
        format!("{}/population", self.facts_base)
    }

    pub fn states(&self) -> String {
        format!("{}/states", self.facts_base)
    }

    pub fn currency(&self) -> String {
        format!("{}/currency", self.facts_base)
    }

    pub fn capital(&self) -> String {
        format!("{}/capital", self.facts_base)
    }

    pub fn flag_images(&self) -> String {
        format!("{}/flag/images", self.facts_base)
    }

    pub fn iso_codes(&self) -> String {
        format!("{}/iso", self.facts_base)
    }

    pub fn state_cities(&self) -> String {
        format!("{}/state/cities", self.facts_base)
    }

    pub fn city_population(&self) -> String {
        format!("{}/population/cities", self.facts_base)
    }
}
