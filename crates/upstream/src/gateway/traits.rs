//! Upstream gateway trait definition.

use async_trait::async_trait;

use crate::errors::GatewayError;
use crate::models::{
    ApiResponse, CapitalData, CityData, Country, CountryInfo, CurrencyData, FlagData, IsoData,
    PopulationData,
};
use serde_json::Value;

/// One method per upstream operation. Each call is exactly one HTTP round trip.
///
/// Facts-service operations that are keyed by country take the country's
/// common name, not its code.
#[async_trait]
pub trait UpstreamGateway: Send + Sync {
    /// All countries known to the metadata service.
    async fn available_countries(&self) -> Result<Vec<Country>, GatewayError>;

    /// Country record by code.
    ///
    /// Returns `Ok(None)` when the upstream answers 2xx with an empty or
    /// `null` body.
    async fn country_info(&self, country_code: &str) -> Result<Option<CountryInfo>, GatewayError>;

    async fn currency(&self, country: &str) -> Result<CurrencyData, GatewayError>;

    async fn capital(&self, country: &str) -> Result<CapitalData, GatewayError>;

    async fn iso_codes(&self, country: &str) -> Result<IsoData, GatewayError>;

    /// Flag image lookup, keyed by ISO 3166-1 alpha-2 code.
    async fn flag(&self, iso2: &str) -> Result<FlagData, GatewayError>;

    async fn population(&self, country: &str) -> Result<PopulationData, GatewayError>;

    /// States of a country, as the full upstream envelope.
    ///
    /// `data` is left undecoded so it can be handed back exactly as received.
    async fn states(&self, country: &str) -> Result<ApiResponse<Value>, GatewayError>;

    /// City names of a state, as the full upstream envelope with `data` undecoded.
    async fn cities(&self, country: &str, state: &str) -> Result<ApiResponse<Value>, GatewayError>;

    async fn city_population(&self, city: &str) -> Result<CityData, GatewayError>;
}
