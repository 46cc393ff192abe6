use std::sync::Arc;

use async_trait::async_trait;
use countryinfo_upstream::{
    ApiResponse, CapitalData, Country, CountryInfo, CurrencyData, FlagData, IsoData, Population,
    UpstreamGateway,
};
use log::{debug, warn};
use serde_json::Value;

use super::countries_model::CountryFacets;
use super::countries_traits::CountryServiceTrait;
use crate::constants::{
    COUNTRIES_FETCHED, COUNTRY_INFO_FETCHED, NO_COUNTRY, NO_COUNTRY_CODE, POPULATION_UNAVAILABLE,
};
use crate::errors::{Error, Result};

/// Aggregates country data from the upstream gateway.
///
/// Stateless apart from the gateway handle; one instance serves every request.
pub struct CountryService {
    gateway: Arc<dyn UpstreamGateway>,
}

impl CountryService {
    pub fn new(gateway: Arc<dyn UpstreamGateway>) -> Self {
        CountryService { gateway }
    }

    async fn fetch_capital(&self, common_name: &str) -> Result<CapitalData> {
        self.gateway.capital(common_name).await.map_err(|e| {
            warn!("Capital lookup for '{}' failed: {}", common_name, e);
            Error::CapitalUnavailable
        })
    }

    async fn fetch_currency(&self, common_name: &str) -> Result<CurrencyData> {
        self.gateway.currency(common_name).await.map_err(|e| {
            warn!("Currency lookup for '{}' failed: {}", common_name, e);
            Error::CurrencyUnavailable
        })
    }

    /// Two hops: ISO codes by name, then the flag by the resolved ISO-2 code.
    async fn fetch_flag(&self, common_name: &str) -> Result<(IsoData, FlagData)> {
        let codes = self.get_iso_codes(common_name).await?;
        let flag = self.gateway.flag(&codes.iso2).await.map_err(|e| {
            warn!("Flag lookup for '{}' failed: {}", codes.iso2, e);
            Error::FlagUnavailable
        })?;
        Ok((codes, flag))
    }

    async fn fetch_population(&self, common_name: &str) -> Result<Population> {
        let data = self.gateway.population(common_name).await.map_err(|e| {
            warn!("Population lookup for '{}' failed: {}", common_name, e);
            Error::PopulationUnavailable(
                e.upstream_message()
                    .unwrap_or(POPULATION_UNAVAILABLE)
                    .to_string(),
            )
        })?;
        Ok(Population::from(data))
    }

    async fn fetch_facets(&self, common_name: &str) -> Result<CountryFacets> {
        // Fail fast: the first branch to fail decides the error and the
        // others are dropped.
        let (population, currency, (codes, flag), capital) = futures::try_join!(
            self.fetch_population(common_name),
            self.fetch_currency(common_name),
            self.fetch_flag(common_name),
            self.fetch_capital(common_name)
        )?;

        Ok(CountryFacets {
            population,
            currency,
            codes,
            flag,
            capital,
        })
    }
}

#[async_trait]
impl CountryServiceTrait for CountryService {
    async fn get_countries(&self) -> Result<ApiResponse<Vec<Country>>> {
        let countries = self.gateway.available_countries().await.map_err(|e| {
            warn!("Available countries lookup failed: {}", e);
            Error::CountriesUnavailable
        })?;

        if countries.is_empty() {
            return Err(Error::CountriesUnavailable);
        }

        debug!("Fetched {} countries", countries.len());
        Ok(ApiResponse::success(COUNTRIES_FETCHED, countries))
    }

    async fn get_country_info(&self, country_code: &str) -> Result<ApiResponse<CountryInfo>> {
        let country_code = country_code.trim();
        if country_code.is_empty() {
            return Err(Error::MissingInput(NO_COUNTRY_CODE.to_string()));
        }

        let country = match self.gateway.country_info(country_code).await {
            Ok(Some(country)) => country,
            Ok(None) => {
                debug!("No country info for code '{}'", country_code);
                return Err(Error::CountryNotFound);
            }
            Err(e) => {
                warn!("Country info lookup for '{}' failed: {}", country_code, e);
                return Err(Error::CountryNotFound);
            }
        };

        let facets = self.fetch_facets(&country.common_name).await?;
        let country = facets.merge_into(country);

        Ok(ApiResponse::success(COUNTRY_INFO_FETCHED, country))
    }

    async fn get_iso_codes(&self, common_name: &str) -> Result<IsoData> {
        self.gateway.iso_codes(common_name).await.map_err(|e| {
            warn!("ISO code lookup for '{}' failed: {}", common_name, e);
            Error::IsoCodeUnavailable
        })
    }

    /// Returns the upstream envelope as received.
    async fn get_states(&self, country: &str) -> Result<ApiResponse<Value>> {
        let country = country.trim();
        if country.is_empty() {
            return Err(Error::MissingInput(NO_COUNTRY.to_string()));
        }

        let states = self.gateway.states(country).await.map_err(|e| {
            warn!("States lookup for '{}' failed: {}", country, e);
            Error::StatesNotFound
        })?;

        // An explicit empty list is a miss; a missing list is passed through
        if states
            .data
            .get("states")
            .and_then(Value::as_array)
            .is_some_and(|list| list.is_empty())
        {
            return Err(Error::StatesNotFound);
        }

        Ok(states)
    }
}
