use std::sync::Arc;

use async_trait::async_trait;
use countryinfo_upstream::{ApiResponse, CityData, UpstreamGateway};
use log::warn;
use serde_json::Value;

use super::regions_traits::RegionServiceTrait;
use crate::constants::{CITY_INFO_FETCHED, NO_CITY, NO_COUNTRY_AND_STATE};
use crate::errors::{Error, Result};

pub struct RegionService {
    gateway: Arc<dyn UpstreamGateway>,
}

impl RegionService {
    pub fn new(gateway: Arc<dyn UpstreamGateway>) -> Self {
        RegionService { gateway }
    }
}

#[async_trait]
impl RegionServiceTrait for RegionService {
    /// Returns the upstream envelope as received.
    async fn get_cities(&self, country: &str, state: &str) -> Result<ApiResponse<Value>> {
        let (country, state) = (country.trim(), state.trim());
        if country.is_empty() || state.is_empty() {
            return Err(Error::MissingInput(NO_COUNTRY_AND_STATE.to_string()));
        }

        self.gateway.cities(country, state).await.map_err(|e| {
            warn!("Cities lookup for '{}/{}' failed: {}", country, state, e);
            Error::CitiesNotFound
        })
    }

    async fn get_city_info(&self, city: &str) -> Result<ApiResponse<CityData>> {
        let city = city.trim();
        if city.is_empty() {
            return Err(Error::MissingInput(NO_CITY.to_string()));
        }

        let data = self.gateway.city_population(city).await.map_err(|e| {
            warn!("City population lookup for '{}' failed: {}", city, e);
            Error::CityNotFound
        })?;

        Ok(ApiResponse::success(CITY_INFO_FETCHED, data))
    }
}
