use async_trait::async_trait;
use countryinfo_upstream::{ApiResponse, Country, CountryInfo, IsoData};
use serde_json::Value;

use crate::errors::Result;

/// Trait for country service operations
#[async_trait]
pub trait CountryServiceTrait: Send + Sync {
    async fn get_countries(&self) -> Result<ApiResponse<Vec<Country>>>;
    async fn get_country_info(&self, country_code: &str) -> Result<ApiResponse<CountryInfo>>;
    async fn get_iso_codes(&self, common_name: &str) -> Result<IsoData>;
    /// Upstream states envelope, unmodified.
    async fn get_states(&self, country: &str) -> Result<ApiResponse<Value>>;
}
