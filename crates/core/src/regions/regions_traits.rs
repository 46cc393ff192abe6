use async_trait::async_trait;
use countryinfo_upstream::{ApiResponse, CityData};
use serde_json::Value;

use crate::errors::Result;

/// Trait for region service operations
#[async_trait]
pub trait RegionServiceTrait: Send + Sync {
    async fn get_cities(&self, country: &str, state: &str) -> Result<ApiResponse<Value>>;
    async fn get_city_info(&self, city: &str) -> Result<ApiResponse<CityData>>;
}
