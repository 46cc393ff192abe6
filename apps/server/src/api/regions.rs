use std::sync::Arc;

use crate::{api::url_not_found, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use countryinfo_core::{ApiResponse, CityData};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
struct CitiesRequest {
    country: Option<String>,
    state: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CityInfoRequest {
    city: Option<String>,
}

async fn get_cities(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CitiesRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let response = state
        .region_service
        .get_cities(
            request.country.as_deref().unwrap_or_default(),
            request.state.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(Json(response))
}

async fn get_city_info(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CityInfoRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<CityData>>> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let city = request.city.unwrap_or_default();
    let response = state.region_service.get_city_info(&city).await?;
    Ok(Json(response))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cities", post(get_cities).fallback(url_not_found))
        .route("/city-info", post(get_city_info).fallback(url_not_found))
}
