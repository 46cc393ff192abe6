use std::sync::Arc;

use crate::{api::url_not_found, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use countryinfo_core::{ApiResponse, Country, CountryInfo};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
struct StatesRequest {
    country: Option<String>,
}

async fn get_countries(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<Country>>>> {
    let response = state.country_service.get_countries().await?;
    Ok(Json(response))
}

async fn get_country_info(
    Path(country_code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<CountryInfo>>> {
    let response = state.country_service.get_country_info(&country_code).await?;
    Ok(Json(response))
}

/// `/country-info` with the code segment left off.
async fn get_country_info_without_code(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<CountryInfo>>> {
    let response = state.country_service.get_country_info("").await?;
    Ok(Json(response))
}

/// A body that is missing or not JSON counts as an empty request.
async fn get_states(
    State(state): State<Arc<AppState>>,
    body: Result<Json<StatesRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let country = request.country.unwrap_or_default();
    let response = state.country_service.get_states(&country).await?;
    Ok(Json(response))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/countries", get(get_countries).fallback(url_not_found))
        .route(
            "/country-info",
            get(get_country_info_without_code).fallback(url_not_found),
        )
        .route(
            "/country-info/",
            get(get_country_info_without_code).fallback(url_not_found),
        )
        .route(
            "/country-info/{country_code}",
            get(get_country_info).fallback(url_not_found),
        )
        .route("/states", post(get_states).fallback(url_not_found))
}
