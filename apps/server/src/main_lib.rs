use std::sync::Arc;

use crate::config::Config;
use countryinfo_core::{
    countries::{CountryService, CountryServiceTrait},
    regions::{RegionService, RegionServiceTrait},
};
use countryinfo_upstream::{HttpGateway, UpstreamGateway};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub country_service: Arc<dyn CountryServiceTrait>,
    pub region_service: Arc<dyn RegionServiceTrait>,
}

pub fn init_tracing() {
    let log_format =
        std::env::var("COUNTRYINFO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wires both services onto a single shared gateway.
pub fn state_with_gateway(gateway: Arc<dyn UpstreamGateway>) -> Arc<AppState> {
    Arc::new(AppState {
        country_service: Arc::new(CountryService::new(gateway.clone())),
        region_service: Arc::new(RegionService::new(gateway)),
    })
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let gateway = HttpGateway::new(config.upstream.clone());
    tracing::info!(
        "Upstream sources: {} and {}",
        gateway.endpoints().metadata_base(),
        gateway.endpoints().facts_base()
    );
    Ok(state_with_gateway(Arc::new(gateway)))
}
