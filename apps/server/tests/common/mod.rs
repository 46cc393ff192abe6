#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use countryinfo_server::{api::app_router, config::Config, state_with_gateway};
use countryinfo_upstream::{
    ApiResponse, CapitalData, CityData, CityPopulationCount, Country, CountryInfo, CurrencyData,
    Endpoints, FlagData, GatewayError, IsoData, PopulationCount, PopulationData, UpstreamGateway,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Gateway that serves fixed data about France; individual operations can be
/// switched to fail.
#[derive(Default)]
pub struct StubGateway {
    pub no_countries: bool,
    pub failing: Vec<&'static str>,
    /// Latency of the available-countries call.
    pub countries_delay: Duration,
}

impl StubGateway {
    pub fn failing(ops: &[&'static str]) -> Self {
        StubGateway {
            failing: ops.to_vec(),
            ..Default::default()
        }
    }

    fn check(&self, op: &'static str) -> Result<(), GatewayError> {
        if self.failing.contains(&op) {
            return Err(GatewayError::Rejected {
                endpoint: format!("stub://{}", op),
                message: format!("{} rejected", op),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UpstreamGateway for StubGateway {
    async fn available_countries(&self) -> Result<Vec<Country>, GatewayError> {
        self.check("available_countries")?;
        if !self.countries_delay.is_zero() {
            tokio::time::sleep(self.countries_delay).await;
        }
        if self.no_countries {
            return Ok(Vec::new());
        }
        Ok(vec![Country {
            country_code: "FR".to_string(),
            name: "France".to_string(),
        }])
    }

    async fn country_info(&self, country_code: &str) -> Result<Option<CountryInfo>, GatewayError> {
        self.check("country_info")?;
        if country_code != "FR" {
            return Ok(None);
        }
        Ok(Some(CountryInfo {
            common_name: "France".to_string(),
            official_name: "French Republic".to_string(),
            country_code: "FR".to_string(),
            region: "Europe".to_string(),
            borders: Some(Vec::new()),
            ..Default::default()
        }))
    }

    async fn currency(&self, country: &str) -> Result<CurrencyData, GatewayError> {
        self.check("currency")?;
        Ok(CurrencyData {
            name: country.to_string(),
            currency: "EUR".to_string(),
            iso2: Some("FR".to_string()),
            iso3: Some("FRA".to_string()),
        })
    }

    async fn capital(&self, country: &str) -> Result<CapitalData, GatewayError> {
        self.check("capital")?;
        Ok(CapitalData {
            name: country.to_string(),
            capital: "Paris".to_string(),
            iso2: Some("FR".to_string()),
            iso3: Some("FRA".to_string()),
        })
    }

    async fn iso_codes(&self, country: &str) -> Result<IsoData, GatewayError> {
        self.check("iso_codes")?;
        Ok(IsoData {
            name: country.to_string(),
            iso2: "FR".to_string(),
            iso3: "FRA".to_string(),
        })
    }

    async fn flag(&self, iso2: &str) -> Result<FlagData, GatewayError> {
        self.check("flag")?;
        Ok(FlagData {
            name: "France".to_string(),
            flag: format!("https://flags.test/{}.svg", iso2.to_lowercase()),
            iso2: iso2.to_string(),
            iso3: "FRA".to_string(),
        })
    }

    async fn population(&self, country: &str) -> Result<PopulationData, GatewayError> {
        self.check("population")?;
        Ok(PopulationData {
            code: "FRA".to_string(),
            country: country.to_string(),
            population_counts: vec![PopulationCount {
                year: 2018.into(),
                value: 67101930.into(),
            }],
        })
    }

    async fn states(&self, country: &str) -> Result<ApiResponse<Value>, GatewayError> {
        self.check("states")?;
        Ok(ApiResponse {
            error: false,
            msg: format!("states in {} retrieved", country),
            data: json!({
                "name": country,
                "iso3": "FRA",
                "iso2": "FR",
                "states": [{ "name": "Brittany", "state_code": "BRE" }]
            }),
        })
    }

    async fn cities(&self, country: &str, state: &str) -> Result<ApiResponse<Value>, GatewayError> {
        self.check("cities")?;
        Ok(ApiResponse {
            error: false,
            msg: format!("cities in state {} of country {} retrieved", state, country),
            data: json!(["Brest", "Rennes"]),
        })
    }

    async fn city_population(&self, city: &str) -> Result<CityData, GatewayError> {
        self.check("city_population")?;
        Ok(CityData {
            city: city.to_string(),
            country: "France".to_string(),
            population_counts: vec![CityPopulationCount {
                year: "2013".to_string(),
                value: "211373".to_string(),
                sex: None,
                reliabilty: None,
            }],
        })
    }
}

pub fn test_config(static_dir: &str) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        static_dir: static_dir.to_string(),
        upstream: Endpoints::default(),
    }
}

pub fn build_test_router(gateway: StubGateway) -> Router {
    let config = test_config("frontend/dist");
    app_router(state_with_gateway(Arc::new(gateway)), &config)
}

pub fn build_router_with_timeout(gateway: StubGateway, timeout: Duration) -> Router {
    let mut config = test_config("frontend/dist");
    config.request_timeout = timeout;
    app_router(state_with_gateway(Arc::new(gateway)), &config)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
