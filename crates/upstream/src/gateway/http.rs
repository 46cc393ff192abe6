//! reqwest-backed implementation of [`UpstreamGateway`].
//!
//! The metadata service answers with bare JSON; the facts service wraps
//! everything in an `{error, msg, data}` envelope and takes POST bodies.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::traits::UpstreamGateway;
use crate::endpoints::Endpoints;
use crate::errors::GatewayError;
use crate::models::{
    ApiResponse, CapitalData, CityData, Country, CountryInfo, CurrencyData, FlagData, IsoData,
    PopulationData, RawEnvelope,
};

/// Gateway talking to the public upstream services over HTTPS.
///
/// Holds no per-request state; share it behind an `Arc`.
pub struct HttpGateway {
    client: Client,
    endpoints: Endpoints,
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new(Endpoints::default())
    }
}

impl HttpGateway {
    /// Transport defaults only: no timeout, no retries.
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            client: Client::new(),
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// GET a metadata-service URL and return the raw body of a 2xx answer.
    async fn get_text(&self, url: &str) -> Result<String, GatewayError> {
        debug!("Upstream GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GatewayError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream GET {} returned {}", url, status);
            return Err(GatewayError::Status {
                endpoint: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| GatewayError::transport(url, e))
    }

    /// POST a JSON body to a facts-service URL and open the envelope.
    async fn post_envelope<B, T>(&self, url: &str, body: &B) -> Result<ApiResponse<T>, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("Upstream POST {}", url);

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::transport(url, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::transport(url, e))?;

        if !status.is_success() {
            warn!("Upstream POST {} returned {}", url, status);
            // The facts service explains its 4xx answers inside the envelope.
            return match serde_json::from_str::<RawEnvelope>(&text) {
                Ok(raw) if raw.error && !raw.msg.trim().is_empty() => {
                    Err(GatewayError::Rejected {
                        endpoint: url.to_string(),
                        message: raw.msg,
                    })
                }
                _ => Err(GatewayError::Status {
                    endpoint: url.to_string(),
                    status: status.as_u16(),
                }),
            };
        }

        let raw: RawEnvelope =
            serde_json::from_str(&text).map_err(|e| GatewayError::decode(url, e))?;
        open_envelope(url, raw)
    }

    async fn post_data<B, T>(&self, url: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post_envelope(url, body).await.map(|envelope| envelope.data)
    }
}

/// Turn a received envelope into a typed one, or into a rejection when the
/// upstream flagged `error: true`.
pub(crate) fn open_envelope<T: DeserializeOwned>(
    endpoint: &str,
    raw: RawEnvelope,
) -> Result<ApiResponse<T>, GatewayError> {
    if raw.error {
        return Err(GatewayError::Rejected {
            endpoint: endpoint.to_string(),
            message: raw.msg,
        });
    }

    let data = serde_json::from_value(raw.data).map_err(|e| GatewayError::decode(endpoint, e))?;
    Ok(ApiResponse {
        error: false,
        msg: raw.msg,
        data,
    })
}

/// Parse a metadata-service body where "nothing" is a legitimate answer.
pub(crate) fn parse_optional<T: DeserializeOwned>(
    endpoint: &str,
    body: &str,
) -> Result<Option<T>, GatewayError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(body).map_err(|e| GatewayError::decode(endpoint, e))
}

#[async_trait]
impl UpstreamGateway for HttpGateway {
    async fn available_countries(&self) -> Result<Vec<Country>, GatewayError> {
        let url = self.endpoints.available_countries();
        let body = self.get_text(&url).await?;
        serde_json::from_str(&body).map_err(|e| GatewayError::decode(&url, e))
    }

    async fn country_info(&self, country_code: &str) -> Result<Option<CountryInfo>, GatewayError> {
        let url = self.endpoints.country_info(country_code);
        let body = self.get_text(&url).await?;
        parse_optional(&url, &body)
    }

    async fn currency(&self, country: &str) -> Result<CurrencyData, GatewayError> {
        self.post_data(&self.endpoints.currency(), &json!({ "country": country }))
            .await
    }

    async fn capital(&self, country: &str) -> Result<CapitalData, GatewayError> {
        self.post_data(&self.endpoints.capital(), &json!({ "country": country }))
            .await
    }

    async fn iso_codes(&self, country: &str) -> Result<IsoData, GatewayError> {
        self.post_data(&self.endpoints.iso_codes(), &json!({ "country": country }))
            .await
    }

    async fn flag(&self, iso2: &str) -> Result<FlagData, GatewayError> {
        self.post_data(&self.endpoints.flag_images(), &json!({ "iso2": iso2 }))
            .await
    }

    async fn population(&self, country: &str) -> Result<PopulationData, GatewayError> {
        self.post_data(&self.endpoints.population(), &json!({ "country": country }))
            .await
    }

    async fn states(&self, country: &str) -> Result<ApiResponse<Value>, GatewayError> {
        self.post_envelope(&self.endpoints.states(), &json!({ "country": country }))
            .await
    }

    async fn cities(&self, country: &str, state: &str) -> Result<ApiResponse<Value>, GatewayError> {
        self.post_envelope(
            &self.endpoints.state_cities(),
            &json!({ "country": country, "state": state }),
        )
        .await
    }

    async fn city_population(&self, city: &str) -> Result<CityData, GatewayError> {
        self.post_data(&self.endpoints.city_population(), &json!({ "city": city }))
            .await
    }
}
