//! In-memory upstream gateway for service tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use countryinfo_upstream::{
    ApiResponse, CapitalData, CityData, CityPopulationCount, Country, CountryInfo, CurrencyData,
    FlagData, GatewayError, IsoData, PopulationCount, PopulationData, UpstreamGateway,
};
use serde_json::{json, Value};

/// Canned answer for one gateway operation.
#[derive(Clone, Debug)]
pub(crate) enum Reply<T> {
    Data(T),
    /// Upstream answered `error: true` with this message.
    Rejected(String),
    /// Upstream answered with a non-2xx status.
    Status(u16),
}

impl<T: Clone> Reply<T> {
    fn produce(&self, op: &str) -> Result<T, GatewayError> {
        match self {
            Reply::Data(data) => Ok(data.clone()),
            Reply::Rejected(message) => Err(GatewayError::Rejected {
                endpoint: format!("mock://{}", op),
                message: message.clone(),
            }),
            Reply::Status(status) => Err(GatewayError::Status {
                endpoint: format!("mock://{}", op),
                status: *status,
            }),
        }
    }
}

pub(crate) struct MockGateway {
    pub countries: Reply<Vec<Country>>,
    pub country_info: Reply<Option<CountryInfo>>,
    pub currency: Reply<CurrencyData>,
    pub capital: Reply<CapitalData>,
    pub iso_codes: Reply<IsoData>,
    pub flag: Reply<FlagData>,
    pub population: Reply<PopulationData>,
    pub states: Reply<ApiResponse<Value>>,
    pub cities: Reply<ApiResponse<Value>>,
    pub city_population: Reply<CityData>,
    /// Artificial latency per operation name.
    pub delays: HashMap<&'static str, Duration>,
    calls: Mutex<Vec<(&'static str, String)>>,
}

impl MockGateway {
    /// A gateway that answers every operation successfully with data about France.
    pub fn france() -> Self {
        MockGateway {
            countries: Reply::Data(vec![
                Country {
                    country_code: "FR".to_string(),
                    name: "France".to_string(),
                },
                Country {
                    country_code: "DE".to_string(),
                    name: "Germany".to_string(),
                },
            ]),
            country_info: Reply::Data(Some(CountryInfo {
                common_name: "France".to_string(),
                official_name: "French Republic".to_string(),
                country_code: "FR".to_string(),
                region: "Europe".to_string(),
                borders: Some(vec![CountryInfo {
                    common_name: "Spain".to_string(),
                    official_name: "Kingdom of Spain".to_string(),
                    country_code: "ES".to_string(),
                    region: "Europe".to_string(),
                    ..Default::default()
                }]),
                ..Default::default()
            })),
            currency: Reply::Data(CurrencyData {
                name: "France".to_string(),
                currency: "EUR".to_string(),
                iso2: Some("FR".to_string()),
                iso3: Some("FRA".to_string()),
            }),
            capital: Reply::Data(CapitalData {
                name: "France".to_string(),
                capital: "Paris".to_string(),
                iso2: None,
                iso3: None,
            }),
            iso_codes: Reply::Data(IsoData {
                name: "France".to_string(),
                iso2: "FR".to_string(),
                iso3: "FRA".to_string(),
            }),
            flag: Reply::Data(FlagData {
                name: "France".to_string(),
                flag: "https://flags.test/fr.svg".to_string(),
                iso2: "FR".to_string(),
                iso3: "FRA".to_string(),
            }),
            population: Reply::Data(PopulationData {
                code: "FRA".to_string(),
                country: "France".to_string(),
                population_counts: vec![
                    PopulationCount {
                        year: 2016.into(),
                        value: 66724104.into(),
                    },
                    PopulationCount {
                        year: 2017.into(),
                        value: 66918020.into(),
                    },
                    PopulationCount {
                        year: 2018.into(),
                        value: 67101930.into(),
                    },
                ],
            }),
            states: Reply::Data(ApiResponse {
                error: false,
                msg: "states in France retrieved".to_string(),
                data: json!({
                    "name": "France",
                    "iso3": "FRA",
                    "iso2": "FR",
                    "states": [
                        { "name": "Brittany", "state_code": "BRE" },
                        { "name": "Normandy", "state_code": "NOR" }
                    ]
                }),
            }),
            cities: Reply::Data(ApiResponse {
                error: false,
                msg: "cities in state Brittany of country France retrieved".to_string(),
                data: json!(["Brest", "Rennes"]),
            }),
            city_population: Reply::Data(CityData {
                city: "Rennes".to_string(),
                country: "France".to_string(),
                population_counts: vec![CityPopulationCount {
                    year: "2013".to_string(),
                    value: "211373".to_string(),
                    sex: Some("Both Sexes".to_string()),
                    reliabilty: Some("Final figure, complete".to_string()),
                }],
            }),
            delays: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, op: &'static str, delay: Duration) -> Self {
        self.delays.insert(op, delay);
        self
    }

    /// Arguments of every call made to `op`, in call order.
    pub fn calls_to(&self, op: &str) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| *name == op)
            .map(|(_, arg)| arg.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    async fn respond<T: Clone>(
        &self,
        op: &'static str,
        arg: String,
        reply: &Reply<T>,
    ) -> Result<T, GatewayError> {
        self.calls.lock().unwrap().push((op, arg));
        if let Some(delay) = self.delays.get(op) {
            tokio::time::sleep(*delay).await;
        }
        reply.produce(op)
    }
}

#[async_trait]
impl UpstreamGateway for MockGateway {
    async fn available_countries(&self) -> Result<Vec<Country>, GatewayError> {
        self.respond("available_countries", String::new(), &self.countries)
            .await
    }

    async fn country_info(&self, country_code: &str) -> Result<Option<CountryInfo>, GatewayError> {
        self.respond("country_info", country_code.to_string(), &self.country_info)
            .await
    }

    async fn currency(&self, country: &str) -> Result<CurrencyData, GatewayError> {
        self.respond("currency", country.to_string(), &self.currency)
            .await
    }

    async fn capital(&self, country: &str) -> Result<CapitalData, GatewayError> {
        self.respond("capital", country.to_string(), &self.capital)
            .await
    }

    async fn iso_codes(&self, country: &str) -> Result<IsoData, GatewayError> {
        self.respond("iso_codes", country.to_string(), &self.iso_codes)
            .await
    }

    async fn flag(&self, iso2: &str) -> Result<FlagData, GatewayError> {
        self.respond("flag", iso2.to_string(), &self.flag).await
    }

    async fn population(&self, country: &str) -> Result<PopulationData, GatewayError> {
        self.respond("population", country.to_string(), &self.population)
            .await
    }

    async fn states(&self, country: &str) -> Result<ApiResponse<Value>, GatewayError> {
        self.respond("states", country.to_string(), &self.states)
            .await
    }

    async fn cities(&self, country: &str, state: &str) -> Result<ApiResponse<Value>, GatewayError> {
        self.respond("cities", format!("{}/{}", country, state), &self.cities)
            .await
    }

    async fn city_population(&self, city: &str) -> Result<CityData, GatewayError> {
        self.respond("city_population", city.to_string(), &self.city_population)
            .await
    }
}
