//! Country Info Upstream Crate
//!
//! This crate wraps the free third-party REST services the country-information
//! backend aggregates from.
//!
//! # Overview
//!
//! Two upstream services are consumed:
//! - A country-metadata service (available countries, country info by code)
//! - A country-facts service (currency, capital, ISO codes, flag images,
//!   population, states, cities, city population)
//!
//! Every gateway operation performs exactly one HTTP call and either returns
//! the decoded payload or a [`GatewayError`].
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Service Layer   | --> |  UpstreamGateway |  (trait, mockable)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   HttpGateway    |  (reqwest)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Endpoints     |  (fixed base URLs)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`ApiResponse`] - The `{error, msg, data}` envelope shared with the facts service
//! - [`Country`] / [`CountryInfo`] - Country-metadata records
//! - [`CurrencyData`], [`CapitalData`], [`IsoData`], [`FlagData`], [`PopulationData`] - Facets

pub mod endpoints;
pub mod errors;
pub mod gateway;
pub mod models;

pub use endpoints::Endpoints;
pub use errors::GatewayError;
pub use gateway::{HttpGateway, UpstreamGateway};
pub use models::{
    ApiResponse, CapitalData, CityData, CityPopulationCount, Country, CountryInfo, CurrencyData,
    FlagData, IsoData, Population, PopulationCount, PopulationData,
};
