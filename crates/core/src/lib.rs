//! Country Info Core - aggregation services and the error model.
//!
//! This crate turns upstream gateway calls into the backend's operations.
//! It knows nothing about HTTP routing; it only needs an
//! [`UpstreamGateway`](countryinfo_upstream::UpstreamGateway).

pub mod constants;
pub mod countries;
pub mod errors;
pub mod regions;

#[cfg(test)]
pub(crate) mod testing;

// Re-export the upstream shapes the services hand back
pub use countryinfo_upstream::{
    ApiResponse, CapitalData, CityData, Country, CountryInfo, CurrencyData, FlagData, IsoData,
    Population, PopulationCount, PopulationData,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
