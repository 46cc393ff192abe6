//! Upstream data models
//!
//! This module contains the wire shapes of the upstream services:
//! - `envelope` - The `{error, msg, data}` envelope (ApiResponse)
//! - `country` - Country-metadata records (Country, CountryInfo)
//! - `facts` - Per-country facets (currency, capital, ISO codes, flag, population)
//! - `region` - City population records

mod country;
mod envelope;
mod facts;
mod region;

pub use country::{Country, CountryInfo};
pub use envelope::ApiResponse;
pub(crate) use envelope::RawEnvelope;
pub use facts::{
    CapitalData, CurrencyData, FlagData, IsoData, Population, PopulationCount, PopulationData,
};
pub use region::{CityData, CityPopulationCount};
