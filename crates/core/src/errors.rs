//! Core error types for the country information services.
//!
//! Every failure a service raises is one [`Error`] variant. Each variant
//! carries its client-facing message (via `Display`) and the HTTP status it
//! maps to (via [`Error::status_code`]), so the HTTP layer never has to guess.
//! Every variant is safe to show to a client.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type of the service layer.
///
/// Not-found variants are one per facet so each keeps its fixed message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The caller omitted a required field. Raised before any upstream call.
    #[error("{0}")]
    MissingInput(String),

    #[error("Could not fetch countries")]
    CountriesUnavailable,

    #[error("Country not found")]
    CountryNotFound,

    #[error("Could not get capital")]
    CapitalUnavailable,

    #[error("Could not get currency")]
    CurrencyUnavailable,

    #[error("Could not get iso code")]
    IsoCodeUnavailable,

    #[error("Could not get flag")]
    FlagUnavailable,

    /// Carries the message the population upstream gave for its refusal.
    #[error("{0}")]
    PopulationUnavailable(String),

    #[error("Could not find states")]
    StatesNotFound,

    #[error("Cities not found")]
    CitiesNotFound,

    #[error("Could not get city")]
    CityNotFound,
}

impl Error {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingInput(_) => 400,
            Self::CountriesUnavailable
            | Self::CountryNotFound
            | Self::CapitalUnavailable
            | Self::CurrencyUnavailable
            | Self::IsoCodeUnavailable
            | Self::FlagUnavailable
            | Self::PopulationUnavailable(_)
            | Self::StatesNotFound
            | Self::CitiesNotFound
            | Self::CityNotFound => 404,
        }
    }
}
