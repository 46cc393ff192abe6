//! Countries module - country list, full country info aggregation, states.

mod countries_model;
mod countries_service;
mod countries_traits;


pub use countries_model::CountryFacets;
pub use countries_service::CountryService;
pub use countries_traits::CountryServiceTrait;
