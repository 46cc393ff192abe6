//! Regions module - cities of a state and city population.

mod regions_service;
mod regions_traits;


pub use regions_service::RegionService;
pub use regions_traits::RegionServiceTrait;
