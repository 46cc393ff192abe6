/// Envelope messages for successful operations
pub const COUNTRIES_FETCHED: &str = "Countries fetched";
pub const COUNTRY_INFO_FETCHED: &str = "Country info fetched";
pub const CITY_INFO_FETCHED: &str = "City info fetched";

/// Missing-input messages
pub const NO_COUNTRY_CODE: &str = "No country code specified";
pub const NO_COUNTRY: &str = "No country specified";
pub const NO_COUNTRY_AND_STATE: &str = "Specify a country and a state";
pub const NO_CITY: &str = "Specify a city name";

/// Used when the population upstream refuses without saying why
pub const POPULATION_UNAVAILABLE: &str = "Could not get population";

/// Generic messages for the HTTP boundary
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const URL_NOT_FOUND: &str = "Url not found, check request method";
pub const REQUEST_TIMED_OUT: &str = "Request timed out";
