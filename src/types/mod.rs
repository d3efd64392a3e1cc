pub mod any_datetime;
pub mod observed_property;
pub mod period_name;
pub mod search_parameters;
pub mod station;
