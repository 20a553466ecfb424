pub mod collecting_trips;
pub mod counties;
pub mod countries;
pub mod gps_coordinates;
pub mod labels;
pub mod localities;
pub mod models;
pub mod services;
pub mod states;
pub mod validation;
