pub mod models;
pub mod trip_states;
pub mod views;
