pub mod models;
pub mod views;
