pub mod collectors;
pub mod enums;
pub mod models;
pub mod search;
pub mod views;
