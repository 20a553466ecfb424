pub mod dates;
pub mod models;
pub mod names;
pub mod people;
pub mod specimen_records;
pub mod temperature;
