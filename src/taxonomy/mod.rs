pub mod families;
pub mod genera;
pub mod models;
pub mod names;
pub mod orders;
pub mod services;
pub mod species;
pub mod subfamilies;
pub mod subspecies;
#[cfg(test)]
mod tests;
pub mod tribes;
