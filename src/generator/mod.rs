pub mod definition;
pub mod generator;
pub mod tables;
pub mod templates;
