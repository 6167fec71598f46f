pub mod config;
pub mod file;
pub mod formatter;
pub mod name_mapping;
