mod errors;
pub mod generator;
pub mod utils;

pub use errors::GeneratorError;
