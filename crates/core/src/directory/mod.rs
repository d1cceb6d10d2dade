pub mod memory;
pub mod rest;

pub use memory::StaticDirectory;
pub use rest::{Country, RestCountriesClient};
