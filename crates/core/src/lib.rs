pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod route;
pub mod search;

pub use catalog::{CountryCatalog, CountryRecord};
pub use config::DirectoryConfig;
pub use directory::{Country, RestCountriesClient, StaticDirectory};
pub use error::{LandrouteError, Result};
pub use route::{RouteReport, RouteService};
pub use search::{IncrementalBfs, find_path};
