use landroute_api::{LookupError, PathError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LandrouteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Country list unavailable: {0}")]
    Catalog(String),
    #[error("Please, select both countries")]
    MissingEndpoint,
    #[error("Unknown country: {0}")]
    UnknownCountry(String),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

pub type Result<T> = std::result::Result<T, LandrouteError>;
