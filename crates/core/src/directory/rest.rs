//! REST Countries v3.1 client.
//!
//! Serves as the [`NodeDirectory`] for land-border searches (one `alpha/{code}`
//! request per lookup) and performs the bulk `all` load behind
//! [`CountryCatalog`].

use crate::catalog::{CountryCatalog, CountryRecord};
use crate::config::DirectoryConfig;
use crate::error::{LandrouteError, Result};
use async_trait::async_trait;
use landroute_api::{LookupError, LookupErrorKind, LookupResult, Node, NodeDirectory, NodeId};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, redirect};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, warn};

/// A country with its land borders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub code: NodeId,
    pub name: String,
    pub borders: Vec<NodeId>,
}

impl From<Country> for Node {
    fn from(country: Country) -> Self {
        Node::new(country.code, country.borders)
    }
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
}

/// Wire shape shared by the `alpha` and `all` endpoints; absent fields were not requested.
#[derive(Debug, Deserialize)]
struct CountryDto {
    cca3: String,
    name: CountryName,
    #[serde(default)]
    borders: Vec<String>,
    #[serde(default)]
    area: f64,
}

pub struct RestCountriesClient {
    config: DirectoryConfig,
    http: Client,
}

impl RestCountriesClient {
    pub fn new(config: DirectoryConfig) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout())
            .redirect(redirect::Policy::limited(10))
            .build()?;

        Ok(Self { config, http })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(DirectoryConfig::from_env())
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Fetch one country and its borders.
    pub async fn country(&self, code: &NodeId) -> LookupResult<Country> {
        let url = self
            .config
            .country_url(code.as_str())
            .map_err(|e| LookupError::new(code.clone(), LookupErrorKind::Transport, e.to_string()))?;

        let started = Instant::now();
        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| transport_error(code, e))?;

        let status = response.status();
        if !status.is_success() {
            let kind = if status == StatusCode::NOT_FOUND {
                LookupErrorKind::NotFound
            } else {
                LookupErrorKind::Status
            };
            warn!(%code, %status, "country lookup rejected");
            return Err(
                LookupError::new(code.clone(), kind, format!("HTTP {}", status))
                    .with_status(status.as_u16()),
            );
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(code, e))?;
        let dto: CountryDto = serde_json::from_slice(&body).map_err(|e| {
            LookupError::new(code.clone(), LookupErrorKind::Decode, e.to_string())
                .with_status(status.as_u16())
        })?;

        debug!(
            %code,
            borders = dto.borders.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "country fetched"
        );

        Ok(Country {
            code: NodeId::from(dto.cca3),
            name: dto.name.common,
            borders: dto.borders.into_iter().map(NodeId::from).collect(),
        })
    }

    /// Bulk load of every country's name, code and area.
    pub async fn fetch_catalog(&self) -> Result<CountryCatalog> {
        let url = self.config.catalog_url()?;
        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| LandrouteError::Catalog(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LandrouteError::Catalog(format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LandrouteError::Catalog(e.to_string()))?;
        let countries: Vec<CountryDto> =
            serde_json::from_slice(&body).map_err(|e| LandrouteError::Catalog(e.to_string()))?;

        info!(countries = countries.len(), "country catalog loaded");

        Ok(CountryCatalog::from_records(countries.into_iter().map(
            |dto| CountryRecord {
                code: NodeId::from(dto.cca3),
                name: dto.name.common,
                area: dto.area,
            },
        )))
    }
}

fn transport_error(code: &NodeId, err: reqwest::Error) -> LookupError {
    let error = LookupError::new(code.clone(), LookupErrorKind::Transport, err.to_string());
    match err.status() {
        Some(status) => error.with_status(status.as_u16()),
        None => error,
    }
}

#[async_trait]
impl NodeDirectory for RestCountriesClient {
    async fn lookup(&self, id: &NodeId) -> LookupResult<Node> {
        self.country(id).await.map(Node::from)
    }
}
