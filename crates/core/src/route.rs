use crate::catalog::CountryCatalog;
use crate::error::{LandrouteError, Result};
use crate::search::IncrementalBfs;
use landroute_api::{NodeDirectory, NodeId, SearchResult};
use serde::Serialize;
use std::fmt;
use tracing::info;

/// A search result together with the display names of its path.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub names: Vec<String>,
    #[serde(flatten)]
    pub result: SearchResult,
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Path to destination: {}", self.names.join(" → "))?;
        writeln!(f, "Countries in path: {}", self.result.distance)?;
        write!(f, "Requests: {}", self.result.lookups)
    }
}

/// Resolves user-typed country names through the catalog, then searches the directory.
pub struct RouteService<D> {
    catalog: CountryCatalog,
    directory: D,
}

impl<D: NodeDirectory> RouteService<D> {
    pub fn new(catalog: CountryCatalog, directory: D) -> Self {
        Self { catalog, directory }
    }

    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn resolve(&self, query: &str) -> Result<NodeId> {
        self.catalog
            .resolve(query)
            .ok_or_else(|| LandrouteError::UnknownCountry(query.trim().to_string()))
    }

    pub async fn route(&self, from: &str, to: &str) -> Result<RouteReport> {
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(LandrouteError::MissingEndpoint);
        }

        let start = self.resolve(from)?;
        let goal = self.resolve(to)?;
        info!(%start, %goal, "Loading path from {} to {}...", from.trim(), to.trim());

        let result = IncrementalBfs::new(&self.directory)
            .find_path(&start, &goal)
            .await?;

        let names = result
            .path
            .iter()
            .map(|code| self.catalog.display_name(code).to_string())
            .collect();

        Ok(RouteReport { names, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CountryRecord;
    use crate::directory::StaticDirectory;
    use landroute_api::PathError;

    fn service() -> RouteService<StaticDirectory> {
        let catalog = CountryCatalog::from_records(
            [("PRT", "Portugal"), ("ESP", "Spain"), ("FRA", "France"), ("ISL", "Iceland")]
                .into_iter()
                .map(|(code, name)| CountryRecord {
                    code: NodeId::from(code),
                    name: name.to_string(),
                    area: 1.0,
                }),
        );
        let directory = StaticDirectory::from_edges([
            ("PRT", &["ESP"][..]),
            ("ESP", &["AND", "FRA", "GIB", "PRT", "MAR"][..]),
            ("FRA", &["AND", "BEL", "DEU", "ITA", "LUX", "MCO", "ESP", "CHE"][..]),
            ("ISL", &[][..]),
        ]);
        RouteService::new(catalog, directory)
    }

    #[tokio::test]
    async fn renders_like_the_form_output() {
        let report = service().route("Portugal", "France").await.unwrap();
        assert_eq!(report.names, ["Portugal", "Spain", "France"]);
        assert_eq!(
            report.to_string(),
            "Path to destination: Portugal → Spain → France\nCountries in path: 3\nRequests: 3"
        );
    }

    #[tokio::test]
    async fn json_flattens_the_search_result() {
        let report = service().route("Spain", "France").await.unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["path"], serde_json::json!(["ESP", "FRA"]));
        assert_eq!(json["names"], serde_json::json!(["Spain", "France"]));
        assert_eq!(json["distance"], 2);
        assert_eq!(json["lookups"], 2);
    }

    #[tokio::test]
    async fn both_countries_are_required() {
        let err = service().route("Spain", "  ").await.unwrap_err();
        assert!(matches!(err, LandrouteError::MissingEndpoint));
        assert_eq!(err.to_string(), "Please, select both countries");
    }

    #[tokio::test]
    async fn unknown_names_are_reported() {
        let err = service().route("Atlantis", "Spain").await.unwrap_err();
        assert!(matches!(err, LandrouteError::UnknownCountry(ref q) if q == "Atlantis"));
    }

    #[tokio::test]
    async fn island_has_no_ground_path() {
        let err = service().route("Iceland", "Spain").await.unwrap_err();
        assert!(matches!(
            err,
            LandrouteError::Path(PathError::DegenerateEndpoint { lookups: 2 })
        ));
        assert_eq!(err.to_string(), "No ground path between two countries");
    }
}
