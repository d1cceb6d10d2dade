use landroute_api::NodeDirectory;
use landroute_core::{CountryCatalog, DirectoryConfig, RestCountriesClient, StaticDirectory};
use std::path::Path;
use std::sync::Arc;

/// Where a front end gets its countries from.
pub enum DirectorySource<'a> {
    /// The REST Countries API described by the config.
    Remote(DirectoryConfig),
    /// A JSON adjacency file; ids double as display names.
    File(&'a Path),
}

/// A directory plus the catalog used to resolve names against it.
pub struct Bootstrap {
    pub catalog: CountryCatalog,
    pub directory: Arc<dyn NodeDirectory>,
}

/// Bootstraps the directory and catalog for the given source.
///
/// The remote source performs the bulk country load up front, so a failure
/// here means no search can be attempted.
pub async fn bootstrap(source: DirectorySource<'_>) -> landroute_core::Result<Bootstrap> {
    match source {
        DirectorySource::Remote(config) => {
            let client = RestCountriesClient::new(config)?;
            let catalog = client.fetch_catalog().await?;
            Ok(Bootstrap {
                catalog,
                directory: Arc::new(client),
            })
        }
        DirectorySource::File(path) => {
            let directory = StaticDirectory::load(path)?;
            tracing::info!(nodes = directory.len(), path = %path.display(), "loaded static graph");
            let dangling = directory.dangling();
            if !dangling.is_empty() {
                tracing::warn!(
                    path = %path.display(),
                    count = dangling.len(),
                    first = %dangling[0],
                    "graph references nodes without an entry"
                );
            }
            Ok(Bootstrap {
                catalog: directory.catalog(),
                directory: Arc::new(directory),
            })
        }
    }
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(landroute_core::logging::init_logging(component, to_stderr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use landroute_api::NodeId;
    use std::io::Write;

    #[tokio::test]
    async fn file_source_names_nodes_by_id() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"A": ["B"], "B": ["A", "C"], "C": ["B"]}}"#).unwrap();

        let boot = bootstrap(DirectorySource::File(file.path())).await.unwrap();

        assert_eq!(boot.catalog.len(), 3);
        assert_eq!(boot.catalog.resolve("c"), Some(NodeId::from("C")));
        let node = boot.directory.lookup(&NodeId::from("B")).await.unwrap();
        assert_eq!(node.neighbors.len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = bootstrap(DirectorySource::File(&missing)).await.err().unwrap();
        assert!(matches!(err, landroute_core::LandrouteError::Io(_)));
    }

    #[tokio::test]
    async fn invalid_remote_config_fails_before_any_request() {
        let config = DirectoryConfig::default().with_timeout_secs(0);
        let err = bootstrap(DirectorySource::Remote(config)).await.err().unwrap();
        assert!(matches!(err, landroute_core::LandrouteError::Config(_)));
    }
}
