mod borders;
mod countries;
mod route;
mod view;

use clap::{Args, Parser, Subcommand};
use landroute_core::DirectoryConfig;
use landroute_runtime::DirectorySource;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "landroute",
    version,
    about = "Shortest land route between two countries",
    long_about = "Landroute finds the shortest chain of countries connecting two countries by land \
                  borders. Border lists are fetched one country at a time from the REST Countries \
                  API, and the number of requests spent is reported with the route."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// REST Countries base URL (defaults to $LANDROUTE_API_URL, then the public API)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds (defaults to $LANDROUTE_TIMEOUT_SECS, then 30)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Serve borders from a JSON adjacency file instead of the API
    #[arg(long, global = true, value_name = "FILE")]
    pub graph: Option<PathBuf>,

    /// Also write logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    pub fn directory_config(&self) -> DirectoryConfig {
        let mut config = DirectoryConfig::from_env();
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout_secs(secs);
        }
        config
    }

    pub fn source(&self) -> DirectorySource<'_> {
        match &self.graph {
            Some(path) => DirectorySource::File(path),
            None => DirectorySource::Remote(self.directory_config()),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the shortest land route between two countries
    #[command(
        long_about = "Resolves both countries by name (or cca3 code) and searches outward from the \
                      first one, breadth first, until the second one appears among the borders of \
                      an expanded country."
    )]
    Route {
        /// Country to start from
        #[arg(value_name = "FROM")]
        from: String,
        /// Country to reach
        #[arg(value_name = "TO")]
        to: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known countries, largest first
    Countries {
        /// Only names starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
        /// Maximum number of rows
        #[arg(long, default_value_t = 25)]
        limit: usize,
    },
    /// Show the land borders of one country
    Borders {
        #[arg(value_name = "COUNTRY")]
        country: String,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _guard = landroute_runtime::init_logging("cli", cli.global.verbose);

    let rt = tokio::runtime::Runtime::new()?;
    let source = cli.global.source();

    match &cli.command {
        Commands::Route { from, to, json } => rt.block_on(route::run(source, from, to, *json)),
        Commands::Countries { prefix, limit } => {
            rt.block_on(countries::run(source, prefix.as_deref(), *limit))
        }
        Commands::Borders { country } => rt.block_on(borders::run(source, country)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn route_arguments() {
        let cli = Cli::try_parse_from([
            "landroute",
            "route",
            "Portugal",
            "France",
            "--json",
            "--timeout",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.global.timeout, Some(5));
        match cli.command {
            Commands::Route { from, to, json } => {
                assert_eq!(from, "Portugal");
                assert_eq!(to, "France");
                assert!(json);
            }
            _ => panic!("expected route"),
        }
        assert_eq!(cli.global.directory_config().timeout_secs, 5);
    }

    #[test]
    fn route_needs_both_countries() {
        assert!(Cli::try_parse_from(["landroute", "route", "Portugal"]).is_err());
    }

    #[test]
    fn graph_file_selects_static_source() {
        let cli = Cli::try_parse_from(["landroute", "--graph", "borders.json", "borders", "FRA"])
            .unwrap();
        assert!(matches!(cli.global.source(), DirectorySource::File(p) if p.ends_with("borders.json")));
    }
}
