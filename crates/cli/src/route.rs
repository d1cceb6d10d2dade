use crate::view;
use landroute_core::RouteService;
use landroute_runtime::DirectorySource;
use tracing::info;

pub async fn run(
    source: DirectorySource<'_>,
    from: &str,
    to: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let boot = landroute_runtime::bootstrap(source).await?;
    let service = RouteService::new(boot.catalog, boot.directory);

    let report = service.route(from, to).await?;
    info!(
        distance = report.result.distance,
        lookups = report.result.lookups,
        "route complete"
    );

    if json {
        println!("{}", view::report_json(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
