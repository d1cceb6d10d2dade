use crate::view;
use landroute_api::NodeDirectory;
use landroute_core::LandrouteError;
use landroute_runtime::DirectorySource;

pub async fn run(
    source: DirectorySource<'_>,
    country: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let boot = landroute_runtime::bootstrap(source).await?;
    let code = boot
        .catalog
        .resolve(country)
        .ok_or_else(|| LandrouteError::UnknownCountry(country.trim().to_string()))?;

    let node = boot.directory.lookup(&code).await?;

    println!("{} ({})", boot.catalog.display_name(&code), code);
    if node.is_isolated() {
        println!("  no land borders");
    }
    for line in view::border_lines(&boot.catalog, &node.neighbors) {
        println!("  {}", line);
    }
    Ok(())
}
