use crate::view::{self, CountryView};
use landroute_runtime::DirectorySource;

pub async fn run(
    source: DirectorySource<'_>,
    prefix: Option<&str>,
    limit: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let boot = landroute_runtime::bootstrap(source).await?;
    let rows: Vec<CountryView> = boot
        .catalog
        .by_area_matching(prefix.unwrap_or(""))
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, record)| CountryView::from_record(i + 1, record))
        .collect();

    if rows.is_empty() {
        println!("No countries match.");
    } else {
        println!("{}", view::country_table(rows));
    }
    Ok(())
}
