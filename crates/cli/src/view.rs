use landroute_core::{CountryCatalog, CountryRecord, RouteReport};
use tabled::Tabled;
use tabled::settings::Style;

/// A terminal row for one country of the catalog.
#[derive(Tabled)]
pub struct CountryView {
    pub rank: usize,
    pub code: String,
    pub name: String,
    pub area: String,
}

impl CountryView {
    pub fn from_record(rank: usize, record: &CountryRecord) -> Self {
        Self {
            rank,
            code: record.code.to_string(),
            name: record.name.clone(),
            area: format_area(record.area),
        }
    }
}

/// Whole square kilometres with thousands separators, "-" when unknown.
pub fn format_area(area: f64) -> String {
    if area <= 0.0 || !area.is_finite() {
        return "-".to_string();
    }
    let digits = format!("{:.0}", area);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn country_table(rows: Vec<CountryView>) -> String {
    let mut table = tabled::Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// `Name (CODE)` for every border, in directory order.
pub fn border_lines(catalog: &CountryCatalog, borders: &[landroute_api::NodeId]) -> Vec<String> {
    borders
        .iter()
        .map(|code| format!("{} ({})", catalog.display_name(code), code))
        .collect()
}

pub fn report_json(report: &RouteReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
