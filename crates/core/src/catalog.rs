use landroute_api::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of the bulk country list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryRecord {
    pub code: NodeId,
    pub name: String,
    /// Square kilometres.
    pub area: f64,
}

/// Every known country keyed by code; maps display names to codes and back.
#[derive(Debug, Clone, Default)]
pub struct CountryCatalog {
    by_code: HashMap<NodeId, CountryRecord>,
}

impl CountryCatalog {
    pub fn from_records(records: impl IntoIterator<Item = CountryRecord>) -> Self {
        Self {
            by_code: records
                .into_iter()
                .map(|record| (record.code.clone(), record))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Resolve what a user typed to a code.
    ///
    /// Tried in order: exact common name, case-insensitive common name,
    /// case-insensitive code.
    pub fn resolve(&self, query: &str) -> Option<NodeId> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(record) = self.by_code.values().find(|r| r.name == query) {
            return Some(record.code.clone());
        }

        let lowered = query.to_lowercase();
        let mut by_name: Vec<&CountryRecord> = self
            .by_code
            .values()
            .filter(|r| r.name.to_lowercase() == lowered)
            .collect();
        // Map iteration order is arbitrary; keep the pick stable.
        by_name.sort_by(|a, b| a.code.cmp(&b.code));
        if let Some(record) = by_name.first() {
            return Some(record.code.clone());
        }

        self.by_code
            .keys()
            .find(|code| code.as_str().eq_ignore_ascii_case(query))
            .cloned()
    }

    /// Common name for `code`, or the code itself if unknown.
    pub fn display_name<'a>(&'a self, code: &'a NodeId) -> &'a str {
        self.by_code
            .get(code)
            .map(|r| r.name.as_str())
            .unwrap_or(code.as_str())
    }

    /// Largest country first; ties broken by name.
    pub fn by_area(&self) -> Vec<&CountryRecord> {
        let mut records: Vec<&CountryRecord> = self.by_code.values().collect();
        records.sort_by(|a, b| b.area.total_cmp(&a.area).then_with(|| a.name.cmp(&b.name)));
        records
    }

    /// Records whose name starts with `prefix` (case-insensitive), in [`Self::by_area`] order.
    pub fn by_area_matching(&self, prefix: &str) -> Vec<&CountryRecord> {
        let prefix = prefix.to_lowercase();
        self.by_area()
            .into_iter()
            .filter(|r| r.name.to_lowercase().starts_with(&prefix))
            .collect()
    }

    /// Autocomplete candidates for a partially typed name.
    pub fn suggestions(&self, prefix: &str, limit: usize) -> Vec<&str> {
        self.by_area_matching(prefix)
            .into_iter()
            .take(limit)
            .map(|r| r.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, name: &str, area: f64) -> CountryRecord {
        CountryRecord {
            code: NodeId::from(code),
            name: name.to_string(),
            area,
        }
    }

    fn catalog() -> CountryCatalog {
        CountryCatalog::from_records([
            record("FRA", "France", 551695.0),
            record("ESP", "Spain", 505992.0),
            record("AND", "Andorra", 468.0),
            record("RUS", "Russia", 17098242.0),
            record("SWE", "Sweden", 450295.0),
        ])
    }

    #[test]
    fn resolves_names_then_codes() {
        let catalog = catalog();
        assert_eq!(catalog.resolve("France"), Some(NodeId::from("FRA")));
        assert_eq!(catalog.resolve("  spain "), Some(NodeId::from("ESP")));
        assert_eq!(catalog.resolve("and"), Some(NodeId::from("AND")));
        assert_eq!(catalog.resolve("Atlantis"), None);
        assert_eq!(catalog.resolve(""), None);
    }

    #[test]
    fn display_name_falls_back_to_code() {
        let catalog = catalog();
        let fra = NodeId::from("FRA");
        let xkx = NodeId::from("XKX");
        assert_eq!(catalog.display_name(&fra), "France");
        assert_eq!(catalog.display_name(&xkx), "XKX");
    }

    #[test]
    fn largest_first() {
        let catalog = catalog();
        let names: Vec<&str> = catalog.by_area().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Russia", "France", "Spain", "Sweden", "Andorra"]);
    }

    #[test]
    fn suggestions_follow_area_order() {
        let catalog = catalog();
        assert_eq!(catalog.suggestions("s", 10), ["Spain", "Sweden"]);
        assert_eq!(catalog.suggestions("S", 1), ["Spain"]);
        assert!(catalog.suggestions("q", 10).is_empty());
    }
}
