use crate::catalog::{CountryCatalog, CountryRecord};
use crate::error::Result;
use async_trait::async_trait;
use landroute_api::{LookupError, LookupResult, Node, NodeDirectory, NodeId};
use std::collections::BTreeMap;
use std::path::Path;

/// A fully materialized graph served as a directory.
///
/// Loaded from a JSON adjacency object such as `{"FRA": ["ESP", "BEL"], "ISL": []}`.
/// Neighbor order is preserved as written.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
}

impl StaticDirectory {
    pub fn new(adjacency: BTreeMap<NodeId, Vec<NodeId>>) -> Self {
        Self { adjacency }
    }

    pub fn from_edges<'a>(edges: impl IntoIterator<Item = (&'a str, &'a [&'a str])>) -> Self {
        Self::new(
            edges
                .into_iter()
                .map(|(id, neighbors)| {
                    (
                        NodeId::from(id),
                        neighbors.iter().map(|n| NodeId::from(*n)).collect(),
                    )
                })
                .collect(),
        )
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    pub fn neighbors(&self, id: &str) -> Option<&[NodeId]> {
        self.adjacency.get(id).map(Vec::as_slice)
    }

    /// Neighbor ids that have no entry of their own, sorted and deduplicated.
    ///
    /// A search reaching one of them fails with a `NotFound` lookup.
    pub fn dangling(&self) -> Vec<&NodeId> {
        let mut missing: Vec<&NodeId> = self
            .adjacency
            .values()
            .flatten()
            .filter(|n| !self.adjacency.contains_key(*n))
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }

    /// A catalog naming every node by its own id, for graphs without display names.
    pub fn catalog(&self) -> CountryCatalog {
        CountryCatalog::from_records(self.adjacency.keys().map(|id| CountryRecord {
            code: id.clone(),
            name: id.to_string(),
            area: 0.0,
        }))
    }
}

#[async_trait]
impl NodeDirectory for StaticDirectory {
    async fn lookup(&self, id: &NodeId) -> LookupResult<Node> {
        self.adjacency
            .get(id)
            .map(|neighbors| Node::new(id.clone(), neighbors.iter().cloned()))
            .ok_or_else(|| LookupError::not_found(id.clone()))
    }
}
