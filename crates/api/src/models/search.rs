use super::graph::NodeId;
use serde::{Deserialize, Serialize};

/// Outcome of a successful path search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Start to goal, both inclusive.
    pub path: Vec<NodeId>,
    /// Node count along `path` (the start counts as 1), not edge count.
    pub distance: usize,
    /// Directory calls made during the search.
    pub lookups: usize,
}
