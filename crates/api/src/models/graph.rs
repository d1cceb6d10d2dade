use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::borrow::Borrow;
use std::fmt;

/// Opaque identifier of a node in the implicit graph (a cca3 code for countries).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct NodeId(SmolStr);

impl NodeId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(SmolStr::from(s))
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

/// A node as returned by a directory: its id and its neighbors, in directory order.
///
/// An empty neighbor list marks an isolated node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub neighbors: Vec<NodeId>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, neighbors: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            id: id.into(),
            neighbors: neighbors.into_iter().collect(),
        }
    }

    pub fn is_isolated(&self) -> bool {
        self.neighbors.is_empty()
    }
}
