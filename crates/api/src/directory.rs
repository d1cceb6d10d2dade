use crate::error::LookupResult;
use crate::models::{Node, NodeId};
use async_trait::async_trait;
use std::sync::Arc;

/// Source of adjacency for an implicit graph.
///
/// Every call is one round trip to whatever backs the directory (a remote API,
/// a file loaded in memory). Implementations must not cache across calls on
/// behalf of the search; the search itself guarantees it never asks twice for
/// the same node.
#[async_trait]
pub trait NodeDirectory: Send + Sync {
    /// Resolve `id` to its neighbor list.
    async fn lookup(&self, id: &NodeId) -> LookupResult<Node>;
}

#[async_trait]
impl<T: NodeDirectory + ?Sized> NodeDirectory for Arc<T> {
    async fn lookup(&self, id: &NodeId) -> LookupResult<Node> {
        (**self).lookup(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;

    struct Echo;

    #[async_trait]
    impl NodeDirectory for Echo {
        async fn lookup(&self, id: &NodeId) -> LookupResult<Node> {
            if id.as_str() == "NONE" {
                return Err(LookupError::not_found(id.clone()));
            }
            Ok(Node::new(id.clone(), [id.clone()]))
        }
    }

    #[tokio::test]
    async fn arc_dyn_directory_delegates() {
        let dir: Arc<dyn NodeDirectory> = Arc::new(Echo);
        let node = dir.lookup(&NodeId::from("AND")).await.unwrap();
        assert_eq!(node.neighbors, vec![NodeId::from("AND")]);
        assert!(dir.lookup(&NodeId::from("NONE")).await.is_err());
    }
}
