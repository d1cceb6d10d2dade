use landroute_api::{
    LookupResult, Node, NodeDirectory, NodeId, PathError, PathResult, SearchResult,
};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{debug, info, warn};

/// Breadth-first search over a graph whose adjacency is revealed one node at a
/// time by a [`NodeDirectory`].
///
/// Distances count nodes, not edges: the start has distance 1, its neighbors 2,
/// and so on. Reported distances therefore equal `path.len()`.
///
/// Lookups are issued strictly one at a time, in frontier order, and no node is
/// ever expanded twice within one search. The goal is only looked up once, to
/// check it is not isolated; it is never expanded. When start and goal are the
/// same id, that id is validated twice and nothing is expanded.
pub struct IncrementalBfs<'d, D: NodeDirectory + ?Sized> {
    directory: &'d D,
}

impl<'d, D: NodeDirectory + ?Sized> IncrementalBfs<'d, D> {
    pub fn new(directory: &'d D) -> Self {
        Self { directory }
    }

    /// Find one shortest path from `start` to `goal`.
    ///
    /// Both endpoints are looked up first (two lookups, always both issued);
    /// if either has no neighbors the search fails with
    /// [`PathError::DegenerateEndpoint`], even when `start == goal`. A start
    /// equal to the goal then yields `[start]`. Otherwise the start's lookup is
    /// reused as its expansion. Any directory failure aborts the search as
    /// [`PathError::LookupFailed`] and all intermediate state is dropped.
    pub async fn find_path(&self, start: &NodeId, goal: &NodeId) -> PathResult<SearchResult> {
        let mut lookups = 0;
        let start_node = self.fetch(start, &mut lookups).await?;
        let goal_node = self.fetch(goal, &mut lookups).await?;

        if start_node.is_isolated() || goal_node.is_isolated() {
            warn!(
                %start,
                %goal,
                start_isolated = start_node.is_isolated(),
                goal_isolated = goal_node.is_isolated(),
                "endpoint has no neighbors"
            );
            return Err(PathError::DegenerateEndpoint { lookups });
        }

        if start == goal {
            debug!(%start, "start equals goal");
            return Ok(SearchResult {
                path: vec![start.clone()],
                distance: 1,
                lookups,
            });
        }

        let mut state = SearchState::new(start.clone(), lookups);
        let mut start_node = Some(start_node);

        while let Some(current) = state.pop() {
            let node = match start_node.take() {
                Some(node) => node,
                None => self.fetch(&current, &mut state.lookups).await?,
            };
            state.visited.insert(current.clone());

            debug!(
                node = %current,
                distance = state.distance[&current],
                neighbors = node.neighbors.len(),
                frontier = state.frontier.len(),
                "expanded"
            );

            for neighbor in node.neighbors {
                if &neighbor == goal {
                    let result = state.finish(&current, neighbor);
                    info!(
                        %start,
                        %goal,
                        distance = result.distance,
                        lookups = result.lookups,
                        "path found"
                    );
                    return Ok(result);
                }
                state.discover(&current, neighbor);
            }
        }

        warn!(%start, %goal, lookups = state.lookups, "frontier exhausted");
        Err(PathError::Unreachable {
            lookups: state.lookups,
        })
    }

    async fn fetch(&self, id: &NodeId, lookups: &mut usize) -> LookupResult<Node> {
        *lookups += 1;
        debug!(%id, lookups = *lookups, "lookup");
        self.directory.lookup(id).await
    }
}

/// Shorthand for `IncrementalBfs::new(directory).find_path(start, goal)`.
pub async fn find_path<D: NodeDirectory + ?Sized>(
    start: &NodeId,
    goal: &NodeId,
    directory: &D,
) -> PathResult<SearchResult> {
    IncrementalBfs::new(directory).find_path(start, goal).await
}

/// Bookkeeping of a single search.
struct SearchState {
    frontier: VecDeque<NodeId>,
    /// Mirrors `frontier` membership.
    queued: HashSet<NodeId>,
    visited: HashSet<NodeId>,
    distance: HashMap<NodeId, usize>,
    paths: HashMap<NodeId, Vec<NodeId>>,
    lookups: usize,
}

impl SearchState {
    fn new(start: NodeId, lookups: usize) -> Self {
        let mut state = Self {
            frontier: VecDeque::new(),
            queued: HashSet::new(),
            visited: HashSet::new(),
            distance: HashMap::new(),
            paths: HashMap::new(),
            lookups,
        };
        state.distance.insert(start.clone(), 1);
        state.paths.insert(start.clone(), vec![start.clone()]);
        state.queued.insert(start.clone());
        state.frontier.push_back(start);
        state
    }

    fn pop(&mut self) -> Option<NodeId> {
        let id = self.frontier.pop_front()?;
        self.queued.remove(&id);
        Some(id)
    }

    /// Enqueue `neighbor` of `parent` unless it was already seen.
    fn discover(&mut self, parent: &NodeId, neighbor: NodeId) {
        if self.visited.contains(&neighbor) || self.queued.contains(&neighbor) {
            return;
        }

        let candidate = self.distance[parent] + 1;
        // With unit edges a node reached later is never closer, so only the
        // first discovery records anything.
        let improves = self
            .distance
            .get(&neighbor)
            .is_none_or(|&known| known > candidate);
        if improves {
            let mut path = self.paths[parent].clone();
            path.push(neighbor.clone());
            self.distance.insert(neighbor.clone(), candidate);
            self.paths.insert(neighbor.clone(), path);
        }

        self.queued.insert(neighbor.clone());
        self.frontier.push_back(neighbor);
    }

    fn finish(mut self, parent: &NodeId, goal: NodeId) -> SearchResult {
        let distance = self.distance[parent] + 1;
        let mut path = self.paths.remove(parent).unwrap_or_default();
        path.push(goal);
        SearchResult {
            path,
            distance,
            lookups: self.lookups,
        }
    }
}
