//! Edge costs, Dijkstra's algorithm, and path reconstruction.
//!
//! # Pluggability
//!
//! The engine calls routing via the [`Router`] trait, so alternative search
//! strategies can be swapped in without touching the engine.  The default
//! [`DijkstraRouter`] runs [`least_cost_route`].
//!
//! # Frontier
//!
//! The frontier is a binary min-heap keyed by best known cost.  Improving a
//! vertex pushes a fresh entry and leaves the old one in the heap; stale
//! entries are skipped when popped.  Extraction order is therefore always the
//! globally cheapest frontier vertex, with ties broken by lowest `VertexId`.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::BuildHasher;

use rustc_hash::FxHashMap;

use rr_core::VertexId;

use crate::graph::Graph;
use crate::{NetworkError, NetworkResult};

// ── EdgeCost ──────────────────────────────────────────────────────────────────

/// Cost of traversing the directed edge `from → to`.
///
/// Implementations must return non-negative values.  For a pair that is not
/// an edge they should return `f64::INFINITY`; the search itself only asks
/// about edges present in the graph.
///
/// Any `Fn(VertexId, VertexId) -> f64` closure is an `EdgeCost`.
pub trait EdgeCost {
    fn cost(&self, from: VertexId, to: VertexId) -> f64;
}

impl<F> EdgeCost for F
where
    F: Fn(VertexId, VertexId) -> f64,
{
    #[inline]
    fn cost(&self, from: VertexId, to: VertexId) -> f64 {
        self(from, to)
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a successful search: the vertex path and its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Vertices from start to destination, both included.
    pub path: Vec<VertexId>,
    /// Sum of edge costs along `path`.
    pub total_cost: f64,
}

impl Route {
    /// `true` if the start and destination are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.path.len() == 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path strategy.
///
/// Implementations must be `Send + Sync` so one engine can answer queries
/// from several threads.
pub trait Router: Send + Sync {
    /// Least-cost route from `from` to `to`, or `None` if `to` is
    /// unreachable.
    fn route(
        &self,
        graph: &Graph,
        from: VertexId,
        to: VertexId,
        cost: &dyn EdgeCost,
    ) -> Option<Route>;
}

/// Dijkstra's algorithm over the adjacency index.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        graph: &Graph,
        from: VertexId,
        to: VertexId,
        cost: &dyn EdgeCost,
    ) -> Option<Route> {
        least_cost_route(graph, from, to, cost)
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Least-cost path from `start` to `dest`.
///
/// Returns `[start]` when `start == dest` and an empty path when `dest` is
/// unreachable.
///
/// ```
/// use rr_core::VertexId;
/// use rr_network::{Graph, least_cost_path};
///
/// let v = |n| VertexId(n);
/// let g = Graph::from_edges([v(1), v(2), v(3)], [(v(1), v(2)), (v(2), v(3))]).unwrap();
/// let path = least_cost_path(&g, v(1), v(3), &|_: VertexId, _: VertexId| 1.0);
/// assert_eq!(path, vec![v(1), v(2), v(3)]);
/// ```
pub fn least_cost_path<C>(graph: &Graph, start: VertexId, dest: VertexId, cost: &C) -> Vec<VertexId>
where
    C: EdgeCost + ?Sized,
{
    least_cost_route(graph, start, dest, cost)
        .map(|route| route.path)
        .unwrap_or_default()
}

/// Like [`least_cost_path`] but also reports the total cost, and `None`
/// instead of an empty path when `dest` is unreachable.
pub fn least_cost_route<C>(graph: &Graph, start: VertexId, dest: VertexId, cost: &C) -> Option<Route>
where
    C: EdgeCost + ?Sized,
{
    if start == dest {
        return Some(Route { path: vec![start], total_cost: 0.0 });
    }

    // best[v] = lowest cost found so far from start to v.
    let mut best: FxHashMap<VertexId, f64> = FxHashMap::default();
    // parents[v] = predecessor of v on that lowest-cost path.
    let mut parents: FxHashMap<VertexId, VertexId> = FxHashMap::default();
    let mut frontier = BinaryHeap::new();

    best.insert(start, 0.0);
    frontier.push(FrontierEntry::new(start, 0.0));

    while let Some(FrontierEntry { vertex, cost: FloatOrd(current) }) = frontier.pop() {
        // Skip stale heap entries.
        if best.get(&vertex).is_some_and(|&known| current > known) {
            continue;
        }

        if vertex == dest {
            let path = reconstruct_path(start, dest, &parents).ok()?;
            return Some(Route { path, total_cost: current });
        }

        for next in graph.neighbours(vertex) {
            let candidate = current + cost.cost(vertex, next);
            let improves = best.get(&next).is_none_or(|&known| candidate < known);
            if improves {
                best.insert(next, candidate);
                parents.insert(next, vertex);
                frontier.push(FrontierEntry::new(next, candidate));
            }
        }
    }

    None
}

// ── Path reconstruction ───────────────────────────────────────────────────────

/// Rebuild the start-to-destination path from a parent map.
///
/// # Errors
///
/// [`NetworkError::BrokenParentChain`] if the walk from `dest` hits a vertex
/// with no recorded parent before reaching `start`.  Only call this once
/// `dest` is known to have been reached.
pub fn reconstruct_path<S: BuildHasher>(
    start: VertexId,
    dest: VertexId,
    parents: &HashMap<VertexId, VertexId, S>,
) -> NetworkResult<Vec<VertexId>> {
    let mut path = vec![dest];
    let mut current = dest;
    while current != start {
        let parent = *parents
            .get(&current)
            .ok_or(NetworkError::BrokenParentChain(current))?;
        // A chain longer than the map itself must contain a cycle.
        if path.len() > parents.len() {
            return Err(NetworkError::BrokenParentChain(parent));
        }
        path.push(parent);
        current = parent;
    }
    path.reverse();
    Ok(path)
}

// ── Heap entries ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    vertex: VertexId,
    cost:   FloatOrd,
}

impl FrontierEntry {
    fn new(vertex: VertexId, cost: f64) -> Self {
        Self { vertex, cost: FloatOrd(cost) }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (a max-heap) pops the cheapest entry first,
        // lowest vertex id on equal cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
