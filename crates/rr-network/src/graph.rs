//! Generic directed graph over [`VertexId`]s.
//!
//! Vertices carry no data; coordinates and street names are side tables held
//! by [`RoadMap`](crate::RoadMap).  Each vertex maps to the ordered set of its
//! successors, so:
//!
//! - an ordered pair `(from, to)` is stored at most once (no parallel edges),
//! - [`Graph::neighbours`] yields successors in ascending id order, which
//!   keeps search results reproducible across runs.
//!
//! Edges must reference vertices that were added first.  [`Graph::add_edge`]
//! rejects unknown endpoints and leaves the graph untouched.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use rr_core::VertexId;

use crate::{NetworkError, NetworkResult};

/// Directed graph with an adjacency index.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency:  FxHashMap<VertexId, BTreeSet<VertexId>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a vertex set and a list of directed edges.
    ///
    /// ```
    /// use rr_core::VertexId;
    /// use rr_network::Graph;
    ///
    /// let v = |n| VertexId(n);
    /// let g = Graph::from_edges([v(1), v(2)], [(v(1), v(2))]).unwrap();
    /// assert_eq!(g.edge_count(), 1);
    /// ```
    pub fn from_edges<V, E>(vertices: V, edges: E) -> NetworkResult<Self>
    where
        V: IntoIterator<Item = VertexId>,
        E: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut graph = Self::new();
        for v in vertices {
            graph.add_vertex(v);
        }
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert a vertex.  Returns `false` if it was already present.
    pub fn add_vertex(&mut self, v: VertexId) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, BTreeSet::new());
        true
    }

    /// Insert the directed edge `from → to`.
    ///
    /// Returns `Ok(false)` if the edge already existed.
    ///
    /// # Errors
    ///
    /// [`NetworkError::UnknownVertex`] if either endpoint was never added.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> NetworkResult<bool> {
        if !self.adjacency.contains_key(&to) {
            return Err(NetworkError::UnknownVertex(to));
        }
        let successors = self
            .adjacency
            .get_mut(&from)
            .ok_or(NetworkError::UnknownVertex(from))?;
        let inserted = successors.insert(to);
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.adjacency.contains_key(&v)
    }

    pub fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|successors| successors.contains(&to))
    }

    /// Successors of `v`, ascending.  Empty if `v` has no outgoing edges or
    /// is not in the graph.  Call again to restart.
    #[inline]
    pub fn neighbours(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.get(&v).into_iter().flatten().copied()
    }

    /// Number of outgoing edges of `v` (0 for unknown vertices).
    #[inline]
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.adjacency.get(&v).map_or(0, BTreeSet::len)
    }

    /// All vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// All directed edges as `(from, to)`, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&from, successors)| successors.iter().map(move |&to| (from, to)))
    }
}
