//! Road map: graph plus per-vertex coordinates and per-edge street names.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over integer `[lat, lon]` points maps an arbitrary
//! [`FixedCoord`] to the nearest vertex.  Distances are exact `i64` squared
//! planar distances, so equidistant vertices really compare equal and the
//! lowest id among them is returned.  The result is identical to a
//! brute-force scan over the coordinate table.
//!
//! Every stored vertex and every query point is kept within
//! [`MAX_FIXED`](rr_core::MAX_FIXED), so the index arithmetic cannot
//! overflow.  Queries outside that box find nothing.
//!
//! # Edge cost
//!
//! `RoadMap` implements [`EdgeCost`] as the straight-line distance between
//! an edge's endpoints.  Querying a pair that is not an edge yields
//! `f64::INFINITY`.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use rr_core::{FixedCoord, VertexId};

use crate::graph::Graph;
use crate::router::EdgeCost;
use crate::{NetworkError, NetworkResult};

// ── R-tree vertex entry ───────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `VertexId`.
#[derive(Clone, Debug)]
struct VertexEntry {
    point: [i64; 2], // [lat, lon]
    id:    VertexId,
}

impl RTreeObject for VertexEntry {
    type Envelope = AABB<[i64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for VertexEntry {
    /// Squared planar distance in fixed-point units.
    fn distance_2(&self, point: &[i64; 2]) -> i64 {
        let [lat, lon] = self.point;
        FixedCoord::new(lat, lon).distance_sq(FixedCoord::new(point[0], point[1]))
    }
}

// ── RoadMap ───────────────────────────────────────────────────────────────────

/// Directed road graph with its coordinate and street-name tables.
///
/// Built once by [`RoadMapBuilder`] (usually via
/// [`load_road_map`](crate::load_road_map)) and never mutated afterwards, so
/// a shared `&RoadMap` can serve any number of concurrent queries.
pub struct RoadMap {
    graph:        Graph,
    coords:       FxHashMap<VertexId, FixedCoord>,
    street_names: FxHashMap<(VertexId, VertexId), String>,
    spatial_idx:  RTree<VertexEntry>,
}

impl RoadMap {
    /// A map with no vertices.  Every nearest-vertex query returns `None`.
    pub fn empty() -> Self {
        RoadMapBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    // ── Side tables ───────────────────────────────────────────────────────

    /// Fixed-point coordinate of `v`, if it was declared.
    #[inline]
    pub fn coord(&self, v: VertexId) -> Option<FixedCoord> {
        self.coords.get(&v).copied()
    }

    /// Every `(vertex, coordinate)` pair, in no particular order.
    pub fn coords(&self) -> impl Iterator<Item = (VertexId, FixedCoord)> + '_ {
        self.coords.iter().map(|(&v, &c)| (v, c))
    }

    /// Street name recorded for the directed edge `from → to`.
    pub fn street_name(&self, from: VertexId, to: VertexId) -> Option<&str> {
        self.street_names.get(&(from, to)).map(String::as_str)
    }

    /// Straight-line length of the edge `from → to`, or `f64::INFINITY` if
    /// there is no such edge.
    pub fn edge_distance(&self, from: VertexId, to: VertexId) -> f64 {
        if !self.graph.contains_edge(from, to) {
            return f64::INFINITY;
        }
        match (self.coord(from), self.coord(to)) {
            (Some(a), Some(b)) => a.distance(b),
            _ => f64::INFINITY,
        }
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The vertex closest to `pos` by straight-line distance.  Among
    /// equidistant vertices the lowest id wins.
    ///
    /// Returns `None` if the map has no vertices or `pos` is out of range.
    pub fn nearest_vertex(&self, pos: FixedCoord) -> Option<VertexId> {
        if !pos.is_in_range() {
            return None;
        }
        let mut candidates = self
            .spatial_idx
            .nearest_neighbor_iter_with_distance_2(&[pos.lat, pos.lon]);
        let (first, best) = candidates.next()?;
        let mut nearest = first.id;
        for (entry, d2) in candidates {
            if d2 > best {
                break;
            }
            nearest = nearest.min(entry.id);
        }
        Some(nearest)
    }

    /// Up to `k` vertices nearest to `pos`, by ascending distance then id.
    /// Empty if `pos` is out of range.
    pub fn k_nearest_vertices(&self, pos: FixedCoord, k: usize) -> Vec<VertexId> {
        if k == 0 || !pos.is_in_range() {
            return Vec::new();
        }
        let mut found: Vec<(i64, VertexId)> = Vec::with_capacity(k);
        for (entry, d2) in self
            .spatial_idx
            .nearest_neighbor_iter_with_distance_2(&[pos.lat, pos.lon])
        {
            // Keep draining past k while still tied with the k-th distance so
            // the id tie-break sees every candidate.
            if found.len() >= k && found.last().is_some_and(|&(last, _)| d2 > last) {
                break;
            }
            found.push((d2, entry.id));
        }
        found.sort_unstable();
        found.truncate(k);
        found.into_iter().map(|(_, id)| id).collect()
    }
}

impl EdgeCost for RoadMap {
    #[inline]
    fn cost(&self, from: VertexId, to: VertexId) -> f64 {
        self.edge_distance(from, to)
    }
}

// ── RoadMapBuilder ────────────────────────────────────────────────────────────

/// Construct a [`RoadMap`] incrementally, then call [`build`](Self::build).
///
/// Vertices must be added before the edges that reference them.
///
/// # Example
///
/// ```
/// use rr_core::{FixedCoord, VertexId};
/// use rr_network::RoadMapBuilder;
///
/// let mut b = RoadMapBuilder::new();
/// b.add_vertex(VertexId(1), FixedCoord::new(5361836, -11360298)).unwrap();
/// b.add_vertex(VertexId(2), FixedCoord::new(5361900, -11360298)).unwrap();
/// b.add_road(VertexId(1), VertexId(2), "23 Avenue NW").unwrap();
/// let map = b.build();
/// assert_eq!(map.vertex_count(), 2);
/// assert_eq!(map.edge_count(), 2); // bidirectional
/// ```
#[derive(Debug, Default)]
pub struct RoadMapBuilder {
    graph:        Graph,
    coords:       FxHashMap<VertexId, FixedCoord>,
    street_names: FxHashMap<(VertexId, VertexId), String>,
}

impl RoadMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex at `pos`.  Re-declaring a vertex moves it to the new
    /// position.
    ///
    /// # Errors
    ///
    /// [`NetworkError::CoordinateOutOfRange`] if `pos` is outside ±360°;
    /// the builder is left unchanged.
    pub fn add_vertex(&mut self, id: VertexId, pos: FixedCoord) -> NetworkResult<()> {
        if !pos.is_in_range() {
            return Err(NetworkError::CoordinateOutOfRange { vertex: id, pos });
        }
        self.graph.add_vertex(id);
        self.coords.insert(id, pos);
        Ok(())
    }

    /// Add a **directed** edge `from → to` named `street`.  A repeated pair
    /// keeps a single edge and takes the latest name.
    pub fn add_directed_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        street: impl Into<String>,
    ) -> NetworkResult<()> {
        self.graph.add_edge(from, to)?;
        self.street_names.insert((from, to), street.into());
        Ok(())
    }

    /// Convenience: add edges in **both directions** for a two-way street.
    pub fn add_road(&mut self, a: VertexId, b: VertexId, street: &str) -> NetworkResult<()> {
        self.add_directed_edge(a, b, street)?;
        self.add_directed_edge(b, a, street)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Consume the builder and bulk-load the spatial index.
    pub fn build(self) -> RoadMap {
        let entries: Vec<VertexEntry> = self
            .coords
            .iter()
            .map(|(&id, &pos)| VertexEntry {
                point: [pos.lat, pos.lon],
                id,
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        RoadMap {
            graph: self.graph,
            coords: self.coords,
            street_names: self.street_names,
            spatial_idx,
        }
    }
}
