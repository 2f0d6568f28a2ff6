//! The routing engine: an owned road map plus a pluggable router.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use rr_core::{FixedCoord, VertexId};
use rr_network::{
    DijkstraRouter, NetworkError, RoadMap, Route, Router, load_road_map, load_road_map_reader,
};

use crate::planner::{Tour, greedy_tour};
use crate::{EngineError, EngineResult};

/// Answers route queries over one immutable [`RoadMap`].
///
/// Construct it once at startup and pass `&RoutingEngine` (or an `Arc`) to
/// whatever serves requests.  Queries take `&self` and allocate their own
/// search state.
pub struct RoutingEngine<R: Router = DijkstraRouter> {
    map:    RoadMap,
    router: R,
}

impl RoutingEngine {
    /// Engine over `map` using Dijkstra's algorithm.
    pub fn new(map: RoadMap) -> Self {
        Self::with_router(map, DijkstraRouter)
    }

    /// Load road data from `path` and build an engine over it.
    ///
    /// # Errors
    ///
    /// Any load failure aborts construction; see
    /// [`rr_network::loader`] for the failure policy.
    pub fn load(path: &Path) -> EngineResult<Self> {
        Ok(Self::new(load_road_map(path)?))
    }

    /// Like [`load`](Self::load) but reads road data from any `Read` source.
    pub fn from_reader<S: Read>(source: S) -> EngineResult<Self> {
        Ok(Self::new(load_road_map_reader(source)?))
    }
}

impl<R: Router> RoutingEngine<R> {
    /// Engine over `map` using a custom search strategy.
    pub fn with_router(map: RoadMap, router: R) -> Self {
        Self { map, router }
    }

    pub fn road_map(&self) -> &RoadMap {
        &self.map
    }

    /// Nearest road vertex to `pos`; `None` for an empty map or an
    /// out-of-range `pos`.
    pub fn nearest_vertex(&self, pos: FixedCoord) -> Option<VertexId> {
        self.map.nearest_vertex(pos)
    }

    /// Least-cost route between two vertices, using straight-line edge
    /// lengths as cost.  `None` if `to` is unreachable from `from`.
    pub fn route_between(&self, from: VertexId, to: VertexId) -> Option<Route> {
        self.router.route(self.map.graph(), from, to, &self.map)
    }

    // ── Two-point queries ─────────────────────────────────────────────────

    /// Shortest path between the vertices nearest to `start` and `end`.
    ///
    /// Returns an empty path if the destination is unreachable, the map has
    /// no vertices, or either point lies outside ±360°.
    pub fn find_path(&self, start: FixedCoord, end: FixedCoord) -> Vec<VertexId> {
        if !(start.is_in_range() && end.is_in_range()) {
            debug!(%start, %end, "query point out of range");
            return Vec::new();
        }
        let (Some(from), Some(to)) = (self.nearest_vertex(start), self.nearest_vertex(end)) else {
            return Vec::new();
        };
        debug!(%start, %end, %from, %to, "resolved route endpoints");

        match self.route_between(from, to) {
            Some(route) => route.path,
            None => {
                debug!(%from, %to, "destination unreachable");
                Vec::new()
            }
        }
    }

    /// [`find_path`](Self::find_path) for decimal-degree text, as received
    /// from a request: `start` and `end` are `(latitude, longitude)`.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidQuery`] if any component is not a decimal
    /// coordinate.  No search runs in that case.
    pub fn find_path_decimal(
        &self,
        start: (&str, &str),
        end: (&str, &str),
    ) -> EngineResult<Vec<VertexId>> {
        let start = parse_query_coord(start)?;
        let end = parse_query_coord(end)?;
        Ok(self.find_path(start, end))
    }

    /// Answer many two-point queries.  Results are in query order.
    pub fn find_paths(&self, queries: &[(FixedCoord, FixedCoord)]) -> Vec<Vec<VertexId>> {
        #[cfg(not(feature = "parallel"))]
        {
            queries
                .iter()
                .map(|&(start, end)| self.find_path(start, end))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            queries
                .par_iter()
                .map(|&(start, end)| self.find_path(start, end))
                .collect()
        }
    }

    // ── Multi-stop queries ────────────────────────────────────────────────

    /// Greedy tour over `waypoints`; the first waypoint is the start.
    ///
    /// Each waypoint is snapped to its nearest vertex, then
    /// [`greedy_tour`] chains shortest paths.  The tour's `path` is the full
    /// concatenated route.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidQuery`] for no waypoints, a waypoint outside
    ///   ±360°, or an empty map.
    /// - [`EngineError::PlannerStalled`] if the tour cannot be completed.
    pub fn multi_stop_route(&self, waypoints: &[FixedCoord]) -> EngineResult<Tour> {
        let stops = waypoints
            .iter()
            .map(|&pos| {
                if !pos.is_in_range() {
                    return Err(EngineError::InvalidQuery(format!(
                        "waypoint ({pos}) is outside the coordinate range"
                    )));
                }
                self.nearest_vertex(pos).ok_or_else(|| {
                    EngineError::InvalidQuery("road map has no vertices".into())
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;
        greedy_tour(&self.map, &self.router, &stops)
    }

    // ── Output ────────────────────────────────────────────────────────────

    /// Render `path` as `"<len> <lat1> <lon1> <lat2> <lon2> ..."` in
    /// fixed-point units.  An empty path renders as `"0"`.
    ///
    /// # Errors
    ///
    /// [`NetworkError::UnknownVertex`] (wrapped) if a vertex has no
    /// coordinate in this map.
    pub fn path_to_coordinate_string(&self, path: &[VertexId]) -> EngineResult<String> {
        let mut out = path.len().to_string();
        for &v in path {
            let pos = self.map.coord(v).ok_or(NetworkError::UnknownVertex(v))?;
            out.push(' ');
            out.push_str(&pos.to_string());
        }
        Ok(out)
    }

    /// Street names along `path`, with consecutive repeats collapsed.
    /// Edges without a recorded name are skipped.
    pub fn street_names(&self, path: &[VertexId]) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for pair in path.windows(2) {
            if let Some(name) = self.map.street_name(pair[0], pair[1]) {
                if names.last() != Some(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

fn parse_query_coord((lat, lon): (&str, &str)) -> EngineResult<FixedCoord> {
    FixedCoord::parse(lat, lon).map_err(|e| EngineError::InvalidQuery(e.to_string()))
}
