//! Greedy multi-stop tour planning.
//!
//! Starting from the first waypoint, repeatedly travel to whichever
//! unvisited waypoint has the cheapest shortest path from the current
//! position.  This is a nearest-neighbour heuristic for a travelling-salesman
//! variant; it does not promise a minimal total distance.

use tracing::{debug, warn};

use rr_core::VertexId;
use rr_network::{RoadMap, Route, Router};

use crate::{EngineError, EngineResult};

/// A planned multi-stop route.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Waypoint vertices in visiting order, starting with the start.
    pub order: Vec<VertexId>,
    /// Concatenated legs; each junction vertex appears once.
    pub path: Vec<VertexId>,
    /// Sum of the leg costs.
    pub total_cost: f64,
}

/// Plan a greedy tour over `waypoints`, where `waypoints[0]` is the fixed
/// start and the rest may be visited in any order.
///
/// Among equally cheap candidates the one listed first wins.  Waypoints
/// that coincide with the current vertex cost nothing and are visited
/// immediately.
///
/// # Errors
///
/// - [`EngineError::InvalidQuery`] if `waypoints` is empty.
/// - [`EngineError::PlannerStalled`] if, at some point, none of the
///   remaining waypoints is reachable.
pub fn greedy_tour<R: Router + ?Sized>(
    map: &RoadMap,
    router: &R,
    waypoints: &[VertexId],
) -> EngineResult<Tour> {
    let Some((&start, rest)) = waypoints.split_first() else {
        return Err(EngineError::InvalidQuery("multi-stop route needs at least one waypoint".into()));
    };

    let mut remaining = rest.to_vec();
    let mut order = Vec::with_capacity(waypoints.len());
    let mut path = vec![start];
    let mut total_cost = 0.0;
    let mut current = start;
    order.push(start);

    while !remaining.is_empty() {
        let mut nearest = None;
        for (i, &candidate) in remaining.iter().enumerate() {
            let Some(leg) = router.route(map.graph(), current, candidate, map) else {
                continue;
            };
            let cheaper = nearest
                .as_ref()
                .is_none_or(|(_, best): &(usize, Route)| leg.total_cost < best.total_cost);
            if cheaper {
                nearest = Some((i, leg));
            }
        }

        let Some((i, leg)) = nearest else {
            warn!(at = %current, remaining = remaining.len(), "no remaining waypoint is reachable");
            return Err(EngineError::PlannerStalled { at: current, remaining });
        };

        let next = remaining.remove(i);
        debug!(from = %current, to = %next, cost = leg.total_cost, "tour leg");
        total_cost += leg.total_cost;
        path.extend(leg.path.into_iter().skip(1));
        order.push(next);
        current = next;
    }

    Ok(Tour { order, path, total_cost })
}
