//! `rr-engine` — the routing engine consumed by request-serving layers.
//!
//! # Query flow
//!
//! ```text
//! find_path(start, end):
//!   ① Snap:    nearest road vertex to each coordinate (R-tree lookup).
//!   ② Search:  Dijkstra between the two vertices, straight-line edge cost.
//!   ③ Render:  path_to_coordinate_string → "<n> <lat1> <lon1> ...".
//!
//! multi_stop_route(waypoints):
//!   snap every waypoint, then greedily chain ② from the first waypoint to
//!   whichever unvisited waypoint is cheapest to reach next.
//! ```
//!
//! The engine owns its [`RoadMap`](rr_network::RoadMap) and never mutates it
//! after construction; every query keeps its own search state, so one
//! engine can be shared across threads.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`RoutingEngine::find_paths`] on Rayon's pool.    |
//! | `serde`    | Propagates serde derives to `rr-core` types.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rr_core::FixedCoord;
//! use rr_engine::RoutingEngine;
//!
//! let engine = RoutingEngine::load(Path::new("edmonton-roads-2.0.1.txt"))?;
//! let path = engine.find_path(
//!     FixedCoord::new(5365488, -11333914),
//!     FixedCoord::new(5364727, -11335890),
//! );
//! println!("{}", engine.path_to_coordinate_string(&path)?);
//! ```

pub mod engine;
pub mod error;
pub mod planner;


pub use engine::RoutingEngine;
pub use error::{EngineError, EngineResult};
pub use planner::{Tour, greedy_tour};
