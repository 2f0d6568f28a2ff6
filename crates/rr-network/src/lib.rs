//! `rr-network` — road graph, loading, spatial lookup, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`graph`]   | `Graph` (directed, adjacency sets)                           |
//! | [`network`] | `RoadMap` (graph + coordinates + street names + R-tree), `RoadMapBuilder` |
//! | [`loader`]  | `load_road_map`, `load_road_map_reader`                      |
//! | [`router`]  | `EdgeCost`, `least_cost_path`, `reconstruct_path`, `Router`, `DijkstraRouter` |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                           |
//!
//! # Road data
//!
//! ```text
//! V,30198538,53.618369,-113.602987
//! E,314080060,314080061,23 Avenue NW
//! ```
//!
//! Everything built here is immutable once loaded; queries only borrow it.

pub mod error;
pub mod graph;
pub mod loader;
pub mod network;
pub mod router;


pub use error::{NetworkError, NetworkResult};
pub use graph::Graph;
pub use loader::{load_road_map, load_road_map_reader};
pub use network::{RoadMap, RoadMapBuilder};
pub use router::{
    DijkstraRouter, EdgeCost, Route, Router, least_cost_path, least_cost_route, reconstruct_path,
};
