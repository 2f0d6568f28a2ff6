//! `rr-core` — foundational types for the `rust_route` road-routing engine.
//!
//! This crate is a dependency of every other `rr-*` crate.  It has no `rr-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`ids`]    | `VertexId`                                                  |
//! | [`coord`]  | `FixedCoord`, `parse_fixed`, `FIXED_POINT_SCALE`, `MAX_FIXED` |
//! | [`error`]  | `CoreError`, `CoreResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod coord;
pub mod error;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::{FIXED_POINT_SCALE, FixedCoord, MAX_FIXED, parse_fixed};
pub use error::{CoreError, CoreResult};
pub use ids::VertexId;
