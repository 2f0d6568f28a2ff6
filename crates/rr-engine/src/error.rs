use rr_core::VertexId;
use rr_network::NetworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed input rejected before any search runs.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// No remaining waypoint of a multi-stop route is reachable from `at`.
    #[error("planner stalled at vertex {at}: {} waypoint(s) unreachable", .remaining.len())]
    PlannerStalled {
        at:        VertexId,
        remaining: Vec<VertexId>,
    },

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type EngineResult<T> = Result<T, EngineError>;
