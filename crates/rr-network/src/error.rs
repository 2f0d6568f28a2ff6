//! Network-subsystem error type.

use thiserror::Error;

use rr_core::{FixedCoord, VertexId};

/// Errors produced by `rr-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A road-data record could not be used.  Loading stops at the first one.
    #[error("road data line {line}: {message}")]
    Load { line: u64, message: String },

    #[error("vertex {0} not found in graph")]
    UnknownVertex(VertexId),

    /// Vertex placed outside the ±360° fixed-point box.
    #[error("vertex {vertex} at ({pos}) is outside the coordinate range")]
    CoordinateOutOfRange { vertex: VertexId, pos: FixedCoord },

    #[error("no parent recorded for vertex {0} while reconstructing path")]
    BrokenParentChain(VertexId),

    #[error("road data read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
