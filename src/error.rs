//! Error types.

use thiserror::Error;

/// Errors raised while building models and distance oracles.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("cost table has {len} entries, expected {size}x{size}")]
    TableSize { size: usize, len: usize },

    #[error("cost table row {row} has {len} entries, expected {size}")]
    RaggedRow { row: usize, len: usize, size: usize },

    #[error("table declared symmetric but cost({from}, {to}) != cost({to}, {from})")]
    AsymmetricTable { from: usize, to: usize },
}

/// Errors raised by the bottleneck scanner.
///
/// Each variant is a violated precondition on the inputs; the scan itself
/// cannot fail once its inputs are accepted.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("point set is empty")]
    EmptyPointSet,

    #[error("point at position {position} has id {id}, expected {}", .position + 1)]
    NonContiguousId { position: usize, id: usize },

    #[error("start id {start_id} is outside 1..={len}")]
    StartOutOfRange { start_id: usize, len: usize },

    #[error("distance oracle covers {dimension} points, point set has {len}")]
    OracleTooSmall { dimension: usize, len: usize },

    #[error("invalid scan options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
