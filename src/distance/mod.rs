//! Distance oracles.
//!
//! Provides the [`DistanceOracle`] trait, TSPLIB coordinate metrics, a dense
//! cost matrix for explicit and directed costs, and the [`CostModel`]
//! strategy that selects between them.

mod matrix;
mod metric;
mod oracle;

pub use matrix::CostMatrix;
pub use metric::{Euclidean, TsplibMetric};
pub use oracle::{CostModel, DistanceOracle, FnOracle};
