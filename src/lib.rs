//! # u-bottleneck
//!
//! Greedy nearest-neighbor bottleneck bound for TSP and ATSP instances.
//!
//! Starting from a fixed point, the scanner repeatedly moves to the closest
//! unvisited point, closes back to the start, and reports the longest edge
//! used. The tour itself is never stored.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, ProblemKind, Cost, VisitMarks)
//! - [`distance`] — Distance oracles (TSPLIB metrics, cost matrix, strategies)
//! - [`constructive`] — Bottleneck nearest-neighbor scan
//! - [`error`] — Error types

pub mod constructive;
pub mod distance;
pub mod error;
pub mod models;

pub use error::{ModelError, ScanError};
