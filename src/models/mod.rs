//! Domain model types for TSP and ATSP instances.
//!
//! Provides points with 1-based ids, the symmetric/asymmetric problem kind,
//! the ordered cost trait, and the per-call visited markers used by the
//! scanner.

mod cost;
mod marks;
mod point;

pub use cost::Cost;
pub use marks::VisitMarks;
pub use point::{Point, ProblemKind};
