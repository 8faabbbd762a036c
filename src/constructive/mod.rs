//! Constructive heuristics used as bounds.
//!
//! - [`bottleneck_nearest_neighbor`] — Longest edge of a greedy nearest-neighbor tour, O(n²)

mod bottleneck;

pub use bottleneck::{
    bottleneck_edge, bottleneck_nearest_neighbor, bottleneck_nearest_neighbor_with_marks,
    BottleneckEdge, ScanOptions,
};
