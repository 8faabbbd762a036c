//! Point and problem-kind types.

use serde::{Deserialize, Serialize};

/// Whether the cost from A to B equals the cost from B to A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProblemKind {
    /// `cost(a, b) == cost(b, a)` (TSP).
    Symmetric,
    /// Directed costs (ATSP).
    Asymmetric,
}

impl ProblemKind {
    /// Returns `true` for [`ProblemKind::Symmetric`].
    pub fn is_symmetric(self) -> bool {
        matches!(self, Self::Symmetric)
    }
}

/// A point (node) of a TSP or ATSP instance.
///
/// Ids are 1-based and contiguous: in a point slice, position `i` holds the
/// point with id `i + 1`. Coordinates are only read by coordinate metrics;
/// matrix oracles look costs up by id.
///
/// # Examples
///
/// ```
/// use u_bottleneck::models::Point;
///
/// let p = Point::new(1, 3.0, 4.0);
/// assert_eq!(p.id(), 1);
/// assert_eq!(p.x(), 3.0);
///
/// let q = Point::unplaced(2);
/// assert_eq!(q.y(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: usize,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Creates a point without coordinates, for matrix-only instances.
    pub fn unplaced(id: usize) -> Self {
        Self::new(id, 0.0, 0.0)
    }

    /// Builds `n` unplaced points with ids `1..=n`.
    pub fn sequence(n: usize) -> Vec<Self> {
        (1..=n).map(Self::unplaced).collect()
    }

    /// Builds points from coordinate pairs, numbering them from 1.
    pub fn from_coords(coords: &[(f64, f64)]) -> Vec<Self> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Self::new(i + 1, x, y))
            .collect()
    }

    /// Point id (1-based).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate (latitude for geographical metrics).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate (longitude for geographical metrics).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Coordinate differences `(dx, dy)` to another point.
    pub fn delta(&self, other: &Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}
