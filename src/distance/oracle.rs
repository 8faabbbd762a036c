//! Distance oracle trait and strategy values.

use super::{CostMatrix, TsplibMetric};
use crate::models::{Cost, Point, ProblemKind};

/// A cost function between two points.
///
/// The problem kind is a property of the oracle value, chosen once by the
/// caller: symmetric oracles derive costs from point attributes or a
/// symmetric table, asymmetric ones look up the `from` row at the `to` id.
///
/// # Examples
///
/// ```
/// use u_bottleneck::distance::DistanceOracle;
/// use u_bottleneck::models::{Point, ProblemKind};
///
/// struct LineDistance;
///
/// impl DistanceOracle for LineDistance {
///     type Cost = f64;
///     fn cost(&self, from: &Point, to: &Point) -> f64 {
///         (from.x() - to.x()).abs()
///     }
///     fn kind(&self) -> ProblemKind {
///         ProblemKind::Symmetric
///     }
/// }
///
/// let a = Point::new(1, 0.0, 0.0);
/// let b = Point::new(2, 6.0, 0.0);
/// assert_eq!(LineDistance.cost(&b, &a), 6.0);
/// assert_eq!(LineDistance.dimension(), None);
/// ```
pub trait DistanceOracle {
    /// Ordered numeric cost type.
    type Cost: Cost;

    /// Cost of the edge from `from` to `to`.
    fn cost(&self, from: &Point, to: &Point) -> Self::Cost;

    /// Whether `cost` is symmetric.
    fn kind(&self) -> ProblemKind;

    /// Number of points this oracle covers, if bounded.
    ///
    /// Coordinate metrics cover any point and return `None`.
    fn dimension(&self) -> Option<usize> {
        None
    }
}

impl<O: DistanceOracle + ?Sized> DistanceOracle for &O {
    type Cost = O::Cost;

    fn cost(&self, from: &Point, to: &Point) -> Self::Cost {
        (**self).cost(from, to)
    }

    fn kind(&self) -> ProblemKind {
        (**self).kind()
    }

    fn dimension(&self) -> Option<usize> {
        (**self).dimension()
    }
}

/// Integer cost strategy: coordinate distance or matrix lookup.
///
/// # Examples
///
/// ```
/// use u_bottleneck::distance::{CostMatrix, CostModel, DistanceOracle, TsplibMetric};
/// use u_bottleneck::models::ProblemKind;
///
/// let coords = CostModel::from(TsplibMetric::Euc2d);
/// assert_eq!(coords.kind(), ProblemKind::Symmetric);
///
/// let table = CostMatrix::from_rows(vec![vec![0, 2], vec![7, 0]], ProblemKind::Asymmetric).unwrap();
/// let lookup = CostModel::from(table);
/// assert_eq!(lookup.kind(), ProblemKind::Asymmetric);
/// assert_eq!(lookup.dimension(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CostModel {
    /// Costs derived from point coordinates.
    Coordinates(TsplibMetric),
    /// Costs looked up by point id.
    Matrix(CostMatrix<i64>),
}

impl From<TsplibMetric> for CostModel {
    fn from(metric: TsplibMetric) -> Self {
        Self::Coordinates(metric)
    }
}

impl From<CostMatrix<i64>> for CostModel {
    fn from(matrix: CostMatrix<i64>) -> Self {
        Self::Matrix(matrix)
    }
}

impl DistanceOracle for CostModel {
    type Cost = i64;

    fn cost(&self, from: &Point, to: &Point) -> i64 {
        match self {
            Self::Coordinates(metric) => metric.distance(from, to),
            Self::Matrix(matrix) => matrix.get(from.id(), to.id()),
        }
    }

    fn kind(&self) -> ProblemKind {
        match self {
            Self::Coordinates(_) => ProblemKind::Symmetric,
            Self::Matrix(matrix) => matrix.kind(),
        }
    }

    fn dimension(&self) -> Option<usize> {
        match self {
            Self::Coordinates(_) => None,
            Self::Matrix(matrix) => Some(matrix.size()),
        }
    }
}

/// Adapts a closure into a [`DistanceOracle`] of a declared kind.
///
/// # Examples
///
/// ```
/// use u_bottleneck::distance::{DistanceOracle, FnOracle};
/// use u_bottleneck::models::{Point, ProblemKind};
///
/// let line = FnOracle::symmetric(|a: &Point, b: &Point| (a.x() - b.x()).abs());
/// let a = Point::new(1, 1.0, 0.0);
/// let b = Point::new(2, 3.0, 0.0);
/// assert_eq!(line.cost(&a, &b), 2.0);
/// ```
#[derive(Clone)]
pub struct FnOracle<F> {
    f: F,
    kind: ProblemKind,
}

impl<F> FnOracle<F> {
    /// Wraps `f` with an explicit problem kind.
    pub fn new(kind: ProblemKind, f: F) -> Self {
        Self { f, kind }
    }

    /// Wraps a symmetric cost function.
    pub fn symmetric(f: F) -> Self {
        Self::new(ProblemKind::Symmetric, f)
    }

    /// Wraps a directed cost function.
    pub fn asymmetric(f: F) -> Self {
        Self::new(ProblemKind::Asymmetric, f)
    }
}

impl<F> std::fmt::Debug for FnOracle<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnOracle").field("kind", &self.kind).finish()
    }
}

impl<F, C> DistanceOracle for FnOracle<F>
where
    F: Fn(&Point, &Point) -> C,
    C: Cost,
{
    type Cost = C;

    fn cost(&self, from: &Point, to: &Point) -> C {
        (self.f)(from, to)
    }

    fn kind(&self) -> ProblemKind {
        self.kind
    }
}
