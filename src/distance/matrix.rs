//! Dense cost matrix.

use super::DistanceOracle;
use crate::error::ModelError;
use crate::models::{Cost, Point, ProblemKind};

/// A dense n×n cost matrix stored in row-major order, indexed by 1-based
/// point id.
///
/// Serves both explicit symmetric tables and directed (ATSP) costs, where
/// row `from` holds the outgoing costs of point `from`.
///
/// # Examples
///
/// ```
/// use u_bottleneck::distance::CostMatrix;
/// use u_bottleneck::models::ProblemKind;
///
/// let cm = CostMatrix::from_rows(
///     vec![vec![0, 1, 5], vec![9, 0, 1], vec![1, 1, 0]],
///     ProblemKind::Asymmetric,
/// )
/// .unwrap();
/// assert_eq!(cm.get(1, 3), 5);
/// assert_eq!(cm.get(3, 1), 1);
/// assert_eq!(cm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix<C> {
    data: Vec<C>,
    size: usize,
    kind: ProblemKind,
}

impl<C: Cost> CostMatrix<C> {
    /// Creates a cost matrix of the given size, initialized to `C::default()`.
    pub fn new(size: usize, kind: ProblemKind) -> Self
    where
        C: Default,
    {
        Self {
            data: vec![C::default(); size * size],
            size,
            kind,
        }
    }

    /// Tabulates the costs of `oracle` over every ordered pair of `points`.
    ///
    /// The matrix takes the oracle's problem kind. Points must carry ids
    /// `1..=points.len()`.
    pub fn tabulate<O>(points: &[Point], oracle: &O) -> Self
    where
        O: DistanceOracle<Cost = C> + ?Sized,
    {
        let size = points.len();
        let mut data = Vec::with_capacity(size * size);
        for from in points {
            for to in points {
                data.push(oracle.cost(from, to));
            }
        }
        Self {
            data,
            size,
            kind: oracle.kind(),
        }
    }

    /// Creates a cost matrix from an explicit row-major n×n grid.
    ///
    /// Fails if the data length doesn't match `size * size`, or if `kind` is
    /// symmetric and the grid is not.
    pub fn from_data(size: usize, data: Vec<C>, kind: ProblemKind) -> Result<Self, ModelError> {
        if data.len() != size * size {
            return Err(ModelError::TableSize {
                size,
                len: data.len(),
            });
        }
        let cm = Self { data, size, kind };
        if kind.is_symmetric() {
            cm.check_symmetric()?;
        }
        Ok(cm)
    }

    /// Creates a cost matrix from one row of outgoing costs per point.
    pub fn from_rows(rows: Vec<Vec<C>>, kind: ProblemKind) -> Result<Self, ModelError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(ModelError::RaggedRow {
                    row: i + 1,
                    len: row.len(),
                    size,
                });
            }
            data.extend(row);
        }
        Self::from_data(size, data, kind)
    }

    /// Returns the cost from point `from` to point `to` (1-based ids).
    ///
    /// # Panics
    ///
    /// Panics if either id is 0 or greater than [`size`](Self::size).
    pub fn get(&self, from: usize, to: usize) -> C {
        self.data[self.index(from, to)]
    }

    /// Sets the cost from point `from` to point `to` (1-based ids).
    pub fn set(&mut self, from: usize, to: usize, cost: C) {
        let idx = self.index(from, to);
        self.data[idx] = cost;
    }

    /// Number of points in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether this table describes a symmetric or a directed instance.
    pub fn kind(&self) -> ProblemKind {
        self.kind
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        self.check_symmetric().is_ok()
    }

    fn check_symmetric(&self) -> Result<(), ModelError> {
        for i in 1..=self.size {
            for j in (i + 1)..=self.size {
                if self.get(i, j) != self.get(j, i) {
                    return Err(ModelError::AsymmetricTable { from: i, to: j });
                }
            }
        }
        Ok(())
    }

    fn index(&self, from: usize, to: usize) -> usize {
        assert!(
            (1..=self.size).contains(&from) && (1..=self.size).contains(&to),
            "point id out of range: ({from}, {to}) for size {}",
            self.size
        );
        (from - 1) * self.size + (to - 1)
    }
}

impl<C: Cost> DistanceOracle for CostMatrix<C> {
    type Cost = C;

    fn cost(&self, from: &Point, to: &Point) -> C {
        self.get(from.id(), to.id())
    }

    fn kind(&self) -> ProblemKind {
        self.kind
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.size)
    }
}
