//! Nearest-neighbor bottleneck scan.
//!
//! Runs one greedy nearest-neighbor traversal from a start point, closes it
//! back to the start, and reports the longest edge used. The tour is not
//! stored; only the running maximum is kept.
//!
//! # Complexity
//!
//! O(n²) time, O(n) space for the visited markers.
//!
//! # Reference
//!
//! Used by LKH-style solvers as a cheap bound on the longest edge a naive
//! construction is forced to take.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceOracle;
use crate::error::ScanError;
use crate::models::{Cost, Point, VisitMarks};

/// Options for a bottleneck scan.
///
/// # Examples
///
/// ```
/// use u_bottleneck::constructive::ScanOptions;
///
/// assert_eq!(ScanOptions::default().start_id, 1);
/// let opts = ScanOptions::from_json(r#"{"start_id": 3}"#).unwrap();
/// assert_eq!(opts.start_id, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Id of the point the traversal starts from and returns to.
    pub start_id: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { start_id: 1 }
    }
}

impl ScanOptions {
    /// Options starting from the given point id.
    pub fn starting_at(start_id: usize) -> Self {
        Self { start_id }
    }

    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ScanError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The longest edge of a greedy nearest-neighbor traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BottleneckEdge<C> {
    /// Id of the point the edge leaves.
    pub from: usize,
    /// Id of the point the edge enters.
    pub to: usize,
    /// Edge cost.
    pub cost: C,
    /// `true` if this is the edge closing the traversal back to the start.
    pub closing: bool,
}

/// Computes the bottleneck edge length of a greedy nearest-neighbor tour
/// starting at point 1.
///
/// Allocates its own visited markers. See [`bottleneck_edge`] for the
/// traversal rules.
///
/// # Examples
///
/// ```
/// use u_bottleneck::constructive::bottleneck_nearest_neighbor;
/// use u_bottleneck::distance::FnOracle;
/// use u_bottleneck::models::Point;
///
/// let points = Point::from_coords(&[(0.0, 0.0), (1.0, 0.0), (3.0, 0.0), (6.0, 0.0)]);
/// let line = FnOracle::symmetric(|a: &Point, b: &Point| (a.x() - b.x()).abs());
///
/// // steps 1, 2, 3 then the closing edge 6
/// assert_eq!(bottleneck_nearest_neighbor(&points, &line).unwrap(), 6.0);
/// ```
pub fn bottleneck_nearest_neighbor<O>(points: &[Point], oracle: &O) -> Result<O::Cost, ScanError>
where
    O: DistanceOracle + ?Sized,
{
    let mut marks = VisitMarks::default();
    bottleneck_nearest_neighbor_with_marks(points, oracle, &mut marks)
}

/// Same as [`bottleneck_nearest_neighbor`], using caller-supplied markers.
///
/// `marks` is resized and reset before the scan and has every point marked
/// visited afterwards.
pub fn bottleneck_nearest_neighbor_with_marks<O>(
    points: &[Point],
    oracle: &O,
    marks: &mut VisitMarks,
) -> Result<O::Cost, ScanError>
where
    O: DistanceOracle + ?Sized,
{
    bottleneck_edge(points, oracle, &ScanOptions::default(), marks).map(|edge| edge.cost)
}

/// Runs the greedy nearest-neighbor traversal and returns its longest edge.
///
/// From the start point, repeatedly moves to the unvisited point with the
/// smallest cost from the current point, then closes back to the start.
/// Candidates are scanned in ascending id order with a strict `<`, so the
/// lowest id wins ties. The result is the costliest of the n−1 greedy steps
/// and the closing edge; among equal costs the earliest edge is kept.
///
/// A single point yields its closing edge `cost(start, start)`.
///
/// # Arguments
///
/// * `points` — Point `i + 1` at position `i`
/// * `oracle` — Cost function, symmetric or directed
/// * `options` — Start point
/// * `marks` — Visited markers, reset on entry and all set on return
///
/// # Errors
///
/// Returns a [`ScanError`] if the point set is empty, ids are not `1..=n` in
/// order, the start id is out of range, or the oracle covers fewer points
/// than given.
///
/// # Examples
///
/// ```
/// use u_bottleneck::constructive::{bottleneck_edge, ScanOptions};
/// use u_bottleneck::distance::CostMatrix;
/// use u_bottleneck::models::{Point, ProblemKind, VisitMarks};
///
/// let costs = CostMatrix::from_rows(
///     vec![vec![0, 1, 5], vec![9, 0, 1], vec![1, 1, 0]],
///     ProblemKind::Asymmetric,
/// )
/// .unwrap();
/// let points = Point::sequence(3);
/// let mut marks = VisitMarks::default();
///
/// let edge = bottleneck_edge(&points, &costs, &ScanOptions::default(), &mut marks).unwrap();
/// assert_eq!(edge.cost, 1);
/// assert_eq!((edge.from, edge.to), (1, 2));
/// assert!(marks.all_visited());
/// ```
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(n = points.len(), start = options.start_id, kind = ?oracle.kind())
)]
pub fn bottleneck_edge<O>(
    points: &[Point],
    oracle: &O,
    options: &ScanOptions,
    marks: &mut VisitMarks,
) -> Result<BottleneckEdge<O::Cost>, ScanError>
where
    O: DistanceOracle + ?Sized,
{
    check_inputs(points, oracle, options)?;

    let n = points.len();
    let start = &points[options.start_id - 1];
    marks.reset(n);
    marks.mark(start.id());

    let mut current = start;
    let mut worst: Option<BottleneckEdge<O::Cost>> = None;

    for _ in 1..n {
        let mut nearest: Option<(&Point, O::Cost)> = None;
        for candidate in points {
            if marks.is_visited(candidate.id()) {
                continue;
            }
            let d = oracle.cost(current, candidate);
            let closer = match nearest {
                Some((_, min)) => d < min,
                None => true,
            };
            if closer {
                nearest = Some((candidate, d));
            }
        }

        let Some((next, d)) = nearest else {
            break;
        };
        tracing::trace!(from = current.id(), to = next.id(), cost = ?d, "greedy step");
        marks.mark(next.id());
        worst = Some(heavier(
            worst,
            BottleneckEdge {
                from: current.id(),
                to: next.id(),
                cost: d,
                closing: false,
            },
        ));
        current = next;
    }

    let closing = BottleneckEdge {
        from: current.id(),
        to: start.id(),
        cost: oracle.cost(current, start),
        closing: true,
    };
    let bottleneck = heavier(worst, closing);

    tracing::debug!(
        from = bottleneck.from,
        to = bottleneck.to,
        cost = ?bottleneck.cost,
        closing = bottleneck.closing,
        "bottleneck edge"
    );
    Ok(bottleneck)
}

/// Keeps `current` unless `edge` is strictly costlier.
fn heavier<C: Cost>(
    current: Option<BottleneckEdge<C>>,
    edge: BottleneckEdge<C>,
) -> BottleneckEdge<C> {
    match current {
        Some(cur) if edge.cost > cur.cost => edge,
        Some(cur) => cur,
        None => edge,
    }
}

fn check_inputs<O>(points: &[Point], oracle: &O, options: &ScanOptions) -> Result<(), ScanError>
where
    O: DistanceOracle + ?Sized,
{
    let len = points.len();
    if len == 0 {
        return Err(ScanError::EmptyPointSet);
    }
    if let Some((position, p)) = points
        .iter()
        .enumerate()
        .find(|(i, p)| p.id() != i + 1)
    {
        return Err(ScanError::NonContiguousId {
            position,
            id: p.id(),
        });
    }
    if !(1..=len).contains(&options.start_id) {
        return Err(ScanError::StartOutOfRange {
            start_id: options.start_id,
            len,
        });
    }
    if let Some(dimension) = oracle.dimension() {
        if dimension < len {
            return Err(ScanError::OracleTooSmall { dimension, len });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{CostMatrix, CostModel, Euclidean, FnOracle, TsplibMetric};
    use crate::models::ProblemKind;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn line_points(xs: &[f64]) -> Vec<Point> {
        let coords: Vec<(f64, f64)> = xs.iter().map(|&x| (x, 0.0)).collect();
        Point::from_coords(&coords)
    }

    fn atsp_sample() -> CostMatrix<i64> {
        CostMatrix::from_rows(
            vec![vec![0, 1, 5], vec![9, 0, 1], vec![1, 1, 0]],
            ProblemKind::Asymmetric,
        )
        .expect("valid")
    }

    /// Builds the greedy path explicitly and returns the max over its edges.
    fn reference_bottleneck<O: DistanceOracle>(points: &[Point], oracle: &O) -> O::Cost {
        let mut remaining: Vec<&Point> = points.iter().skip(1).collect();
        let mut edges = Vec::with_capacity(points.len());
        let mut current = &points[0];
        while !remaining.is_empty() {
            let mut best = 0;
            for (i, p) in remaining.iter().enumerate() {
                if oracle.cost(current, p) < oracle.cost(current, remaining[best]) {
                    best = i;
                }
            }
            let next = remaining.remove(best);
            edges.push(oracle.cost(current, next));
            current = next;
        }
        edges.push(oracle.cost(current, &points[0]));
        assert_eq!(edges.len(), points.len());
        edges
            .into_iter()
            .reduce(|a, b| if b > a { b } else { a })
            .expect("at least one edge")
    }

    #[test]
    fn test_line_scenario() {
        let points = line_points(&[0.0, 1.0, 3.0, 6.0]);
        let result = bottleneck_nearest_neighbor(&points, &TsplibMetric::Euc2d).expect("valid");
        assert_eq!(result, 6);

        let mut marks = VisitMarks::default();
        let edge = bottleneck_edge(&points, &TsplibMetric::Euc2d, &ScanOptions::default(), &mut marks)
            .expect("valid");
        assert_eq!((edge.from, edge.to), (4, 1));
        assert!(edge.closing);
    }

    #[test]
    fn test_atsp_scenario() {
        let costs = atsp_sample();
        let points = Point::sequence(3);
        assert_eq!(bottleneck_nearest_neighbor(&points, &costs).expect("valid"), 1);

        // All three edges cost 1; the first step is kept.
        let mut marks = VisitMarks::default();
        let edge = bottleneck_edge(&points, &costs, &ScanOptions::default(), &mut marks)
            .expect("valid");
        assert_eq!((edge.from, edge.to, edge.closing), (1, 2, false));
    }

    #[test]
    fn test_cost_model_strategies_agree_with_direct_oracles() {
        let points = line_points(&[0.0, 1.0, 3.0, 6.0]);
        let model = CostModel::from(TsplibMetric::Euc2d);
        assert_eq!(bottleneck_nearest_neighbor(&points, &model).expect("valid"), 6);

        let model = CostModel::from(atsp_sample());
        assert_eq!(bottleneck_nearest_neighbor(&Point::sequence(3), &model).expect("valid"), 1);
    }

    #[test]
    fn test_two_points_symmetric() {
        let points = Point::from_coords(&[(0.0, 0.0), (3.0, 4.0)]);
        let result = bottleneck_nearest_neighbor(&points, &Euclidean).expect("valid");
        assert!((result - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_two_points_asymmetric_takes_larger_direction() {
        let points = Point::sequence(2);
        let costs = CostMatrix::from_rows(vec![vec![0, 4], vec![11, 0]], ProblemKind::Asymmetric)
            .expect("valid");
        assert_eq!(bottleneck_nearest_neighbor(&points, &costs).expect("valid"), 11);

        let costs = CostMatrix::from_rows(vec![vec![0, 11], vec![4, 0]], ProblemKind::Asymmetric)
            .expect("valid");
        assert_eq!(bottleneck_nearest_neighbor(&points, &costs).expect("valid"), 11);
    }

    #[test]
    fn test_single_point_is_closing_self_edge() {
        let points = Point::sequence(1);
        let costs = CostMatrix::from_rows(vec![vec![7]], ProblemKind::Asymmetric).expect("valid");
        let mut marks = VisitMarks::default();
        let edge = bottleneck_edge(&points, &costs, &ScanOptions::default(), &mut marks)
            .expect("valid");
        assert_eq!(edge.cost, 7);
        assert!(edge.closing);
        assert!(marks.all_visited());
    }

    #[test]
    fn test_ties_prefer_lower_id() {
        // From x=0, ids 2 (x=2) and 3 (x=-2) are equidistant. Taking id 2
        // first forces the 3 -> 4 edge of length 12; taking id 3 first would
        // cap the bound at 10.
        let points = line_points(&[0.0, 2.0, -2.0, 10.0]);
        let mut marks = VisitMarks::default();
        let edge = bottleneck_edge(&points, &TsplibMetric::Euc2d, &ScanOptions::default(), &mut marks)
            .expect("valid");
        assert_eq!(edge.cost, 12);
        assert_eq!((edge.from, edge.to), (3, 4));
    }

    #[test]
    fn test_all_points_end_visited() {
        let points = line_points(&[0.0, 1.0, 3.0, 6.0, 10.0]);
        let mut marks = VisitMarks::default();
        bottleneck_nearest_neighbor_with_marks(&points, &TsplibMetric::Euc2d, &mut marks)
            .expect("valid");
        assert_eq!(marks.len(), 5);
        assert!(marks.all_visited());
    }

    #[test]
    fn test_stale_marks_are_reset() {
        let points = line_points(&[0.0, 1.0, 3.0, 6.0]);
        let mut marks = VisitMarks::new(9);
        for id in 1..=9 {
            marks.mark(id);
        }
        let result = bottleneck_nearest_neighbor_with_marks(&points, &TsplibMetric::Euc2d, &mut marks)
            .expect("valid");
        assert_eq!(result, 6);
        assert_eq!(marks.len(), 4);
        assert!(marks.all_visited());
    }

    #[test]
    fn test_repeated_calls_share_marks() {
        let points = line_points(&[0.0, 1.0, 3.0, 6.0]);
        let mut marks = VisitMarks::default();
        let first = bottleneck_nearest_neighbor_with_marks(&points, &TsplibMetric::Euc2d, &mut marks)
            .expect("valid");
        let second = bottleneck_nearest_neighbor_with_marks(&points, &TsplibMetric::Euc2d, &mut marks)
            .expect("valid");
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_start() {
        // From x=1: 0 (1), 3 (3), 6 (3), then back to 1 (5).
        let points = line_points(&[0.0, 1.0, 3.0, 6.0]);
        let mut marks = VisitMarks::default();
        let edge = bottleneck_edge(
            &points,
            &TsplibMetric::Euc2d,
            &ScanOptions::starting_at(2),
            &mut marks,
        )
        .expect("valid");
        assert_eq!(edge.cost, 5);
        assert_eq!((edge.from, edge.to, edge.closing), (4, 2, true));
    }

    #[test]
    fn test_empty_point_set() {
        let err = bottleneck_nearest_neighbor(&[], &Euclidean).unwrap_err();
        assert!(matches!(err, ScanError::EmptyPointSet));
    }

    #[test]
    fn test_non_contiguous_ids() {
        let points = vec![Point::new(1, 0.0, 0.0), Point::new(3, 1.0, 0.0)];
        let err = bottleneck_nearest_neighbor(&points, &Euclidean).unwrap_err();
        assert!(matches!(
            err,
            ScanError::NonContiguousId { position: 1, id: 3 }
        ));
        assert_eq!(
            err.to_string(),
            "point at position 1 has id 3, expected 2"
        );
    }

    #[test]
    fn test_start_out_of_range() {
        let points = Point::sequence(3);
        let mut marks = VisitMarks::default();
        for start_id in [0, 4] {
            let err = bottleneck_edge(
                &points,
                &atsp_sample(),
                &ScanOptions::starting_at(start_id),
                &mut marks,
            )
            .unwrap_err();
            assert!(matches!(err, ScanError::StartOutOfRange { len: 3, .. }));
        }
    }

    #[test]
    fn test_oracle_too_small() {
        let points = Point::sequence(4);
        let err = bottleneck_nearest_neighbor(&points, &atsp_sample()).unwrap_err();
        assert!(matches!(
            err,
            ScanError::OracleTooSmall {
                dimension: 3,
                len: 4
            }
        ));
    }

    #[test]
    fn test_options_json() {
        assert_eq!(ScanOptions::from_json("{}").expect("valid"), ScanOptions::default());
        let err = ScanOptions::from_json(r#"{"start_id": "one"}"#).unwrap_err();
        assert!(matches!(err, ScanError::InvalidOptions(_)));
    }

    #[test]
    fn test_fn_oracle_float_costs() {
        let points = line_points(&[0.0, 0.5, 2.0]);
        let line = FnOracle::symmetric(|a: &Point, b: &Point| (a.x() - b.x()).abs());
        let result = bottleneck_nearest_neighbor(&points, &line).expect("valid");
        assert!((result - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_random_instance_deterministic() {
        let mut rng = StdRng::seed_from_u64(42);
        let coords: Vec<(f64, f64)> = (0..60)
            .map(|_| (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
            .collect();
        let points = Point::from_coords(&coords);
        let oracle = TsplibMetric::Euc2d;

        let first = bottleneck_nearest_neighbor(&points, &oracle).expect("valid");
        let second = bottleneck_nearest_neighbor(&points, &oracle).expect("valid");
        assert_eq!(first, second);
        assert_eq!(first, reference_bottleneck(&points, &oracle));
    }

    #[test]
    fn test_tabulated_matrix_matches_metric() {
        let mut rng = StdRng::seed_from_u64(7);
        let coords: Vec<(f64, f64)> = (0..25)
            .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        let points = Point::from_coords(&coords);
        let table = CostMatrix::tabulate(&points, &TsplibMetric::Ceil2d);
        assert_eq!(
            bottleneck_nearest_neighbor(&points, &table).expect("valid"),
            bottleneck_nearest_neighbor(&points, &TsplibMetric::Ceil2d).expect("valid"),
        );
    }

    proptest! {
        #[test]
        fn prop_matches_explicit_greedy_path(
            coords in prop::collection::vec((0i32..500, 0i32..500), 2..40)
        ) {
            let coords: Vec<(f64, f64)> = coords
                .into_iter()
                .map(|(x, y)| (f64::from(x), f64::from(y)))
                .collect();
            let points = Point::from_coords(&coords);
            let mut marks = VisitMarks::default();
            let result =
                bottleneck_nearest_neighbor_with_marks(&points, &TsplibMetric::Euc2d, &mut marks)
                    .expect("valid");
            prop_assert_eq!(result, reference_bottleneck(&points, &TsplibMetric::Euc2d));
            prop_assert!(marks.all_visited());
        }

        #[test]
        fn prop_atsp_matches_explicit_greedy_path(
            (n, data) in (2usize..12).prop_flat_map(|n| {
                (Just(n), prop::collection::vec(0i64..50, n * n))
            })
        ) {
            let costs = CostMatrix::from_data(n, data, ProblemKind::Asymmetric).expect("valid");
            let points = Point::sequence(n);
            let result = bottleneck_nearest_neighbor(&points, &costs).expect("valid");
            prop_assert_eq!(result, reference_bottleneck(&points, &costs));
        }

        #[test]
        fn prop_two_points_equal_single_edge(x in 0i32..1000, y in 0i32..1000) {
            let points = Point::from_coords(&[(0.0, 0.0), (f64::from(x), f64::from(y))]);
            let result = bottleneck_nearest_neighbor(&points, &TsplibMetric::Euc2d).expect("valid");
            prop_assert_eq!(result, TsplibMetric::Euc2d.distance(&points[0], &points[1]));
        }
    }
}
