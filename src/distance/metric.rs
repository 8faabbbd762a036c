//! Coordinate metrics.
//!
//! Integer-valued metrics follow the TSPLIB definitions, where `nint`
//! rounds half up.

use serde::{Deserialize, Serialize};

use super::DistanceOracle;
use crate::models::{Point, ProblemKind};

// TSPLIB truncates pi for GEO instances.
#[allow(clippy::approx_constant)]
const GEO_PI: f64 = 3.141592;
const EARTH_RADIUS: f64 = 6378.388;

/// TSPLIB coordinate metrics with integer costs.
///
/// # Examples
///
/// ```
/// use u_bottleneck::distance::{DistanceOracle, TsplibMetric};
/// use u_bottleneck::models::Point;
///
/// let a = Point::new(1, 0.0, 0.0);
/// let b = Point::new(2, 3.0, 4.2);
/// assert_eq!(TsplibMetric::Euc2d.cost(&a, &b), 5);
/// assert_eq!(TsplibMetric::Ceil2d.cost(&a, &b), 6);
/// assert_eq!(TsplibMetric::Man2d.cost(&a, &b), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TsplibMetric {
    /// Euclidean distance rounded to the nearest integer.
    #[serde(rename = "EUC_2D")]
    Euc2d,
    /// Euclidean distance rounded up.
    #[serde(rename = "CEIL_2D")]
    Ceil2d,
    /// Manhattan distance rounded to the nearest integer.
    #[serde(rename = "MAN_2D")]
    Man2d,
    /// Maximum of the rounded axis distances.
    #[serde(rename = "MAX_2D")]
    Max2d,
    /// Pseudo-Euclidean distance (att48, att532).
    #[serde(rename = "ATT")]
    Att,
    /// Great-circle distance in km; coordinates are `DDD.MM` latitude (x)
    /// and longitude (y).
    #[serde(rename = "GEO")]
    Geo,
}

fn nint(v: f64) -> i64 {
    (v + 0.5) as i64
}

fn geo_radians(v: f64) -> f64 {
    let deg = v.trunc();
    let min = v - deg;
    GEO_PI * (deg + 5.0 * min / 3.0) / 180.0
}

impl TsplibMetric {
    /// Computes the metric between two points.
    pub fn distance(self, a: &Point, b: &Point) -> i64 {
        let (dx, dy) = a.delta(b);
        match self {
            Self::Euc2d => nint((dx * dx + dy * dy).sqrt()),
            Self::Ceil2d => (dx * dx + dy * dy).sqrt().ceil() as i64,
            Self::Man2d => nint(dx.abs() + dy.abs()),
            Self::Max2d => nint(dx.abs()).max(nint(dy.abs())),
            Self::Att => {
                let r = ((dx * dx + dy * dy) / 10.0).sqrt();
                let t = nint(r);
                if (t as f64) < r {
                    t + 1
                } else {
                    t
                }
            }
            Self::Geo => {
                let (lat_a, lon_a) = (geo_radians(a.x()), geo_radians(a.y()));
                let (lat_b, lon_b) = (geo_radians(b.x()), geo_radians(b.y()));
                let q1 = (lon_a - lon_b).cos();
                let q2 = (lat_a - lat_b).cos();
                let q3 = (lat_a + lat_b).cos();
                let arc = (0.5 * ((1.0 + q1) * q2 - (1.0 - q1) * q3)).clamp(-1.0, 1.0);
                (EARTH_RADIUS * arc.acos() + 1.0) as i64
            }
        }
    }
}

impl DistanceOracle for TsplibMetric {
    type Cost = i64;

    fn cost(&self, from: &Point, to: &Point) -> i64 {
        self.distance(from, to)
    }

    fn kind(&self) -> ProblemKind {
        ProblemKind::Symmetric
    }
}

/// Unrounded Euclidean distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceOracle for Euclidean {
    type Cost = f64;

    fn cost(&self, from: &Point, to: &Point) -> f64 {
        let (dx, dy) = from.delta(to);
        (dx * dx + dy * dy).sqrt()
    }

    fn kind(&self) -> ProblemKind {
        ProblemKind::Symmetric
    }
}
