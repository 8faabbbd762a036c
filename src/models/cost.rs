//! Ordered numeric cost values.

use std::fmt::Debug;

/// A non-negative, ordered edge cost.
///
/// Integer costs follow the TSPLIB convention of rounded distances.
/// Floating-point costs are compared with `PartialOrd`, so NaN never wins a
/// strict comparison.
pub trait Cost: Copy + PartialOrd + Debug + Send + Sync + 'static {}

impl Cost for i32 {}
impl Cost for i64 {}
impl Cost for u32 {}
impl Cost for u64 {}
impl Cost for f32 {}
impl Cost for f64 {}
