//! Per-call visited markers.

/// Visited flags for points `1..=N`, scoped to one traversal.
///
/// A scan resets every flag before it starts and leaves them all set when it
/// returns. Reusing one buffer across calls avoids reallocating it.
///
/// # Examples
///
/// ```
/// use u_bottleneck::models::VisitMarks;
///
/// let mut marks = VisitMarks::new(3);
/// marks.mark(2);
/// assert!(marks.is_visited(2));
/// assert!(!marks.all_visited());
///
/// marks.reset(3);
/// assert_eq!(marks.visited_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitMarks {
    flags: Vec<bool>,
}

impl VisitMarks {
    /// Creates `n` unvisited markers.
    pub fn new(n: usize) -> Self {
        Self {
            flags: vec![false; n],
        }
    }

    /// Resizes to `n` markers and clears all of them.
    pub fn reset(&mut self, n: usize) {
        self.flags.clear();
        self.flags.resize(n, false);
    }

    /// Marks the point with the given id as visited.
    ///
    /// # Panics
    ///
    /// Panics if `id` is 0 or greater than [`len`](Self::len).
    pub fn mark(&mut self, id: usize) {
        self.flags[id - 1] = true;
    }

    /// Returns `true` if the point with the given id has been visited.
    ///
    /// # Panics
    ///
    /// Panics if `id` is 0 or greater than [`len`](Self::len).
    pub fn is_visited(&self, id: usize) -> bool {
        self.flags[id - 1]
    }

    /// Number of markers.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if there are no markers.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Number of markers currently set.
    pub fn visited_count(&self) -> usize {
        self.flags.iter().filter(|&&v| v).count()
    }

    /// Returns `true` if every marker is set.
    pub fn all_visited(&self) -> bool {
        self.flags.iter().all(|&v| v)
    }
}
