//! # Cycling detection
//!
//! Degenerate pivots can bring the simplex method back to a basis it has visited before. The guard
//! counts how often each index was pivoted on and gives up once the counts suggest the method is
//! going around in circles.
//!
//! This is a heuristic: a problem that needs many pivots on few indices can be mistaken for a
//! cycling one.

/// Counts pivots per watched index.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CyclingGuard {
    nr_watched: usize,
    threshold: usize,
    counts: Vec<usize>,
    /// Number of indices whose count reached the threshold.
    reached: usize,
    max_count: usize,
}

impl CyclingGuard {
    /// Create a new guard.
    ///
    /// # Arguments
    ///
    /// * `nr_watched`: Number of indices that can be pivoted on, half of which reaching the
    /// threshold trips the guard.
    /// * `threshold`: Number of pivots on a single index from which it counts as repeating.
    pub fn new(nr_watched: usize, threshold: usize) -> Self {
        Self {
            nr_watched,
            threshold: threshold.max(1),
            counts: vec![0; nr_watched],
            reached: 0,
            max_count: 0,
        }
    }

    /// Register a pivot on an index.
    ///
    /// # Return value
    ///
    /// `true` if the method should be considered to be cycling.
    pub fn record(&mut self, index: usize) -> bool {
        if index >= self.counts.len() {
            self.counts.resize(index + 1, 0);
        }

        self.counts[index] += 1;
        let count = self.counts[index];
        if count == self.threshold {
            self.reached += 1;
        }
        self.max_count = self.max_count.max(count);

        self.reached >= (self.nr_watched / 2).max(1) || self.max_count >= 10 * self.threshold
    }

    /// Forget all pivots registered so far.
    pub fn reset(&mut self) {
        self.counts.iter_mut().for_each(|count| *count = 0);
        self.reached = 0;
        self.max_count = 0;
    }
}
