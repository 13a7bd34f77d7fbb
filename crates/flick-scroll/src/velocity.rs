//! Release velocity estimation.

use std::collections::VecDeque;

/// One drag move: how far the pointer went and how long it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSample {
    pub displacement: f64,
    pub elapsed_ms: f64,
}

/// Rolling window over the most recent drag moves.
///
/// The estimate is the average velocity across the window, not the last
/// instantaneous derivative, so jitter is smoothed out at the cost of some
/// lag on sharp reversals.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityTracker {
    samples: VecDeque<MoveSample>,
    capacity: usize,
}

impl VelocityTracker {
    /// Tracker keeping at most `capacity` samples (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a move, dropping the oldest one when full.
    pub fn push(&mut self, displacement: f64, elapsed_ms: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(MoveSample {
            displacement,
            elapsed_ms,
        });
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &MoveSample> {
        self.samples.iter()
    }

    /// Average velocity over the window in units per second.
    ///
    /// Zero when there are no samples or no time has elapsed.
    pub fn estimate(&self) -> f64 {
        let (distance, elapsed) = self
            .samples
            .iter()
            .fold((0.0, 0.0), |(d, t), s| (d + s.displacement, t + s.elapsed_ms));
        if elapsed > 0.0 {
            distance / elapsed * 1000.0
        } else {
            0.0
        }
    }
}
