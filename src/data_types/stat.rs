use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::{Arc, Weak};

/// One recorded value of a statistic. `time` is in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct StatSample {
    pub time: f64,
    pub value: f64,
}

impl StatSample {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Read-only view of a time-ordered sample history owned by someone else.
pub trait StatSource: Send + Sync {
    /// First and last timestamps, if any samples exist.
    fn time_bounds(&self) -> Option<(f64, f64)>;

    /// Iterate over samples with `t_min <= time <= t_max`, oldest first.
    fn iter_range(&self, t_min: f64, t_max: f64) -> Box<dyn Iterator<Item = StatSample> + '_>;

    /// Typical spacing between consecutive samples.
    fn sample_interval(&self) -> Option<f64>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ring-buffered sample history with a fixed capacity.
///
/// Pushing into a full history evicts the oldest sample. Samples older than
/// the newest one are rejected so the buffer stays sorted by time.
#[derive(Clone, Debug)]
pub struct StatHistory {
    samples: VecDeque<StatSample>,
    capacity: usize,
}

impl StatHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a sample. Returns false if it was rejected (out of order or not finite).
    pub fn push(&mut self, time: f64, value: f64) -> bool {
        if !time.is_finite() {
            return false;
        }
        if let Some(last) = self.samples.back() {
            if time < last.time {
                tracing::trace!(time, last = last.time, "rejecting out-of-order stat sample");
                return false;
            }
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(StatSample::new(time, value));
        true
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn latest(&self) -> Option<StatSample> {
        self.samples.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatSample> {
        self.samples.iter()
    }
}

impl StatSource for StatHistory {
    fn time_bounds(&self) -> Option<(f64, f64)> {
        match (self.samples.front(), self.samples.back()) {
            (Some(first), Some(last)) => Some((first.time, last.time)),
            _ => None,
        }
    }

    fn iter_range(&self, t_min: f64, t_max: f64) -> Box<dyn Iterator<Item = StatSample> + '_> {
        let start = self.samples.partition_point(|s| s.time < t_min);
        let end = self.samples.partition_point(|s| s.time <= t_max);
        if start >= end {
            return Box::new(std::iter::empty());
        }
        Box::new(self.samples.range(start..end).copied())
    }

    fn sample_interval(&self) -> Option<f64> {
        let (first, last) = self.time_bounds()?;
        if self.samples.len() < 2 {
            return None;
        }
        let interval = (last - first) / (self.samples.len() - 1) as f64;
        (interval > f64::EPSILON).then_some(interval)
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

/// Shared, lockable stat source as owned by the producer side.
pub type SharedStat = Arc<RwLock<dyn StatSource>>;

/// Non-owning reference to a stat source.
///
/// The panel reads through it at draw time and never keeps the source alive;
/// once the producer drops its `Arc`, the handle simply stops yielding data.
#[derive(Clone)]
pub struct StatHandle {
    source: Weak<RwLock<dyn StatSource>>,
}

impl StatHandle {
    pub fn new<S: StatSource + 'static>(source: &Arc<RwLock<S>>) -> Self {
        let shared: SharedStat = source.clone();
        Self {
            source: Arc::downgrade(&shared),
        }
    }

    /// Returns the source if it is still alive.
    pub fn upgrade(&self) -> Option<SharedStat> {
        self.source.upgrade()
    }

    pub fn is_alive(&self) -> bool {
        self.source.strong_count() > 0
    }
}

impl std::fmt::Debug for StatHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}
