use crate::data_types::StatHandle;
use crate::error::FrameStatError;
use gpui::Hsla;
use tracing::{debug, warn};

/// Maximum number of series one panel can graph.
pub const STAT_CAPACITY: usize = 30;

/// A registered series. `rank` fixes both the legend position and the stacking order.
#[derive(Clone, Debug)]
pub struct SeriesSlot {
    pub handle: StatHandle,
    pub label: String,
    pub color: Hsla,
    pub rank: usize,
}

/// Append-only, bounded list of series in insertion order.
#[derive(Clone, Debug)]
pub struct StatRegistry {
    slots: Vec<SeriesSlot>,
    capacity: usize,
}

impl Default for StatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StatRegistry {
    pub fn new() -> Self {
        Self::with_capacity(STAT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Registers a series at the next free rank and returns that rank.
    ///
    /// A full registry rejects the call and leaves existing slots untouched.
    pub fn add_stat(
        &mut self,
        handle: StatHandle,
        label: impl Into<String>,
        color: Hsla,
    ) -> Result<usize, FrameStatError> {
        let label = label.into();
        if self.is_full() {
            warn!(capacity = self.capacity, label = %label, "stat registry full, series rejected");
            return Err(FrameStatError::CapacityExceeded {
                capacity: self.capacity,
                label,
            });
        }

        let rank = self.slots.len();
        debug!(rank, label = %label, "registered stat series");
        self.slots.push(SeriesSlot {
            handle,
            label,
            color,
            rank,
        });
        Ok(rank)
    }

    pub fn slots(&self) -> &[SeriesSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }
}
