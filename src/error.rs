use thiserror::Error;

/// Failures surfaced by the stat registry.
///
/// Everything else the panel runs into (empty windows, zero sums, dropped
/// sources) degrades the rendered output instead of producing an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameStatError {
    #[error("stat registry is full ({capacity} series), cannot add '{label}'")]
    CapacityExceeded { capacity: usize, label: String },
}
