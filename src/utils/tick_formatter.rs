use chrono::{TimeZone, Utc};

/// Values above this are treated as unix timestamps rather than session seconds.
const EPOCH_THRESHOLD: f64 = 100_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    Seconds { decimals: usize },
    HourMin,    // 10:30
    HourMinSec, // 10:30:15
}

/// Picks a label format from the tick spacing and the magnitude of the values (both in seconds).
pub fn determine_tick_format(tick_spacing: f64, sample_value: f64) -> TickFormat {
    if sample_value.abs() > EPOCH_THRESHOLD {
        return if tick_spacing >= 60.0 {
            TickFormat::HourMin
        } else {
            TickFormat::HourMinSec
        };
    }

    let decimals = if !tick_spacing.is_finite() || tick_spacing <= 0.0 || tick_spacing >= 1.0 {
        0
    } else if tick_spacing >= 0.1 {
        1
    } else if tick_spacing >= 0.01 {
        2
    } else {
        3
    };
    TickFormat::Seconds { decimals }
}

/// Formats a tick time (seconds) according to the given format.
pub fn format_tick(value: f64, format: TickFormat) -> String {
    match format {
        TickFormat::Seconds { decimals } => format!("{:.*}s", decimals, value),
        TickFormat::HourMin | TickFormat::HourMinSec => {
            let dt = match Utc.timestamp_opt(value as i64, 0) {
                chrono::LocalResult::Single(d) => d,
                chrono::LocalResult::Ambiguous(d, _) => d,
                chrono::LocalResult::None => return format!("{:.0}s", value),
            };
            if format == TickFormat::HourMin {
                dt.format("%H:%M").to_string()
            } else {
                dt.format("%H:%M:%S").to_string()
            }
        }
    }
}
