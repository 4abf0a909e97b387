//! Column alignment, percent normalization and stacking of series values.

use crate::data_types::StatSample;

/// Negative and non-finite samples contribute nothing to a stack.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Divides each value by the column sum.
///
/// A column that sums to zero yields zero for every series instead of dividing by zero.
pub fn normalize_percent(values: &[f64]) -> Vec<f64> {
    let cleaned: Vec<f64> = values.iter().map(|v| sanitize(*v)).collect();
    let sum: f64 = cleaned.iter().sum();
    if !(sum.is_finite() && sum > 0.0) {
        return vec![0.0; cleaned.len()];
    }
    cleaned.into_iter().map(|v| v / sum).collect()
}

/// One series evaluated on the shared column timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedSeries {
    /// Displayed value per column; `None` before the series' first sample in the window.
    pub values: Vec<Option<f64>>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl StackedSeries {
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Column indices where this series has a value.
    pub fn present_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|_| i))
    }
}

/// Series aligned on the union of their timestamps and stacked in input order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct StackedColumns {
    pub times: Vec<f64>,
    pub series: Vec<StackedSeries>,
    /// Largest column total (1.0 in percent mode).
    pub max_total: f64,
}

impl StackedColumns {
    /// `samples` holds the in-window samples of each series, time-ordered, in stacking order.
    ///
    /// Between samples a series holds its last value.
    pub fn build(samples: &[Vec<StatSample>], percent: bool) -> Self {
        let mut times: Vec<f64> = samples
            .iter()
            .flat_map(|s| s.iter().map(|p| p.time))
            .filter(|t| t.is_finite())
            .collect();
        times.sort_by(|a, b| a.total_cmp(b));
        times.dedup();

        let mut raw: Vec<Vec<Option<f64>>> = samples
            .iter()
            .map(|series| Self::sample_and_hold(series, &times))
            .collect();

        if percent {
            for col in 0..times.len() {
                let column: Vec<f64> = raw.iter().map(|s| s[col].unwrap_or(0.0)).collect();
                let normalized = normalize_percent(&column);
                for (series, fraction) in raw.iter_mut().zip(normalized) {
                    if let Some(v) = series[col].as_mut() {
                        *v = fraction;
                    }
                }
            }
        } else {
            for series in raw.iter_mut() {
                for v in series.iter_mut().flatten() {
                    *v = sanitize(*v);
                }
            }
        }

        let mut base = vec![0.0; times.len()];
        let mut stacked = Vec::with_capacity(raw.len());
        for values in raw {
            let lower = base.clone();
            for (b, v) in base.iter_mut().zip(&values) {
                *b += v.unwrap_or(0.0);
            }
            stacked.push(StackedSeries {
                values,
                lower,
                upper: base.clone(),
            });
        }

        let max_total = if percent {
            1.0
        } else {
            base.iter().copied().fold(0.0, f64::max)
        };

        Self {
            times,
            series: stacked,
            max_total,
        }
    }

    fn sample_and_hold(series: &[StatSample], times: &[f64]) -> Vec<Option<f64>> {
        let mut out = Vec::with_capacity(times.len());
        let mut cursor = 0;
        let mut current = None;
        for &t in times {
            while cursor < series.len() && series[cursor].time <= t {
                current = Some(series[cursor].value);
                cursor += 1;
            }
            out.push(current);
        }
        out
    }
}
