//! Two-window trend direction for a short interest series.

use crate::types::TrendDirection;

/// Number of trailing points considered.
pub const TREND_WINDOW: usize = 5;

/// Percent change beyond which a series counts as rising or falling.
pub const TREND_THRESHOLD_PCT: f64 = 10.0;

/// Classify the tail of a time-ordered interest series.
///
/// Takes the last [`TREND_WINDOW`] values and splits them at `len / 2`, so
/// an odd middle point belongs to the second half. Compares the two half
/// means: more than [`TREND_THRESHOLD_PCT`] percent up is rising, more than
/// that down is falling. Fewer than two points, or a first-half mean of
/// zero, is stable.
#[must_use]
pub fn classify(values: &[i64]) -> TrendDirection {
    let window = &values[values.len().saturating_sub(TREND_WINDOW)..];
    if window.len() < 2 {
        return TrendDirection::Stable;
    }

    let (first, second) = window.split_at(window.len() / 2);
    let first_mean = mean(first);
    let change_pct = if first_mean.abs() < f64::EPSILON {
        0.0
    } else {
        (mean(second) - first_mean) / first_mean * 100.0
    };

    if change_pct > TREND_THRESHOLD_PCT {
        TrendDirection::Rising
    } else if change_pct < -TREND_THRESHOLD_PCT {
        TrendDirection::Falling
    } else {
        TrendDirection::Stable
    }
}

/// Summed in `f64`; an `i64` sum of large values can overflow.
#[allow(clippy::cast_precision_loss)]
fn mean(values: &[i64]) -> f64 {
    let sum: f64 = values.iter().map(|&v| v as f64).sum();
    sum / values.len() as f64
}
