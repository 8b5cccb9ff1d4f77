//! Numeric primitives shared by the indicators.
//!
//! Series are `Option<f64>` per bar so warm-up positions stay aligned with
//! the price index instead of shifting the output.

/// Exponential smoothing with an explicit factor.
///
/// The first defined input seeds the average (no SMA seed, no bias
/// correction); leading `None`s are skipped. Output is `None` until
/// `min_periods` defined inputs have been seen. A `None` after the seed
/// carries the previous average forward.
pub fn exponential_smoothing(
    values: &[Option<f64>],
    alpha: f64,
    min_periods: usize,
) -> Vec<Option<f64>> {
    let mut average: Option<f64> = None;
    let mut seen = 0usize;

    values
        .iter()
        .map(|value| {
            if let Some(x) = *value {
                average = Some(match average {
                    Some(prev) => alpha * x + (1.0 - alpha) * prev,
                    None => x,
                });
                seen += 1;
            }
            if seen >= min_periods {
                average
            } else {
                None
            }
        })
        .collect()
}

/// EMA with `alpha = 2 / (span + 1)`, defined after `span` observations.
pub fn ema_series(values: &[Option<f64>], span: usize) -> Vec<Option<f64>> {
    let span = span.max(1);
    exponential_smoothing(values, 2.0 / (span as f64 + 1.0), span)
}

/// Wilder's running average (`alpha = 1 / period`).
pub fn wilder_series(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let period = period.max(1);
    exponential_smoothing(values, 1.0 / period as f64, period)
}

/// Arithmetic mean of a window.
pub fn mean(window: &[f64]) -> Option<f64> {
    if window.is_empty() {
        return None;
    }
    Some(window.iter().sum::<f64>() / window.len() as f64)
}

/// Population standard deviation (divisor `n`) of a window.
pub fn population_std_dev(window: &[f64]) -> Option<f64> {
    let mean = mean(window)?;
    let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / window.len() as f64;
    Some(variance.sqrt())
}

/// Apply `f` to every full trailing window of `period` values.
pub fn rolling<F>(values: &[f64], period: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> Option<f64>,
{
    (0..values.len())
        .map(|i| {
            if period == 0 || i + 1 < period {
                None
            } else {
                f(&values[i + 1 - period..=i])
            }
        })
        .collect()
}

/// Element-wise `a - b`, defined where both sides are.
pub fn difference(a: &[Option<f64>], b: &[Option<f64>]) -> Vec<Option<f64>> {
    a.iter()
        .zip(b)
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(x - y),
            _ => None,
        })
        .collect()
}

/// Wrap a dense series so it can feed the `Option` based helpers.
pub fn defined(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}
