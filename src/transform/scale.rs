//! Min-max scaling for sequences.
//!
//! Used to neutralize differing magnitudes before distance computation,
//! e.g. so that two trends with the same shape but different scales compare
//! as equal under DTW.

use crate::error::{Result, TrendyError};

/// Scale a sequence to the [0, 1] range.
///
/// Computes `(x - min) / (max - min)` elementwise, so the minimum element
/// maps to 0.0 and the maximum to 1.0.
///
/// # Errors
/// * [`TrendyError::EmptyData`] for an empty input
/// * [`TrendyError::ConstantSequence`] when all elements are equal; a
///   zero-range sequence has no 0-1 image, so the error is explicit rather
///   than a NaN result
///
/// # Example
/// ```
/// use trendy::transform::scale_01;
///
/// let scaled = scale_01(&[1.0, 2.0, 3.0, 5.0]).unwrap();
/// assert_eq!(scaled, vec![0.0, 0.25, 0.5, 1.0]);
/// ```
pub fn scale_01(series: &[f64]) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(TrendyError::EmptyData);
    }

    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range == 0.0 {
        return Err(TrendyError::ConstantSequence);
    }

    Ok(series.iter().map(|&x| (x - min) / range).collect())
}
