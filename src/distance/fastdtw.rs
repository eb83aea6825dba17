//! FastDTW: approximate Dynamic Time Warping in linear time and memory.
//!
//! Recursively coarsens both sequences, solves the coarse problem, and
//! refines the resulting alignment path within a narrow window at full
//! resolution. Trades exactness for speed on long sequences: the result has
//! the same value semantics as exact DTW (0 iff identical, unbounded above)
//! but is not guaranteed to match it on the same inputs.

use std::collections::HashMap;

use super::dtw::{abs_distance, dtw_distance, dtw_path};

/// Approximate DTW distance with the default refinement radius of 1.
///
/// ```
/// use trendy::distance::fastdtw_distance;
///
/// let a = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(fastdtw_distance(&a, &a), 0.0);
/// ```
pub fn fastdtw_distance(a: &[f64], b: &[f64]) -> f64 {
    fastdtw_distance_radius(a, b, 1)
}

/// Approximate DTW distance with an explicit refinement radius.
///
/// A larger radius widens the refinement window around the coarse alignment
/// path: slower, closer to exact DTW.
pub fn fastdtw_distance_radius(a: &[f64], b: &[f64], radius: usize) -> f64 {
    fastdtw(a, b, radius).0
}

fn fastdtw(a: &[f64], b: &[f64], radius: usize) -> (f64, Vec<(usize, usize)>) {
    let min_size = radius + 2;
    if a.len() < min_size || b.len() < min_size {
        return (dtw_distance(a, b), dtw_path(a, b));
    }

    let coarse_a = reduce_by_half(a);
    let coarse_b = reduce_by_half(b);
    let (_, coarse_path) = fastdtw(&coarse_a, &coarse_b, radius);
    let window = expand_window(&coarse_path, a.len(), b.len(), radius);

    dtw_windowed(a, b, &window)
}

/// Halve the resolution by averaging adjacent pairs; an odd tail element is
/// dropped.
fn reduce_by_half(series: &[f64]) -> Vec<f64> {
    (0..series.len() / 2)
        .map(|i| (series[2 * i] + series[2 * i + 1]) / 2.0)
        .collect()
}

/// Project a coarse alignment path to full resolution, dilated by `radius`.
///
/// Returns one inclusive column interval per row.
fn expand_window(
    path: &[(usize, usize)],
    len_a: usize,
    len_b: usize,
    radius: usize,
) -> Vec<(usize, usize)> {
    let mut lo = vec![usize::MAX; len_a];
    let mut hi = vec![0usize; len_a];

    for &(ci, cj) in path {
        let row_lo = 2 * ci.saturating_sub(radius);
        let row_hi = (2 * (ci + radius) + 1).min(len_a - 1);
        let col_lo = 2 * cj.saturating_sub(radius);
        let col_hi = (2 * (cj + radius) + 1).min(len_b - 1);

        for row in row_lo..=row_hi {
            lo[row] = lo[row].min(col_lo);
            hi[row] = hi[row].max(col_hi);
        }
    }

    // Rows the projection missed (odd tail) get the full column range
    for row in 0..len_a {
        if lo[row] > hi[row] {
            lo[row] = 0;
            hi[row] = len_b - 1;
        }
    }

    // The window must always admit the terminal cell
    hi[len_a - 1] = len_b - 1;

    lo.into_iter().zip(hi).collect()
}

/// DTW restricted to a per-row window of admissible columns.
///
/// Cells outside the window read as infinity, so only paths inside the
/// window are considered.
fn dtw_windowed(a: &[f64], b: &[f64], window: &[(usize, usize)]) -> (f64, Vec<(usize, usize)>) {
    let n = a.len();
    let m = b.len();

    // Table coordinates are offset by one; (0, 0) is the zero-cost origin.
    let mut cost: HashMap<(usize, usize), f64> = HashMap::new();
    cost.insert((0, 0), 0.0);

    for (i, &(col_lo, col_hi)) in window.iter().enumerate() {
        let ti = i + 1;
        for j in col_lo..=col_hi {
            let tj = j + 1;
            let c = abs_distance(a[i], b[j]);
            let up = lookup(&cost, (ti - 1, tj));
            let left = lookup(&cost, (ti, tj - 1));
            let diag = lookup(&cost, (ti - 1, tj - 1));
            cost.insert((ti, tj), c + up.min(left).min(diag));
        }
    }

    let total = lookup(&cost, (n, m));

    // Backtrack, preferring the diagonal on ties as in `dtw_path`
    let mut path = Vec::new();
    let mut i = n;
    let mut j = m;
    while i > 0 && j > 0 {
        path.push((i - 1, j - 1));

        let diag = lookup(&cost, (i - 1, j - 1));
        let left = lookup(&cost, (i, j - 1));
        let up = lookup(&cost, (i - 1, j));

        if diag <= left && diag <= up {
            i -= 1;
            j -= 1;
        } else if left < up {
            j -= 1;
        } else {
            i -= 1;
        }
    }
    path.reverse();

    (total, path)
}

fn lookup(cost: &HashMap<(usize, usize), f64>, key: (usize, usize)) -> f64 {
    cost.get(&key).copied().unwrap_or(f64::INFINITY)
}
