//! Injectable distance functions for the cluster estimator.
//!
//! [`SeqDistance`] pairs a two-sequence distance callable with a
//! [`MetricKind`] tag. The tag identifies built-in metrics so a fitted
//! estimator can be persisted and its distance function rebuilt on load;
//! custom closures carry the [`MetricKind::Custom`] tag and cannot be
//! persisted.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::dtw::{dtw_distance, dtw_distance_scaled, euclidean_distance};
use super::fastdtw::fastdtw_distance;
use super::levenshtein::levenshtein_str;
use crate::error::Result;

/// Identity tag of a distance function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    /// Exact DTW with absolute-difference cost.
    Dtw {
        /// Whether both sequences are scaled to 0-1 first.
        scaled: bool,
    },
    /// Approximate DTW (coarsening/refinement), radius 1.
    FastDtw,
    /// Euclidean distance; requires equal lengths.
    Euclidean,
    /// Levenshtein edit distance over chars.
    Levenshtein,
    /// A user-supplied closure; not persistable.
    Custom,
}

/// A two-sequence distance callable usable as the estimator's algorithm.
///
/// The contract: `(sequence, sequence) -> non-negative scalar`, 0 iff the
/// sequences are equal under the metric. Cloning shares the underlying
/// callable.
#[derive(Clone)]
pub struct SeqDistance<S> {
    kind: MetricKind,
    func: Arc<dyn Fn(&S, &S) -> Result<f64> + Send + Sync>,
}

impl<S> SeqDistance<S> {
    /// Wrap an arbitrary distance closure.
    ///
    /// The closure must honor the distance contract above; it may close over
    /// auxiliary state (e.g. pre-scaling or a custom elementwise cost).
    pub fn custom<F>(func: F) -> Self
    where
        F: Fn(&S, &S) -> Result<f64> + Send + Sync + 'static,
    {
        Self {
            kind: MetricKind::Custom,
            func: Arc::new(func),
        }
    }

    /// The identity tag of this distance function.
    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Evaluate the distance between two sequences.
    pub fn eval(&self, a: &S, b: &S) -> Result<f64> {
        (self.func)(a, b)
    }

    fn builtin(kind: MetricKind, func: Arc<dyn Fn(&S, &S) -> Result<f64> + Send + Sync>) -> Self {
        Self { kind, func }
    }
}

impl SeqDistance<Vec<f64>> {
    /// Exact DTW distance.
    pub fn dtw() -> Self {
        Self::builtin(
            MetricKind::Dtw { scaled: false },
            Arc::new(|a, b| Ok(dtw_distance(a, b))),
        )
    }

    /// Exact DTW with both sequences scaled to 0-1 first.
    pub fn dtw_scaled() -> Self {
        Self::builtin(
            MetricKind::Dtw { scaled: true },
            Arc::new(|a, b| dtw_distance_scaled(a, b)),
        )
    }

    /// Approximate DTW; the estimator default.
    pub fn fast_dtw() -> Self {
        Self::builtin(MetricKind::FastDtw, Arc::new(|a, b| Ok(fastdtw_distance(a, b))))
    }

    /// Euclidean distance; fails on unequal lengths.
    pub fn euclidean() -> Self {
        Self::builtin(MetricKind::Euclidean, Arc::new(|a, b| euclidean_distance(a, b)))
    }
}

impl SeqDistance<String> {
    /// Levenshtein edit distance over chars.
    pub fn levenshtein() -> Self {
        Self::builtin(
            MetricKind::Levenshtein,
            Arc::new(|a: &String, b: &String| Ok(levenshtein_str(a, b) as f64)),
        )
    }
}

impl<S> fmt::Debug for SeqDistance<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqDistance")
            .field("kind", &self.kind)
            .finish()
    }
}

/// Sequence types whose built-in metrics can be rebuilt from a persisted
/// [`MetricKind`] tag.
pub trait MetricSpace: Sized {
    /// Rebuild a built-in metric, or `None` if the tag does not name a
    /// built-in for this sequence type.
    fn metric_for(kind: MetricKind) -> Option<SeqDistance<Self>>;
}

impl MetricSpace for Vec<f64> {
    fn metric_for(kind: MetricKind) -> Option<SeqDistance<Self>> {
        match kind {
            MetricKind::Dtw { scaled: false } => Some(SeqDistance::dtw()),
            MetricKind::Dtw { scaled: true } => Some(SeqDistance::dtw_scaled()),
            MetricKind::FastDtw => Some(SeqDistance::fast_dtw()),
            MetricKind::Euclidean => Some(SeqDistance::euclidean()),
            MetricKind::Levenshtein | MetricKind::Custom => None,
        }
    }
}

impl MetricSpace for String {
    fn metric_for(kind: MetricKind) -> Option<SeqDistance<Self>> {
        match kind {
            MetricKind::Levenshtein => Some(SeqDistance::levenshtein()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==================== built-in constructors ====================

    #[test]
    fn dtw_metric_evaluates() {
        let dist = SeqDistance::dtw();
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![0.0, 0.0, 0.0];

        assert_relative_eq!(dist.eval(&a, &b).unwrap(), 10.0, epsilon = 1e-10);
        assert_eq!(dist.kind(), MetricKind::Dtw { scaled: false });
    }

    #[test]
    fn scaled_dtw_metric_is_magnitude_invariant() {
        let dist = SeqDistance::dtw_scaled();
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![10.0, 20.0, 30.0, 40.0];

        assert_relative_eq!(dist.eval(&a, &b).unwrap(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn levenshtein_metric_evaluates() {
        let dist = SeqDistance::levenshtein();

        let d = dist
            .eval(&"Apple".to_string(), &"apple".to_string())
            .unwrap();
        assert_relative_eq!(d, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn custom_metric_evaluates() {
        let dist = SeqDistance::custom(|a: &Vec<f64>, b: &Vec<f64>| {
            Ok((a.len() as f64 - b.len() as f64).abs())
        });

        assert_eq!(dist.kind(), MetricKind::Custom);
        assert_relative_eq!(
            dist.eval(&vec![1.0], &vec![1.0, 2.0, 3.0]).unwrap(),
            2.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn euclidean_metric_propagates_length_mismatch() {
        let dist = SeqDistance::euclidean();
        assert!(dist.eval(&vec![1.0], &vec![1.0, 2.0]).is_err());
    }

    // ==================== MetricSpace ====================

    #[test]
    fn numeric_builtins_rebuild_from_kind() {
        for kind in [
            MetricKind::Dtw { scaled: false },
            MetricKind::Dtw { scaled: true },
            MetricKind::FastDtw,
            MetricKind::Euclidean,
        ] {
            let dist = <Vec<f64> as MetricSpace>::metric_for(kind).unwrap();
            assert_eq!(dist.kind(), kind);
        }
    }

    #[test]
    fn custom_kind_does_not_rebuild() {
        assert!(<Vec<f64> as MetricSpace>::metric_for(MetricKind::Custom).is_none());
        assert!(<String as MetricSpace>::metric_for(MetricKind::Custom).is_none());
    }

    #[test]
    fn string_space_rebuilds_levenshtein_only() {
        assert!(<String as MetricSpace>::metric_for(MetricKind::Levenshtein).is_some());
        assert!(<String as MetricSpace>::metric_for(MetricKind::FastDtw).is_none());
    }
}
