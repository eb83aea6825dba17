//! Exemplar-based cluster estimator for trend lines.

use crate::clustering::combinations::combinations;
use crate::distance::SeqDistance;
use crate::error::{Result, TrendyError};

/// Clusters a collection of sequences around exemplars.
///
/// Given `n_clusters` and a distance function, `fit` computes the full
/// pairwise distance matrix, exhaustively searches every candidate set of
/// `n_clusters` input sequences for the one with minimum coverage cost (the
/// sum of each sequence's distance to its nearest candidate), and keeps the
/// winners as cluster centers. Centers are actual input sequences, never
/// synthetic centroids, so the estimator works for sequences of unequal
/// length and for any injected distance function.
///
/// The search enumerates `C(N, n_clusters)` candidate sets, which grows
/// combinatorially with the collection size; it is intended for modest
/// numbers of sequences.
///
/// ```
/// use trendy::clustering::Trendy;
/// use trendy::distance::SeqDistance;
///
/// let series = vec![
///     vec![1.0, 2.0, 1.0],
///     vec![1.1, 2.1, 1.1],
///     vec![9.0, 10.0, 9.0],
///     vec![9.1, 10.1, 9.1],
/// ];
///
/// let mut model = Trendy::with_algorithm(2, SeqDistance::dtw()).unwrap();
/// model.fit(&series).unwrap();
/// assert_eq!(model.labels(), Some(&[0, 0, 1, 1][..]));
/// ```
#[derive(Debug, Clone)]
pub struct Trendy<S = Vec<f64>> {
    pub(crate) n_clusters: usize,
    pub(crate) dist: SeqDistance<S>,
    pub(crate) labels: Option<Vec<usize>>,
    pub(crate) centers: Option<Vec<S>>,
}

impl Trendy<Vec<f64>> {
    /// Create an estimator with the default algorithm (approximate DTW).
    ///
    /// # Errors
    /// [`TrendyError::InvalidParameter`] when `n_clusters < 2`.
    pub fn new(n_clusters: usize) -> Result<Self> {
        Self::with_algorithm(n_clusters, SeqDistance::fast_dtw())
    }
}

impl<S: Clone> Trendy<S> {
    /// Create an estimator with an explicit distance algorithm.
    ///
    /// # Errors
    /// [`TrendyError::InvalidParameter`] when `n_clusters < 2`.
    pub fn with_algorithm(n_clusters: usize, algorithm: SeqDistance<S>) -> Result<Self> {
        if n_clusters < 2 {
            return Err(TrendyError::InvalidParameter(format!(
                "cluster count must be >= 2, got {}",
                n_clusters
            )));
        }

        Ok(Self {
            n_clusters,
            dist: algorithm,
            labels: None,
            centers: None,
        })
    }

    /// Fit the estimator on a collection of sequences.
    ///
    /// On success `labels` and `cluster_centers` are fully replaced; on any
    /// error the previous fitted state (if any) is left untouched.
    ///
    /// # Errors
    /// * [`TrendyError::InsufficientData`] when the collection holds fewer
    ///   sequences than `n_clusters`
    /// * any error the distance function raises for a pair of inputs
    pub fn fit(&mut self, series: &[S]) -> Result<()> {
        let n = series.len();
        if n < self.n_clusters {
            return Err(TrendyError::InsufficientData {
                needed: self.n_clusters,
                got: n,
            });
        }

        // Full pairwise matrix. Every ordered pair is computed independently
        // so an asymmetric distance function keeps well-defined semantics.
        let mut matrix = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in 0..n {
                matrix[i][j] = self.dist.eval(&series[i], &series[j])?;
            }
        }

        // Exhaustive exemplar search: score every candidate set by coverage
        // cost, keep the first minimum in enumeration order.
        let mut best_combo: Vec<usize> = Vec::new();
        let mut best_score = f64::INFINITY;
        for combo in combinations(n, self.n_clusters) {
            let score: f64 = (0..n)
                .map(|i| {
                    combo
                        .iter()
                        .map(|&k| matrix[k][i])
                        .fold(f64::INFINITY, f64::min)
                })
                .sum();

            if best_combo.is_empty() || score < best_score {
                best_combo = combo;
                best_score = score;
            }
        }

        let labels: Vec<usize> = (0..n)
            .map(|i| nearest_exemplar(&best_combo, &matrix, i))
            .collect();

        self.centers = Some(best_combo.iter().map(|&k| series[k].clone()).collect());
        self.labels = Some(labels);
        Ok(())
    }

    /// Assign each sequence to the nearest cluster center.
    ///
    /// Distances are recomputed fresh against the stored centers; ties go to
    /// the first center. Does not mutate the estimator.
    ///
    /// # Errors
    /// [`TrendyError::FitRequired`] before any successful fit; any error the
    /// distance function raises.
    pub fn predict(&self, series: &[S]) -> Result<Vec<usize>> {
        let centers = self.centers.as_ref().ok_or(TrendyError::FitRequired)?;

        let mut labels = Vec::with_capacity(series.len());
        for s in series {
            let mut best = 0;
            let mut best_dist = f64::INFINITY;
            for (pos, center) in centers.iter().enumerate() {
                let d = self.dist.eval(s, center)?;
                if d < best_dist {
                    best_dist = d;
                    best = pos;
                }
            }
            labels.push(best);
        }
        Ok(labels)
    }

    /// Alias of [`Trendy::predict`].
    pub fn assign(&self, series: &[S]) -> Result<Vec<usize>> {
        self.predict(series)
    }

    /// Fit on the collection and return the resulting labels.
    pub fn fit_predict(&mut self, series: &[S]) -> Result<Vec<usize>> {
        self.fit(series)?;
        self.labels.clone().ok_or(TrendyError::FitRequired)
    }

    /// Labels assigned by the last fit, one per input sequence.
    pub fn labels(&self) -> Option<&[usize]> {
        self.labels.as_deref()
    }

    /// Cluster centers chosen by the last fit, in label order.
    pub fn cluster_centers(&self) -> Option<&[S]> {
        self.centers.as_deref()
    }

    /// The configured number of clusters.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Whether the estimator has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.centers.is_some()
    }

    /// Indices of the fitted sequences in a specific cluster.
    pub fn cluster_members(&self, cluster: usize) -> Option<Vec<usize>> {
        self.labels.as_ref().map(|labels| {
            labels
                .iter()
                .enumerate()
                .filter(|(_, &l)| l == cluster)
                .map(|(i, _)| i)
                .collect()
        })
    }

    /// The size of each cluster after the last fit.
    pub fn cluster_sizes(&self) -> Option<Vec<usize>> {
        self.labels.as_ref().map(|labels| {
            let mut sizes = vec![0; self.n_clusters];
            for &label in labels {
                if label < self.n_clusters {
                    sizes[label] += 1;
                }
            }
            sizes
        })
    }
}

/// Position of the exemplar nearest to sequence `i`, ties to the first.
fn nearest_exemplar(combo: &[usize], matrix: &[Vec<f64>], i: usize) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (pos, &k) in combo.iter().enumerate() {
        let d = matrix[k][i];
        if d < best_dist {
            best_dist = d;
            best = pos;
        }
    }
    best
}
