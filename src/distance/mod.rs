//! Elastic sequence distances.
//!
//! Provides exact and approximate Dynamic Time Warping, Levenshtein edit
//! distance, and the [`SeqDistance`] abstraction that injects any of them
//! (or a custom closure) into the cluster estimator.
//!
//! # Example
//!
//! ```
//! use trendy::distance::{dtw_distance, fastdtw_distance, levenshtein_str};
//!
//! // Elastic alignment handles different lengths
//! let a = vec![1.0, 2.0, 3.0, 4.0];
//! assert_eq!(dtw_distance(&a, &[0.0, 0.0, 0.0]), 10.0);
//!
//! // Approximate DTW agrees on identical inputs
//! assert_eq!(fastdtw_distance(&a, &a), 0.0);
//!
//! // Edit distance for symbolic sequences
//! assert_eq!(levenshtein_str("Apple", "apple"), 1);
//! ```

pub mod dtw;
pub mod fastdtw;
pub mod levenshtein;
pub mod metric;

// Re-export from dtw
pub use dtw::{
    abs_distance, dtw_distance, dtw_distance_scaled, dtw_distance_with, dtw_path,
    euclidean_distance,
};

// Re-export from fastdtw
pub use fastdtw::{fastdtw_distance, fastdtw_distance_radius};

// Re-export from levenshtein
pub use levenshtein::{levenshtein_distance, levenshtein_str};

// Re-export from metric
pub use metric::{MetricKind, MetricSpace, SeqDistance};
