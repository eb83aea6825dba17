//! # trendy
//!
//! Trend line clustering library.
//!
//! Groups sequences of numeric values ("trend lines") into a fixed number of
//! clusters using elastic sequence distances, without assuming the sequences
//! share length or alignment. Cluster centers are exemplars: actual input
//! sequences, never synthetic centroids.
//!
//! Provides exact and approximate Dynamic Time Warping, Levenshtein edit
//! distance for symbolic sequences, 0-1 scaling, and the [`Trendy`]
//! exemplar-based cluster estimator with fit/predict and snapshot
//! persistence.
//!
//! ```
//! use trendy::prelude::*;
//!
//! let series = vec![
//!     vec![1.0, 2.0, 3.0, 4.0, 5.0],
//!     vec![1.0, 2.1, 2.9, 4.4, 5.1],
//!     vec![6.2, 5.0, 4.0, 3.0, 2.0],
//!     vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
//! ];
//!
//! let mut model = Trendy::new(2).unwrap();
//! let labels = model.fit_predict(&series).unwrap();
//! assert_eq!(labels, vec![0, 0, 1, 1]);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod clustering;
pub mod distance;
pub mod error;
pub mod transform;

pub use clustering::Trendy;
pub use error::{Result, TrendyError};

pub mod prelude {
    pub use crate::clustering::Trendy;
    pub use crate::distance::{
        dtw_distance, fastdtw_distance, levenshtein_str, MetricKind, SeqDistance,
    };
    pub use crate::error::{Result, TrendyError};
    pub use crate::transform::scale_01;
}
