//! Exemplar-based clustering of trend lines.
//!
//! [`Trendy`] groups sequences around exemplars: actual input sequences
//! chosen by an exhaustive coverage-cost search over the pairwise distance
//! matrix. Any [`crate::distance::SeqDistance`] can be injected, so the same
//! estimator clusters numeric trends under DTW and symbolic sequences under
//! Levenshtein.
//!
//! # Example
//!
//! ```
//! use trendy::clustering::Trendy;
//!
//! let series = vec![
//!     vec![1.0, 2.0, 1.0],
//!     vec![1.1, 2.1, 1.1],
//!     vec![9.0, 10.0, 9.0],
//!     vec![9.1, 10.1, 9.1],
//! ];
//!
//! let mut model = Trendy::new(2).unwrap();
//! model.fit(&series).unwrap();
//!
//! assert_eq!(model.labels(), Some(&[0, 0, 1, 1][..]));
//! assert_eq!(model.predict(&[vec![1.2, 2.2, 1.2]]).unwrap(), vec![0]);
//! ```

mod combinations;
mod snapshot;
pub mod trendy;

pub use trendy::Trendy;
