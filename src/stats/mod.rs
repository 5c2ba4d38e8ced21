//! Classical statistics: correlation screening and hypothesis testing.
//!
//! - Pearson covariance/correlation and the name-addressable
//!   [`CorrelationMatrix`] with threshold screening
//! - Welch's two-sample t-test
//! - Shared Student-t tail probabilities (used here and by
//!   [`crate::linear_model`] for coefficient p-values)

pub mod covariance;
pub(crate) mod distribution;
pub mod hypothesis;

pub use covariance::{corr, corr_matrix, cov, CorrelatedPair, CorrelationMatrix};
pub use hypothesis::{welch_ttest, WelchTTest};
