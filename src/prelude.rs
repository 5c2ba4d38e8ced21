//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use ajustar::prelude::*;
//! ```

pub use crate::data::{DataFrame, Factor};
pub use crate::datasets::mtcars;
pub use crate::error::{AjustarError, Result};
pub use crate::linear_model::{fit, Coefficient, FittedModel, ModelSpec, INTERCEPT};
pub use crate::metrics::r_squared;
pub use crate::model_selection::{StepAction, StepwiseResult, StepwiseSelector};
pub use crate::primitives::{Matrix, Vector};
pub use crate::stats::{corr, welch_ttest, CorrelationMatrix, WelchTTest};
