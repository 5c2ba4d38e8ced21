//! Ajustar: ordinary least squares, stepwise model selection, and classical
//! hypothesis tests in pure Rust.
//!
//! Ajustar covers the core of a small inferential analysis: load a fixed
//! dataset of named columns, screen pairwise correlations, test a group
//! difference, fit OLS models with full inference output, and search for an
//! AIC-minimal predictor subset.
//!
//! # Quick Start
//!
//! ```
//! use ajustar::prelude::*;
//!
//! let df = mtcars();
//!
//! // Does transmission type predict fuel economy?
//! let model = fit(&df, &ModelSpec::new("mpg", &["am"])).unwrap();
//! assert!(model.coefficient("am").unwrap().estimate > 7.0);
//!
//! // Let the data pick the adjustment set
//! let selected = StepwiseSelector::new("mpg").select(&df).unwrap();
//! assert!(selected.model.r_squared() > 0.8);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`data`]: DataFrame for named columns; Factor for categorical labels
//! - [`datasets`]: Fixed analysis datasets embedded in code
//! - [`linear_model`]: OLS fitting with coefficient inference
//! - [`model_selection`]: Stepwise AIC search over predictor subsets
//! - [`metrics`]: Evaluation metrics
//! - [`stats`]: Correlation screening and hypothesis testing

pub mod data;
pub mod datasets;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod model_selection;
pub mod prelude;
pub mod primitives;
pub mod stats;
