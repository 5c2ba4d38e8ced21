//! Model selection: greedy bidirectional stepwise search scored by AIC.
//!
//! The search walks the lattice of predictor subsets one move at a time,
//! evaluating every single-predictor removal and addition against the
//! current model and adopting the lowest-AIC candidate until no move
//! improves the score.
//!
//! # Examples
//!
//! ```
//! use ajustar::datasets::mtcars;
//! use ajustar::model_selection::StepwiseSelector;
//!
//! let df = mtcars();
//! let result = StepwiseSelector::new("mpg")
//!     .select(&df)
//!     .expect("starting model is feasible");
//!
//! // The search discards most of the ten candidate predictors
//! assert!(result.model.spec().predictors().len() < 10);
//! ```

use crate::data::DataFrame;
use crate::error::{AjustarError, Result};
use crate::linear_model::{fit, FittedModel, ModelSpec};
use serde::Serialize;

/// A single accepted move of the stepwise search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StepAction {
    /// The starting model, before any move.
    Start,
    /// A predictor was removed from the model.
    Remove(String),
    /// A predictor was added to the model.
    Add(String),
}

/// One entry of the search trace: the accepted action and the AIC of the
/// model it produced.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    /// The accepted move
    pub action: StepAction,
    /// AIC after the move
    pub aic: f64,
}

/// Outcome of a stepwise search: the locally AIC-minimal model and the
/// trace of accepted moves that led to it.
#[derive(Debug, Clone, Serialize)]
pub struct StepwiseResult {
    /// The selected model
    pub model: FittedModel,
    /// Accepted moves, starting with [`StepAction::Start`]
    pub steps: Vec<Step>,
}

/// Greedy bidirectional stepwise selector minimizing AIC.
///
/// Starts from a configurable predictor set (default: every non-response
/// column) and at each iteration considers every single-predictor removal
/// (in current-set order) and every single-predictor addition (in dataset
/// column order). The strictly lowest-AIC candidate is adopted; ties keep
/// the current model, and exact ties between candidates keep the one
/// evaluated first, so the search is deterministic. Each accepted move
/// strictly decreases AIC, so termination is guaranteed.
#[derive(Debug, Clone)]
pub struct StepwiseSelector {
    response: String,
    start: Option<Vec<String>>,
}

impl StepwiseSelector {
    /// Creates a selector for the given response column, starting from the
    /// full predictor set.
    #[must_use]
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            start: None,
        }
    }

    /// Overrides the starting predictor set. An empty slice starts from
    /// the intercept-only model.
    #[must_use]
    pub fn with_start(mut self, predictors: &[&str]) -> Self {
        self.start = Some(predictors.iter().map(|s| (*s).to_string()).collect());
        self
    }

    /// Runs the search.
    ///
    /// Candidates whose design matrix is singular are excluded from the
    /// comparison; only the starting model must be feasible.
    ///
    /// # Errors
    ///
    /// - [`AjustarError::NoFeasibleModel`] if the starting model cannot be
    ///   fitted because its design matrix is singular.
    /// - Any spec error (unknown columns, duplicates) from the underlying
    ///   fitter, unchanged.
    pub fn select(&self, df: &DataFrame) -> Result<StepwiseResult> {
        let start = match &self.start {
            Some(predictors) => predictors.clone(),
            None => df
                .column_names()
                .iter()
                .filter(|&&name| name != self.response)
                .map(|&name| name.to_string())
                .collect(),
        };

        let spec = ModelSpec::from_owned(self.response.clone(), start);
        let mut current = match fit(df, &spec) {
            Ok(model) => model,
            Err(AjustarError::SingularDesign { .. }) => {
                return Err(AjustarError::NoFeasibleModel {
                    response: self.response.clone(),
                });
            }
            Err(e) => return Err(e),
        };

        let mut steps = vec![Step {
            action: StepAction::Start,
            aic: current.aic(),
        }];

        loop {
            match self.best_move(df, &current) {
                Some((action, model)) => {
                    steps.push(Step {
                        action,
                        aic: model.aic(),
                    });
                    current = model;
                }
                None => break,
            }
        }

        Ok(StepwiseResult {
            model: current,
            steps,
        })
    }

    /// Evaluates every single-predictor removal and addition against the
    /// current model. Returns the strictly best move, or None at a local
    /// optimum. Singular candidates are skipped.
    fn best_move(
        &self,
        df: &DataFrame,
        current: &FittedModel,
    ) -> Option<(StepAction, FittedModel)> {
        let predictors = current.spec().predictors();
        let mut best_aic = current.aic();
        let mut best: Option<(StepAction, FittedModel)> = None;

        // Removals, in current-set order
        for (i, name) in predictors.iter().enumerate() {
            let mut candidate = predictors.to_vec();
            candidate.remove(i);
            let spec = ModelSpec::from_owned(self.response.clone(), candidate);
            if let Ok(model) = fit(df, &spec) {
                if model.aic() < best_aic {
                    best_aic = model.aic();
                    best = Some((StepAction::Remove(name.clone()), model));
                }
            }
        }

        // Additions, in dataset column order of the complement
        for name in df.column_names() {
            if name == self.response || predictors.iter().any(|p| p == name) {
                continue;
            }
            let mut candidate = predictors.to_vec();
            candidate.push(name.to_string());
            let spec = ModelSpec::from_owned(self.response.clone(), candidate);
            if let Ok(model) = fit(df, &spec) {
                if model.aic() < best_aic {
                    best_aic = model.aic();
                    best = Some((StepAction::Add(name.to_string()), model));
                }
            }
        }

        best
    }
}
