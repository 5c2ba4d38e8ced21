//! Linear models for regression.
//!
//! Ordinary Least Squares (OLS) fitting with full inference output:
//! coefficient standard errors, t-values, two-sided p-values, R²,
//! adjusted R², and AIC.
//!
//! # Solver
//!
//! Uses normal equations: `β = (X^T X)^-1 X^T y` via Cholesky decomposition.
//! An intercept column is always included in the design matrix.
//!
//! # Examples
//!
//! ```
//! use ajustar::datasets::mtcars;
//! use ajustar::linear_model::{fit, ModelSpec};
//!
//! let df = mtcars();
//! let model = fit(&df, &ModelSpec::new("mpg", &["wt"])).expect("well-conditioned design");
//!
//! // Heavier cars do fewer miles per gallon
//! let wt = model.coefficient("wt").expect("wt is in the model");
//! assert!(wt.estimate < 0.0);
//! assert!(wt.p_value < 0.001);
//! assert!(model.r_squared() > 0.7);
//! ```

use crate::data::DataFrame;
use crate::error::{AjustarError, Result};
use crate::metrics::r_squared;
use crate::primitives::{Matrix, Vector};
use crate::stats::distribution::student_t_pvalue;
use serde::Serialize;
use std::fmt;

/// Name given to the intercept term in coefficient tables.
pub const INTERCEPT: &str = "(Intercept)";

/// A response column plus an ordered set of predictor columns.
///
/// This is the unit the stepwise search evolves: each candidate move
/// produces a new `ModelSpec`, never a mutation of an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSpec {
    response: String,
    predictors: Vec<String>,
}

impl ModelSpec {
    /// Creates a specification. An empty predictor set means the
    /// intercept-only model.
    #[must_use]
    pub fn new(response: &str, predictors: &[&str]) -> Self {
        Self {
            response: response.to_string(),
            predictors: predictors.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// The response column name.
    #[must_use]
    pub fn response(&self) -> &str {
        &self.response
    }

    /// The ordered predictor set.
    #[must_use]
    pub fn predictors(&self) -> &[String] {
        &self.predictors
    }

    pub(crate) fn from_owned(response: String, predictors: Vec<String>) -> Self {
        Self {
            response,
            predictors,
        }
    }
}

/// One estimated model parameter with its inference statistics.
#[derive(Debug, Clone, Serialize)]
pub struct Coefficient {
    /// Term name (a predictor column, or [`INTERCEPT`])
    pub name: String,
    /// Point estimate
    pub estimate: f64,
    /// Standard error of the estimate
    pub std_error: f64,
    /// t-statistic (estimate / std_error)
    pub t_value: f64,
    /// Two-sided p-value against the zero-coefficient null
    pub p_value: f64,
}

/// An immutable fitted OLS model.
///
/// Owns its specification, one coefficient per predictor plus intercept,
/// the residual vector (one entry per observation), and summary statistics.
#[derive(Debug, Clone, Serialize)]
pub struct FittedModel {
    spec: ModelSpec,
    coefficients: Vec<Coefficient>,
    residuals: Vector<f64>,
    r_squared: f64,
    adj_r_squared: f64,
    aic: f64,
    n: usize,
}

impl FittedModel {
    /// The specification this model was fitted from.
    #[must_use]
    pub fn spec(&self) -> &ModelSpec {
        &self.spec
    }

    /// All coefficients, intercept first, then predictors in spec order.
    #[must_use]
    pub fn coefficients(&self) -> &[Coefficient] {
        &self.coefficients
    }

    /// Looks up a coefficient by term name ([`INTERCEPT`] for the intercept).
    #[must_use]
    pub fn coefficient(&self, name: &str) -> Option<&Coefficient> {
        self.coefficients.iter().find(|c| c.name == name)
    }

    /// Residuals (observed minus fitted), one per observation.
    #[must_use]
    pub fn residuals(&self) -> &Vector<f64> {
        &self.residuals
    }

    /// Coefficient of determination on the training data.
    #[must_use]
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// R² penalized for the number of predictors.
    #[must_use]
    pub fn adj_r_squared(&self) -> f64 {
        self.adj_r_squared
    }

    /// Akaike information criterion: N·ln(SS_res/N) + 2k with
    /// k = predictors + intercept. Lower is better.
    #[must_use]
    pub fn aic(&self) -> f64 {
        self.aic
    }

    /// Number of observations the model was fitted on.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }
}

impl fmt::Display for FittedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ ", self.spec.response())?;
        if self.spec.predictors().is_empty() {
            writeln!(f, "1")?;
        } else {
            writeln!(f, "{}", self.spec.predictors().join(" + "))?;
        }
        writeln!(
            f,
            "{:<14} {:>12} {:>12} {:>9} {:>10}",
            "term", "estimate", "std.error", "t", "p"
        )?;
        for c in &self.coefficients {
            writeln!(
                f,
                "{:<14} {:>12.4} {:>12.4} {:>9.3} {:>10.4}",
                c.name, c.estimate, c.std_error, c.t_value, c.p_value
            )?;
        }
        write!(
            f,
            "R-squared: {:.4}, adjusted: {:.4}, AIC: {:.2}",
            self.r_squared, self.adj_r_squared, self.aic
        )
    }
}

/// Fits an OLS model to a dataset by normal equations.
///
/// Pure function of (dataset, spec): constructs the design matrix
/// (intercept plus the spec's predictor columns), solves for the
/// coefficients via Cholesky, and computes the full inference summary.
///
/// # Errors
///
/// - [`AjustarError::ColumnNotFound`] if the response or a predictor is
///   not a dataset column.
/// - [`AjustarError::Other`] for duplicate predictors or a predictor set
///   containing the response.
/// - [`AjustarError::SingularDesign`] if the design matrix is
///   rank-deficient: perfectly collinear predictors, or too few
///   observations to leave at least one residual degree of freedom.
pub fn fit(df: &DataFrame, spec: &ModelSpec) -> Result<FittedModel> {
    validate_spec(df, spec)?;

    let n = df.n_rows();
    let k = spec.predictors().len() + 1; // parameters including intercept

    // Inference needs at least one residual degree of freedom
    if n < k + 1 {
        return Err(AjustarError::SingularDesign { columns: k, rows: n });
    }

    let y = df.column(spec.response())?;
    let x = design_matrix(df, spec)?;

    let xt = x.transpose();
    let xtx = xt
        .matmul(&x)
        .map_err(|e| AjustarError::Other(e.to_string()))?;
    let xty = xt
        .matvec(y)
        .map_err(|e| AjustarError::Other(e.to_string()))?;

    let l = xtx
        .cholesky()
        .map_err(|_| AjustarError::SingularDesign { columns: k, rows: n })?;
    let beta = l.cholesky_substitute(&xty);

    let fitted = x
        .matvec(&beta)
        .map_err(|e| AjustarError::Other(e.to_string()))?;
    let residuals: Vec<f64> = y
        .as_slice()
        .iter()
        .zip(fitted.as_slice().iter())
        .map(|(obs, fit)| obs - fit)
        .collect();
    let residuals = Vector::from_vec(residuals);

    let rss: f64 = residuals.as_slice().iter().map(|r| r * r).sum();
    let df_resid = (n - k) as f64;
    let sigma2 = rss / df_resid;

    // Diagonal of (X^T X)^-1 by substituting against unit vectors,
    // reusing the single Cholesky factorization.
    let mut coefficients = Vec::with_capacity(k);
    for j in 0..k {
        let mut e = vec![0.0; k];
        e[j] = 1.0;
        let col = l.cholesky_substitute(&Vector::from_vec(e));
        let std_error = (sigma2 * col[j]).sqrt();
        let t_value = beta[j] / std_error;
        let p_value = student_t_pvalue(t_value, df_resid);

        let name = if j == 0 {
            INTERCEPT.to_string()
        } else {
            spec.predictors()[j - 1].clone()
        };
        coefficients.push(Coefficient {
            name,
            estimate: beta[j],
            std_error,
            t_value,
            p_value,
        });
    }

    let r2 = r_squared(&fitted, y);
    let adj_r2 = 1.0 - (1.0 - r2) * (n as f64 - 1.0) / df_resid;
    let aic = n as f64 * (rss / n as f64).ln() + 2.0 * k as f64;

    Ok(FittedModel {
        spec: spec.clone(),
        coefficients,
        residuals,
        r_squared: r2,
        adj_r_squared: adj_r2,
        aic,
        n,
    })
}

fn validate_spec(df: &DataFrame, spec: &ModelSpec) -> Result<()> {
    df.column(spec.response())?;
    for (i, name) in spec.predictors().iter().enumerate() {
        df.column(name)?;
        if name == spec.response() {
            return Err(AjustarError::Other(format!(
                "predictor '{name}' is the response column"
            )));
        }
        if spec.predictors()[..i].contains(name) {
            return Err(AjustarError::Other(format!(
                "duplicate predictor '{name}'"
            )));
        }
    }
    Ok(())
}

/// Builds the n × (p + 1) design matrix: intercept column of ones,
/// then the predictor columns in spec order.
fn design_matrix(df: &DataFrame, spec: &ModelSpec) -> Result<Matrix<f64>> {
    let n = df.n_rows();
    let p = spec.predictors().len();

    let mut columns = Vec::with_capacity(p);
    for name in spec.predictors() {
        columns.push(df.column(name)?);
    }

    let mut data = Vec::with_capacity(n * (p + 1));
    for i in 0..n {
        data.push(1.0);
        for col in &columns {
            data.push(col[i]);
        }
    }

    Matrix::from_vec(n, p + 1, data).map_err(|e| AjustarError::Other(e.to_string()))
}
