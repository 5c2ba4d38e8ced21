//! Covariance and correlation computations.
//!
//! # Mathematical Background
//!
//! Covariance measures how two variables change together:
//!
//! ```text
//! Cov(X, Y) = (1/n) Σ (x_i - x̄)(y_i - ȳ)
//! ```
//!
//! Pearson correlation normalizes covariance to [-1, 1]:
//!
//! ```text
//! ρ(X, Y) = Cov(X, Y) / (σ_X σ_Y)
//! ```
//!
//! # Examples
//!
//! ```
//! use ajustar::stats::{corr, cov};
//! use ajustar::primitives::Vector;
//!
//! let x = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
//! let y = Vector::from_slice(&[2.0, 4.0, 6.0, 8.0, 10.0]);
//!
//! // Perfect positive correlation
//! let covariance = cov(&x, &y).expect("covariance should compute");
//! let correlation = corr(&x, &y).expect("correlation should compute");
//!
//! assert!(covariance > 0.0);
//! assert!((correlation - 1.0).abs() < 1e-12);
//! ```

use crate::data::DataFrame;
use crate::error::{AjustarError, Result};
use crate::primitives::{Matrix, Vector};
use serde::Serialize;

/// Computes the covariance between two vectors.
///
/// # Errors
///
/// Returns error if vectors have different lengths or are empty.
pub fn cov(x: &Vector<f64>, y: &Vector<f64>) -> Result<f64> {
    let n = x.len();

    if n != y.len() {
        return Err(AjustarError::DimensionMismatch {
            expected: format!("{n} values in x"),
            actual: format!("{} values in y", y.len()),
        });
    }

    if n == 0 {
        return Err("Cannot compute covariance of empty vectors".into());
    }

    let x_mean = x.mean();
    let y_mean = y.mean();

    let cov_sum: f64 = x
        .as_slice()
        .iter()
        .zip(y.as_slice().iter())
        .map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean))
        .sum();

    Ok(cov_sum / n as f64)
}

/// Computes the Pearson correlation coefficient between two vectors.
///
/// Range: [-1, 1].
///
/// # Errors
///
/// Returns error if vectors have different lengths, are empty, or have
/// zero variance.
pub fn corr(x: &Vector<f64>, y: &Vector<f64>) -> Result<f64> {
    let n = x.len();

    if n != y.len() {
        return Err(AjustarError::DimensionMismatch {
            expected: format!("{n} values in x"),
            actual: format!("{} values in y", y.len()),
        });
    }

    if n == 0 {
        return Err("Cannot compute correlation of empty vectors".into());
    }

    let x_mean = x.mean();
    let y_mean = y.mean();

    let mut cov_sum = 0.0;
    let mut x_var_sum = 0.0;
    let mut y_var_sum = 0.0;

    for (&xi, &yi) in x.as_slice().iter().zip(y.as_slice().iter()) {
        let x_diff = xi - x_mean;
        let y_diff = yi - y_mean;
        cov_sum += x_diff * y_diff;
        x_var_sum += x_diff * x_diff;
        y_var_sum += y_diff * y_diff;
    }

    let x_std = (x_var_sum / n as f64).sqrt();
    let y_std = (y_var_sum / n as f64).sqrt();

    if x_std < 1e-12 || y_std < 1e-12 {
        return Err("Cannot compute correlation when variance is zero".into());
    }

    let covariance = cov_sum / n as f64;
    Ok(covariance / (x_std * y_std))
}

/// Computes the Pearson correlation matrix for a data matrix.
///
/// Entry (i, j) is the correlation between column i and column j.
/// Diagonal entries are exactly 1.0.
///
/// # Errors
///
/// Returns error if data is empty or any column has zero variance.
pub fn corr_matrix(data: &Matrix<f64>) -> Result<Matrix<f64>> {
    let n = data.n_rows();
    let p = data.n_cols();

    if n == 0 || p == 0 {
        return Err("Cannot compute correlation matrix for empty data".into());
    }

    let (means, stds) = compute_column_stats(data, n, p)?;
    let corr_data = compute_correlation_values(data, &means, &stds, n, p);

    Matrix::from_vec(p, p, corr_data)
        .map_err(|e| AjustarError::Other(format!("Failed to create correlation matrix: {e}")))
}

fn compute_column_stats(data: &Matrix<f64>, n: usize, p: usize) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut means = vec![0.0_f64; p];
    let mut stds = vec![0.0_f64; p];

    for j in 0..p {
        let sum: f64 = (0..n).map(|i| data.get(i, j)).sum();
        means[j] = sum / n as f64;

        let var_sum: f64 = (0..n).map(|i| (data.get(i, j) - means[j]).powi(2)).sum();
        stds[j] = (var_sum / n as f64).sqrt();

        if stds[j] < 1e-12 {
            return Err(AjustarError::Other(format!(
                "Column {j} has zero variance"
            )));
        }
    }
    Ok((means, stds))
}

fn compute_correlation_values(
    data: &Matrix<f64>,
    means: &[f64],
    stds: &[f64],
    n: usize,
    p: usize,
) -> Vec<f64> {
    let mut corr_data = vec![0.0_f64; p * p];
    for i in 0..p {
        corr_data[i * p + i] = 1.0; // Diagonal is 1.0
        for j in 0..i {
            let cov_sum: f64 = (0..n)
                .map(|k| (data.get(k, i) - means[i]) * (data.get(k, j) - means[j]))
                .sum();
            let corr_val = cov_sum / (n as f64 * stds[i] * stds[j]);
            corr_data[i * p + j] = corr_val;
            corr_data[j * p + i] = corr_val;
        }
    }
    corr_data
}

/// A correlation pair retained by [`CorrelationMatrix::screen`].
#[derive(Debug, Clone, Serialize)]
pub struct CorrelatedPair {
    /// First column name
    pub a: String,
    /// Second column name
    pub b: String,
    /// Pearson correlation between the pair
    pub r: f64,
}

/// A symmetric Pearson correlation matrix addressable by column name.
///
/// Used as a human-readable screening aid for choosing predictors; it is
/// not consumed programmatically by the stepwise selector.
///
/// # Examples
///
/// ```
/// use ajustar::datasets::mtcars;
/// use ajustar::stats::CorrelationMatrix;
///
/// let cm = CorrelationMatrix::from_dataframe(&mtcars()).expect("all columns vary");
/// let r = cm.get("mpg", "wt").expect("both columns exist");
/// assert!(r < -0.8); // heavier cars do fewer miles per gallon
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Matrix<f64>,
}

impl CorrelationMatrix {
    /// Computes the correlation matrix over every column of a `DataFrame`.
    ///
    /// # Errors
    ///
    /// Returns an error if any column has zero variance.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let values = corr_matrix(&df.to_matrix())?;
        let names = df.column_names().iter().map(|s| (*s).to_string()).collect();
        Ok(Self { names, values })
    }

    /// Returns the correlation between two named columns.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is unknown.
    pub fn get(&self, a: &str, b: &str) -> Result<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Ok(self.values.get(i, j))
    }

    /// Returns the column names in matrix order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the raw symmetric matrix.
    #[must_use]
    pub fn values(&self) -> &Matrix<f64> {
        &self.values
    }

    /// Retains the pairs with |r| at or above `threshold`.
    ///
    /// Pairs are reported once (i < j) in column order.
    #[must_use]
    pub fn screen(&self, threshold: f64) -> Vec<CorrelatedPair> {
        let p = self.names.len();
        let mut pairs = Vec::new();
        for i in 0..p {
            for j in (i + 1)..p {
                let r = self.values.get(i, j);
                if r.abs() >= threshold {
                    pairs.push(CorrelatedPair {
                        a: self.names[i].clone(),
                        b: self.names[j].clone(),
                        r,
                    });
                }
            }
        }
        pairs
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| AjustarError::ColumnNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "covariance_tests.rs"]
mod tests;
