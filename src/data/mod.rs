//! `DataFrame` module for named column containers.
//!
//! Provides a minimal `DataFrame` for fixed, in-memory analysis datasets,
//! plus `Factor` for enumerated categorical labels stored as integer codes.

use crate::error::{AjustarError, Result};
use crate::primitives::{Matrix, Vector};

/// A minimal `DataFrame` with named columns.
///
/// This is a thin wrapper around `Vec<(String, Vector<f64>)>` with
/// convenience methods for statistical workflows. Row count and column
/// identity are fixed after construction.
///
/// # Examples
///
/// ```
/// use ajustar::data::DataFrame;
/// use ajustar::primitives::Vector;
///
/// let columns = vec![
///     ("x".to_string(), Vector::from_slice(&[1.0, 2.0, 3.0])),
///     ("y".to_string(), Vector::from_slice(&[4.0, 5.0, 6.0])),
/// ];
/// let df = DataFrame::new(columns).expect("DataFrame creation should succeed with valid columns");
/// assert_eq!(df.shape(), (3, 2));
/// ```
#[derive(Debug, Clone)]
pub struct DataFrame {
    columns: Vec<(String, Vector<f64>)>,
    n_rows: usize,
}

impl DataFrame {
    /// Creates a new `DataFrame` from named columns.
    ///
    /// # Errors
    ///
    /// Returns an error if columns have different lengths or if empty.
    pub fn new(columns: Vec<(String, Vector<f64>)>) -> Result<Self> {
        if columns.is_empty() {
            return Err("DataFrame must have at least one column".into());
        }

        let n_rows = columns[0].1.len();

        // Verify all columns have same length
        for (name, col) in &columns {
            if col.len() != n_rows {
                return Err(AjustarError::DimensionMismatch {
                    expected: format!("{n_rows} rows"),
                    actual: format!("{} rows in column '{name}'", col.len()),
                });
            }
            if name.is_empty() {
                return Err("Column names cannot be empty".into());
            }
        }

        // Check for duplicate column names
        let mut names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        for i in 1..names.len() {
            if names[i] == names[i - 1] {
                return Err("Duplicate column names not allowed".into());
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Returns the shape as (`n_rows`, `n_cols`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names in insertion order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns a reference to a column by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the column doesn't exist.
    pub fn column(&self, name: &str) -> Result<&Vector<f64>> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
            .ok_or_else(|| AjustarError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    /// Selects multiple columns by name, returning a new `DataFrame`.
    ///
    /// # Errors
    ///
    /// Returns an error if any column doesn't exist.
    pub fn select(&self, names: &[&str]) -> Result<Self> {
        if names.is_empty() {
            return Err("Must select at least one column".into());
        }

        let mut selected = Vec::with_capacity(names.len());

        for &name in names {
            let col = self.column(name)?;
            selected.push((name.to_string(), col.clone()));
        }

        Self::new(selected)
    }

    /// Converts the `DataFrame` to a Matrix (row-major stacking).
    ///
    /// Returns a Matrix with shape (`n_rows`, `n_cols`).
    #[must_use]
    pub fn to_matrix(&self) -> Matrix<f64> {
        let mut data = Vec::with_capacity(self.n_rows * self.columns.len());

        for row_idx in 0..self.n_rows {
            for (_, col) in &self.columns {
                data.push(col[row_idx]);
            }
        }

        Matrix::from_vec(self.n_rows, self.columns.len(), data)
            .expect("Internal error: data size mismatch")
    }

    /// Returns an iterator over columns as (name, vector) pairs.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &Vector<f64>)> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Adds a new column to the `DataFrame`.
    ///
    /// # Errors
    ///
    /// Returns an error if column length doesn't match or name already exists.
    pub fn add_column(&mut self, name: String, data: Vector<f64>) -> Result<()> {
        if data.len() != self.n_rows {
            return Err(AjustarError::DimensionMismatch {
                expected: format!("{} rows", self.n_rows),
                actual: format!("{} rows", data.len()),
            });
        }

        if self.columns.iter().any(|(n, _)| n == &name) {
            return Err("Column name already exists".into());
        }

        if name.is_empty() {
            return Err("Column name cannot be empty".into());
        }

        self.columns.push((name, data));
        Ok(())
    }

    /// Splits a numeric column into two groups by a two-valued column.
    ///
    /// Groups are returned in ascending order of the grouping value, each as
    /// a (value, observations) pair.
    ///
    /// # Errors
    ///
    /// Returns an error if either column doesn't exist or the grouping
    /// column does not take exactly two distinct values.
    pub fn split_binary(
        &self,
        target: &str,
        by: &str,
    ) -> Result<((f64, Vector<f64>), (f64, Vector<f64>))> {
        let target_col = self.column(target)?;
        let by_col = self.column(by)?;

        let mut values: Vec<f64> = Vec::new();
        for &v in by_col.as_slice() {
            if !values.contains(&v) {
                values.push(v);
            }
        }
        if values.len() != 2 {
            return Err(AjustarError::Other(format!(
                "column '{by}' has {} distinct values, binary split needs exactly 2",
                values.len()
            )));
        }
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mut lo = Vec::new();
        let mut hi = Vec::new();
        for (&t, &b) in target_col.as_slice().iter().zip(by_col.as_slice()) {
            if b == values[0] {
                lo.push(t);
            } else {
                hi.push(t);
            }
        }

        Ok((
            (values[0], Vector::from_vec(lo)),
            (values[1], Vector::from_vec(hi)),
        ))
    }

    /// Returns descriptive statistics for all columns.
    #[must_use]
    pub fn describe(&self) -> Vec<ColumnStats> {
        self.columns
            .iter()
            .map(|(name, col)| {
                let mean = col.mean();
                let std = col.variance().sqrt();

                let mut sorted: Vec<f64> = col.as_slice().to_vec();
                sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

                let min = sorted.first().copied().unwrap_or(0.0);
                let max = sorted.last().copied().unwrap_or(0.0);
                let median = if sorted.is_empty() {
                    0.0
                } else if sorted.len() % 2 == 0 {
                    (sorted[sorted.len() / 2 - 1] + sorted[sorted.len() / 2]) / 2.0
                } else {
                    sorted[sorted.len() / 2]
                };

                ColumnStats {
                    name: name.clone(),
                    count: col.len(),
                    mean,
                    std,
                    min,
                    median,
                    max,
                }
            })
            .collect()
    }
}

/// Descriptive statistics for a column.
#[derive(Debug, Clone)]
pub struct ColumnStats {
    /// Column name.
    pub name: String,
    /// Number of elements.
    pub count: usize,
    /// Mean value.
    pub mean: f64,
    /// Standard deviation (population).
    pub std: f64,
    /// Minimum value.
    pub min: f64,
    /// Median value.
    pub median: f64,
    /// Maximum value.
    pub max: f64,
}

/// An enumerated label set for a categorical column stored as integer codes.
///
/// Code `k` maps to the k-th label.
///
/// # Examples
///
/// ```
/// use ajustar::data::Factor;
///
/// let transmission = Factor::new(&["automatic", "manual"]);
/// assert_eq!(transmission.level(1.0).expect("code 1 is in range"), "manual");
/// ```
#[derive(Debug, Clone)]
pub struct Factor {
    levels: Vec<String>,
}

impl Factor {
    /// Creates a factor from an ordered label set.
    #[must_use]
    pub fn new(levels: &[&str]) -> Self {
        Self {
            levels: levels.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Returns the label for an integer code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not a non-negative integer within
    /// the label set.
    pub fn level(&self, code: f64) -> Result<&str> {
        if code.fract() != 0.0 || code < 0.0 {
            return Err(AjustarError::Other(format!(
                "factor code {code} is not a non-negative integer"
            )));
        }
        let idx = code as usize;
        self.levels
            .get(idx)
            .map(String::as_str)
            .ok_or_else(|| {
                AjustarError::Other(format!(
                    "factor code {idx} out of range ({} levels)",
                    self.levels.len()
                ))
            })
    }

    /// Returns the ordered label set.
    #[must_use]
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Returns the number of levels.
    #[must_use]
    pub fn n_levels(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
