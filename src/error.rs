//! Error types for Ajustar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Ajustar operations.
///
/// Provides detailed context about failures including rank-deficient
/// design matrices, degenerate sample sizes, and infeasible model searches.
///
/// # Examples
///
/// ```
/// use ajustar::error::AjustarError;
///
/// let err = AjustarError::SingularDesign { columns: 12, rows: 10 };
/// assert!(err.to_string().contains("rank-deficient"));
/// ```
#[derive(Debug)]
pub enum AjustarError {
    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// The design matrix (intercept plus predictors) is rank-deficient,
    /// so the least-squares solution is not unique.
    SingularDesign {
        /// Number of design matrix columns (parameters)
        columns: usize,
        /// Number of observations
        rows: usize,
    },

    /// A sample group is too small for the requested test.
    InsufficientSample {
        /// Group description (e.g., a factor level)
        group: String,
        /// Observations found
        n: usize,
        /// Observations required
        required: usize,
    },

    /// Stepwise search cannot fit its starting model.
    NoFeasibleModel {
        /// Response column of the failed search
        response: String,
    },

    /// Named column does not exist in the dataset.
    ColumnNotFound {
        /// Requested column name
        name: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AjustarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AjustarError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            AjustarError::SingularDesign { columns, rows } => {
                write!(
                    f,
                    "rank-deficient design matrix ({columns} columns, {rows} rows), \
                     least-squares solution is not unique"
                )
            }
            AjustarError::InsufficientSample { group, n, required } => {
                write!(
                    f,
                    "insufficient sample: group {group} has {n} observations, \
                     at least {required} required"
                )
            }
            AjustarError::NoFeasibleModel { response } => {
                write!(
                    f,
                    "no feasible model: the starting model for response '{response}' \
                     cannot be fitted"
                )
            }
            AjustarError::ColumnNotFound { name } => {
                write!(f, "column not found: '{name}'")
            }
            AjustarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AjustarError {}

impl From<&str> for AjustarError {
    fn from(msg: &str) -> Self {
        AjustarError::Other(msg.to_string())
    }
}

impl From<String> for AjustarError {
    fn from(msg: String) -> Self {
        AjustarError::Other(msg)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AjustarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = AjustarError::DimensionMismatch {
            expected: "32 rows".to_string(),
            actual: "31 rows".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("32 rows"));
        assert!(err.to_string().contains("31 rows"));
    }

    #[test]
    fn test_singular_design_display() {
        let err = AjustarError::SingularDesign {
            columns: 11,
            rows: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("rank-deficient"));
        assert!(msg.contains("11 columns"));
        assert!(msg.contains("10 rows"));
    }

    #[test]
    fn test_insufficient_sample_display() {
        let err = AjustarError::InsufficientSample {
            group: "manual".to_string(),
            n: 1,
            required: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("insufficient sample"));
        assert!(msg.contains("manual"));
        assert!(msg.contains("at least 2"));
    }

    #[test]
    fn test_no_feasible_model_display() {
        let err = AjustarError::NoFeasibleModel {
            response: "mpg".to_string(),
        };
        assert!(err.to_string().contains("no feasible model"));
        assert!(err.to_string().contains("mpg"));
    }

    #[test]
    fn test_column_not_found_display() {
        let err = AjustarError::ColumnNotFound {
            name: "hp2".to_string(),
        };
        assert!(err.to_string().contains("column not found"));
        assert!(err.to_string().contains("hp2"));
    }

    #[test]
    fn test_from_str() {
        let err: AjustarError = "test error".into();
        assert!(matches!(err, AjustarError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: AjustarError = "test error".to_string().into();
        assert!(matches!(err, AjustarError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_error_debug_impl() {
        let err = AjustarError::Other("test".to_string());
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("Other"));
    }

    #[test]
    fn test_error_source_is_none() {
        use std::error::Error;
        let err = AjustarError::Other("test".to_string());
        assert!(err.source().is_none());
    }
}
