//! Statistical hypothesis testing.
//!
//! Implements Welch's two-sample t-test for comparing group means without
//! assuming equal variances.
//!
//! # Example
//!
//! ```
//! use ajustar::stats::hypothesis::welch_ttest;
//!
//! let group1 = [2.3, 2.5, 2.7, 2.9, 3.1];
//! let group2 = [3.2, 3.4, 3.6, 3.8, 4.0];
//!
//! let result = welch_ttest(&group1, &group2).expect("valid t-test inputs");
//! assert!(result.pvalue < 0.05);
//! ```

use crate::error::{AjustarError, Result};
use crate::stats::distribution::student_t_pvalue;
use serde::Serialize;

/// Result of Welch's two-sample t-test.
#[derive(Debug, Clone, Serialize)]
pub struct WelchTTest {
    /// Mean of the first group
    pub mean1: f64,

    /// Mean of the second group
    pub mean2: f64,

    /// Difference of means (mean1 - mean2)
    pub mean_diff: f64,

    /// t-statistic
    pub statistic: f64,

    /// Welch-Satterthwaite degrees of freedom
    pub df: f64,

    /// p-value (two-tailed)
    pub pvalue: f64,

    /// First group size
    pub n1: usize,

    /// Second group size
    pub n2: usize,
}

/// Welch's t-test: tests if two independent samples have different means,
/// without assuming equal variances.
///
/// H₀: μ₁ = μ₂
/// H₁: μ₁ ≠ μ₂
///
/// # Arguments
///
/// * `sample1` - First sample
/// * `sample2` - Second sample
///
/// # Returns
///
/// [`WelchTTest`] with group means, mean difference, statistic,
/// degrees of freedom, and two-sided p-value.
///
/// # Errors
///
/// Returns [`AjustarError::InsufficientSample`] if either group has fewer
/// than 2 observations, or [`AjustarError::Other`] if both groups are
/// constant (zero variance), leaving the statistic undefined.
pub fn welch_ttest(sample1: &[f64], sample2: &[f64]) -> Result<WelchTTest> {
    let n1 = sample1.len();
    let n2 = sample2.len();

    for (group, n) in [("1", n1), ("2", n2)] {
        if n < 2 {
            return Err(AjustarError::InsufficientSample {
                group: group.to_string(),
                n,
                required: 2,
            });
        }
    }

    let mean1 = sample1.iter().sum::<f64>() / n1 as f64;
    let mean2 = sample2.iter().sum::<f64>() / n2 as f64;

    // Sample variances (n - 1 denominator)
    let var1 = sample1.iter().map(|&x| (x - mean1).powi(2)).sum::<f64>() / (n1 - 1) as f64;
    let var2 = sample2.iter().map(|&x| (x - mean2).powi(2)).sum::<f64>() / (n2 - 1) as f64;

    let se1 = var1 / n1 as f64;
    let se2 = var2 / n2 as f64;
    let se = (se1 + se2).sqrt();

    // Two constant groups leave the statistic and df undefined (0/0)
    if se == 0.0 {
        return Err(AjustarError::Other(
            "both groups have zero variance, t-statistic is undefined".to_string(),
        ));
    }

    let mean_diff = mean1 - mean2;
    let statistic = mean_diff / se;

    // Welch-Satterthwaite approximation
    let df = (se1 + se2).powi(2)
        / (se1.powi(2) / (n1 - 1) as f64 + se2.powi(2) / (n2 - 1) as f64);

    let pvalue = student_t_pvalue(statistic, df);

    Ok(WelchTTest {
        mean1,
        mean2,
        mean_diff,
        statistic,
        df,
        pvalue,
        n1,
        n2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_groups_give_zero_statistic() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let result = welch_ttest(&a, &a).expect("valid inputs");
        assert!(result.statistic.abs() < 1e-12);
        assert!(result.mean_diff.abs() < 1e-12);
        assert!((result.pvalue - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_clearly_separated_groups() {
        let a = [1.0, 1.1, 0.9, 1.05, 0.95];
        let b = [10.0, 10.1, 9.9, 10.05, 9.95];
        let result = welch_ttest(&a, &b).expect("valid inputs");
        assert!(result.pvalue < 1e-6);
        assert!(result.statistic < 0.0);
        assert!((result.mean_diff - (-9.0)).abs() < 1e-9);
    }

    #[test]
    fn test_group_swap_negates_statistic_preserves_pvalue() {
        let a = [2.3, 2.5, 2.7, 2.9, 3.1];
        let b = [3.2, 3.4, 3.9, 4.1, 4.4];
        let ab = welch_ttest(&a, &b).expect("valid inputs");
        let ba = welch_ttest(&b, &a).expect("valid inputs");

        assert!((ab.statistic + ba.statistic).abs() < 1e-12);
        assert!((ab.mean_diff + ba.mean_diff).abs() < 1e-12);
        assert!((ab.pvalue - ba.pvalue).abs() < 1e-12);
        assert!((ab.df - ba.df).abs() < 1e-12);
    }

    #[test]
    fn test_two_constant_groups_rejected() {
        // 0/0 statistic: no defensible p-value exists for this input
        let a = [5.0, 5.0, 5.0];
        let result = welch_ttest(&a, &a);
        assert!(matches!(result, Err(AjustarError::Other(_))));

        let b = [3.0, 3.0];
        assert!(welch_ttest(&a, &b).is_err());
    }

    #[test]
    fn test_one_constant_group_is_fine() {
        let a = [5.0, 5.0, 5.0];
        let b = [1.0, 2.0, 3.0];
        let result = welch_ttest(&a, &b).expect("one group still varies");
        assert!(result.statistic.is_finite());
        assert!(result.df >= 1.0);
        assert!(result.pvalue > 0.0 && result.pvalue <= 1.0);
    }

    #[test]
    fn test_insufficient_sample() {
        let a = [1.0];
        let b = [1.0, 2.0, 3.0];
        let result = welch_ttest(&a, &b);
        assert!(matches!(
            result,
            Err(AjustarError::InsufficientSample { n: 1, .. })
        ));

        let result = welch_ttest(&b, &a);
        assert!(matches!(
            result,
            Err(AjustarError::InsufficientSample { n: 1, .. })
        ));
    }

    #[test]
    fn test_reports_group_means_and_sizes() {
        let a = [2.0, 4.0];
        let b = [1.0, 2.0, 3.0];
        let result = welch_ttest(&a, &b).expect("valid inputs");
        assert!((result.mean1 - 3.0).abs() < 1e-12);
        assert!((result.mean2 - 2.0).abs() < 1e-12);
        assert_eq!(result.n1, 2);
        assert_eq!(result.n2, 3);
    }

    #[test]
    fn test_welch_df_below_pooled_df() {
        // With unequal variances and sizes, Welch df < n1 + n2 - 2
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [10.0, 30.0, 50.0];
        let result = welch_ttest(&a, &b).expect("valid inputs");
        assert!(result.df < (a.len() + b.len() - 2) as f64);
        assert!(result.df >= 1.0);
    }
}
