//! Property-style invariants over generated datasets.

use ajustar::prelude::*;
use proptest::prelude::*;

/// Deterministic, non-degenerate column derived from a seed.
fn seeded_column(n: usize, seed: u32, phase: f64) -> Vec<f64> {
    (0..n)
        .map(|i| ((i as f64 + f64::from(seed)) * 0.37 + phase).sin() * 10.0 + i as f64 * 0.5)
        .collect()
}

fn seeded_df(n: usize, seed: u32) -> DataFrame {
    // A curvature term keeps y out of the exact span of the x columns
    let y: Vec<f64> = seeded_column(n, seed, 4.1)
        .iter()
        .enumerate()
        .map(|(i, v)| v + 0.01 * (i * i) as f64)
        .collect();
    DataFrame::new(vec![
        ("x1".to_string(), Vector::from_vec(seeded_column(n, seed, 0.0))),
        ("x2".to_string(), Vector::from_vec(seeded_column(n, seed, 1.3))),
        ("x3".to_string(), Vector::from_vec(seeded_column(n, seed, 2.9))),
        ("y".to_string(), Vector::from_vec(y)),
    ])
    .expect("generated columns are rectangular")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Training-data R² of an OLS fit with intercept is in [0, 1].
    #[test]
    fn ols_r_squared_in_unit_interval(n in 8..=30usize, seed in 0..200u32) {
        let df = seeded_df(n, seed);
        let model = fit(&df, &ModelSpec::new("y", &["x1", "x2"]))
            .expect("seeded design is full rank");
        prop_assert!(model.r_squared() >= -1e-12);
        prop_assert!(model.r_squared() <= 1.0 + 1e-12);
        prop_assert_eq!(model.residuals().len(), n);
    }

    /// Growing the predictor set never lowers training-data R².
    #[test]
    fn adding_predictor_never_decreases_r_squared(n in 8..=30usize, seed in 0..200u32) {
        let df = seeded_df(n, seed);
        let small = fit(&df, &ModelSpec::new("y", &["x1"]))
            .expect("seeded design is full rank");
        let large = fit(&df, &ModelSpec::new("y", &["x1", "x2"]))
            .expect("seeded design is full rank");
        prop_assert!(large.r_squared() >= small.r_squared() - 1e-9);
    }

    /// Swapping the groups negates the statistic and the mean difference
    /// and leaves the p-value unchanged.
    #[test]
    fn welch_swap_symmetry(n1 in 2..=20usize, n2 in 2..=20usize, seed in 0..200u32) {
        let a = seeded_column(n1, seed, 0.0);
        let b = seeded_column(n2, seed, 2.2);

        let fwd = welch_ttest(&a, &b).expect("groups large enough");
        let rev = welch_ttest(&b, &a).expect("groups large enough");

        prop_assert!((fwd.statistic + rev.statistic).abs() < 1e-9);
        prop_assert!((fwd.mean_diff + rev.mean_diff).abs() < 1e-9);
        prop_assert!((fwd.pvalue - rev.pvalue).abs() < 1e-9);
        prop_assert!(fwd.pvalue >= 0.0 && fwd.pvalue <= 1.0);
    }

    /// Correlation matrices are symmetric with a unit diagonal.
    #[test]
    fn correlation_matrix_symmetric_unit_diagonal(n in 4..=30usize, seed in 0..200u32) {
        let df = seeded_df(n, seed);
        let cm = CorrelationMatrix::from_dataframe(&df).expect("seeded columns vary");
        let p = cm.names().len();
        for i in 0..p {
            prop_assert!((cm.values().get(i, i) - 1.0).abs() < 1e-12);
            for j in 0..p {
                prop_assert!((cm.values().get(i, j) - cm.values().get(j, i)).abs() < 1e-12);
                prop_assert!(cm.values().get(i, j).abs() <= 1.0 + 1e-12);
            }
        }
    }

    /// Every accepted stepwise move strictly lowers AIC, so the final
    /// model never scores worse than the starting model.
    #[test]
    fn stepwise_never_worsens_aic(n in 10..=30usize, seed in 0..100u32) {
        let df = seeded_df(n, seed);
        let result = StepwiseSelector::new("y")
            .select(&df)
            .expect("seeded starting model is feasible");
        prop_assert!(result.model.aic() <= result.steps[0].aic + 1e-12);
        for pair in result.steps.windows(2) {
            prop_assert!(pair[1].aic < pair[0].aic);
        }
    }
}
