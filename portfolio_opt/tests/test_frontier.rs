use approx::assert_relative_eq;
use portfolio_opt::{EfficientFrontier, WeightBounds};

/// Asset A: 10% return, 20% vol; asset B: 6% return, 10% vol; corr 0.3
fn two_asset(bounds: WeightBounds) -> EfficientFrontier {
    let vol_a = 0.20;
    let vol_b = 0.10;
    let corr = 0.3;

    EfficientFrontier::with_moments(
        vec!["AAA".to_string(), "BBB".to_string()],
        vec![0.10, 0.06],
        vec![
            vec![vol_a * vol_a, corr * vol_a * vol_b],
            vec![corr * vol_a * vol_b, vol_b * vol_b],
        ],
        bounds,
    )
    .unwrap()
}

fn three_asset(bounds: WeightBounds) -> EfficientFrontier {
    let vols = [0.15, 0.20, 0.25];
    let corrs = [[1.0, 0.3, 0.1], [0.3, 1.0, 0.5], [0.1, 0.5, 1.0]];

    let mut cov = vec![vec![0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            cov[i][j] = corrs[i][j] * vols[i] * vols[j];
        }
    }

    EfficientFrontier::with_moments(
        vec!["EQ".to_string(), "BND".to_string(), "CMD".to_string()],
        vec![0.10, 0.04, 0.07],
        cov,
        bounds,
    )
    .unwrap()
}

fn weight_values(portfolio: &portfolio_opt::OptimizedPortfolio) -> Vec<f64> {
    portfolio.weights.iter().map(|(_, w)| *w).collect()
}

#[test]
fn test_weights_sum_to_one_within_bounds() {
    let frontier = three_asset(WeightBounds::default());
    let portfolio = frontier.max_sharpe(0.02).unwrap();

    let weights = weight_values(&portfolio);
    let total: f64 = weights.iter().sum();
    assert!((total - 1.0).abs() < 0.01, "weights sum to {}", total);

    for w in weights {
        assert!(w >= -0.001, "negative weight {}", w);
        assert!(w <= 0.501, "weight {} above the 50% cap", w);
    }
}

#[test]
fn test_min_volatility_has_lower_risk() {
    let frontier = three_asset(WeightBounds::default());
    let max_sharpe = frontier.max_sharpe(0.02).unwrap();
    let min_vol = frontier.min_volatility().unwrap();

    assert!(
        min_vol.performance.std_dev <= max_sharpe.performance.std_dev + 0.01,
        "min vol risk {} should not exceed tangency risk {}",
        min_vol.performance.std_dev,
        max_sharpe.performance.std_dev
    );
}

#[test]
fn test_tangency_has_higher_sharpe() {
    let risk_free = 0.02;
    let frontier = three_asset(WeightBounds::default());

    let max_sharpe = frontier.max_sharpe(risk_free).unwrap();
    let min_vol = frontier.min_volatility().unwrap();
    let min_vol_sharpe =
        (min_vol.performance.expected_return - risk_free) / min_vol.performance.std_dev;

    assert!(max_sharpe.performance.sharpe_ratio >= min_vol_sharpe - 0.01);
}

#[test]
fn test_unbounded_two_asset_tangency_is_analytic() {
    // Closed form for this fixture: w = [1/3, 2/3]
    let frontier = two_asset(WeightBounds::new(0.0, 1.0).unwrap());
    let portfolio = frontier.max_sharpe(0.02).unwrap();

    let weights = weight_values(&portfolio);
    assert_relative_eq!(weights[0], 1.0 / 3.0, epsilon = 1e-6);
    assert_relative_eq!(weights[1], 2.0 / 3.0, epsilon = 1e-6);
}

#[test]
fn test_two_assets_under_half_cap_split_evenly() {
    // With two assets capped at 50% each, the only full allocation is 50/50
    let frontier = two_asset(WeightBounds::default());
    let portfolio = frontier.max_sharpe(0.02).unwrap();

    let weights = weight_values(&portfolio);
    assert_relative_eq!(weights[0], 0.5, epsilon = 0.01);
    assert_relative_eq!(weights[1], 0.5, epsilon = 0.01);
}

#[test]
fn test_single_asset_takes_everything() {
    let frontier = EfficientFrontier::with_moments(
        vec!["ONLY".to_string()],
        vec![0.08],
        vec![vec![0.04]],
        WeightBounds::new(0.0, 1.0).unwrap(),
    )
    .unwrap();

    let portfolio = frontier.max_sharpe(0.02).unwrap();
    let weights = weight_values(&portfolio);
    assert_relative_eq!(weights[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(portfolio.performance.expected_return, 0.08, epsilon = 1e-9);
}

#[test]
fn test_infeasible_bounds_are_rejected() {
    // Two assets capped at 40% each cannot sum to a full portfolio
    let result = EfficientFrontier::with_moments(
        vec!["AAA".to_string(), "BBB".to_string()],
        vec![0.10, 0.06],
        vec![vec![0.04, 0.006], vec![0.006, 0.01]],
        WeightBounds::new(0.0, 0.4).unwrap(),
    );
    assert!(result.is_err());
}

#[test]
fn test_asymmetric_covariance_is_rejected() {
    let result = EfficientFrontier::with_moments(
        vec!["AAA".to_string(), "BBB".to_string()],
        vec![0.10, 0.06],
        vec![vec![0.04, 0.01], vec![0.006, 0.01]],
        WeightBounds::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_dimension_mismatch_is_rejected() {
    let result = EfficientFrontier::with_moments(
        vec!["AAA".to_string(), "BBB".to_string()],
        vec![0.10],
        vec![vec![0.04, 0.006], vec![0.006, 0.01]],
        WeightBounds::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_invalid_bounds_are_rejected() {
    assert!(WeightBounds::new(-0.1, 0.5).is_err());
    assert!(WeightBounds::new(0.5, 0.5).is_err());
    assert!(WeightBounds::new(0.0, 1.5).is_err());
}

#[test]
fn test_active_weights_filter_zero_allocations() {
    let frontier = three_asset(WeightBounds::default());
    let portfolio = frontier.max_sharpe(0.02).unwrap();

    for (_, weight) in portfolio.active_weights() {
        assert!(weight > 1e-4);
    }
}
