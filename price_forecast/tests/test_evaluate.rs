use approx::assert_relative_eq;
use market_data::pct_change;
use price_forecast::evaluate::{
    evaluate, mean_absolute_error, mean_squared_error, root_mean_squared_error,
};
use price_forecast::{price_path, reconstruct_prices};
use rstest::rstest;

#[test]
fn test_mean_absolute_error_example() {
    let actual = vec![1.0, 2.0, 3.0];
    let predicted = vec![1.0, 2.0, 4.0];

    let mae = mean_absolute_error(&actual, &predicted).unwrap();
    assert_relative_eq!(mae, 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_length_mismatch_is_an_error() {
    assert!(mean_absolute_error(&[1.0, 2.0], &[1.0]).is_err());
    assert!(mean_squared_error(&[], &[]).is_err());
}

#[test]
fn test_full_accuracy_report() {
    let actual = vec![10.0, 20.0, 30.0, 40.0, 50.0];
    let predicted = vec![12.0, 18.0, 33.0, 37.0, 52.0];

    let report = evaluate(&actual, &predicted).unwrap();
    assert_relative_eq!(report.mae, 2.8, epsilon = 1e-12);
    assert_relative_eq!(report.mse, 10.0, epsilon = 1e-12);
    assert_relative_eq!(report.rmse, 10.0_f64.sqrt(), epsilon = 1e-12);
    assert!(report.mape > 0.0);

    let rmse = root_mean_squared_error(&actual, &predicted).unwrap();
    assert_relative_eq!(report.rmse, rmse, epsilon = 1e-12);
}

#[test]
fn test_display_renders_metric_block() {
    let report = evaluate(&[1.0, 2.0], &[1.5, 2.5]).unwrap();
    let rendered = report.to_string();
    assert!(rendered.contains("MAE:"));
    assert!(rendered.contains("RMSE:"));
}

#[test]
fn test_reconstruct_example() {
    let path = price_path(100.0, &[0.01, -0.02]);
    assert_eq!(path.len(), 3);
    assert_relative_eq!(path[0], 100.0, epsilon = 1e-12);
    assert_relative_eq!(path[1], 101.0, epsilon = 1e-12);
    assert_relative_eq!(path[2], 98.98, epsilon = 1e-12);
}

#[test]
fn test_reconstruct_prices_excludes_anchor() {
    let prices = reconstruct_prices(100.0, &[0.01, -0.02]);
    assert_eq!(prices.len(), 2);
    assert_relative_eq!(prices[0], 101.0, epsilon = 1e-12);
    assert_relative_eq!(prices[1], 98.98, epsilon = 1e-12);
}

#[rstest]
#[case(vec![100.0, 101.0, 102.0, 99.0, 98.0])]
#[case(vec![50.0, 50.0, 49.5, 51.25])]
#[case(vec![10.0, 12.5])]
fn test_reconstruction_inverts_returns(#[case] prices: Vec<f64>) {
    let returns = pct_change(&prices);
    let rebuilt = price_path(prices[0], &returns);

    assert_eq!(rebuilt.len(), prices.len());
    for (original, rebuilt) in prices.iter().zip(&rebuilt) {
        assert_relative_eq!(*original, *rebuilt, epsilon = 1e-9);
    }
}
