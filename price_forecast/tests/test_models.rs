use price_forecast::models::arima::ArimaModel;
use price_forecast::models::{ForecastModel, TrainedForecastModel};
use price_forecast::{AutoArima, ForecastError};
use rstest::rstest;

/// A gently trending series with a cyclical component, long enough for
/// every candidate in the default grid
fn synthetic_series(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + 0.3 * i as f64 + 2.0 * (i as f64 * 0.4).sin())
        .collect()
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(30)]
fn test_search_respects_horizon(#[case] horizon: usize) {
    let data = synthetic_series(60);
    let best = AutoArima::default().search(&data).unwrap();

    let forecast = best.forecast(horizon).unwrap();
    assert_eq!(forecast.values().len(), horizon);
    assert_eq!(forecast.horizon(), horizon);
}

#[test]
fn test_search_fails_on_short_series() {
    let data = vec![100.0, 101.0, 99.5];
    let result = AutoArima::default().search(&data);
    assert!(matches!(result, Err(ForecastError::ModelFit(_))));
}

#[test]
fn test_search_selects_an_order_within_the_grid() {
    let data = synthetic_series(120);
    let best = AutoArima::new(3, 1, 3).unwrap().search(&data).unwrap();

    let (p, d, q) = best.order();
    assert!(p <= 3);
    assert!(d <= 1);
    assert!(q <= 3);
}

#[test]
fn test_grid_validation() {
    assert!(AutoArima::new(11, 1, 1).is_err());
    assert!(AutoArima::new(1, 3, 1).is_err());
    assert!(AutoArima::new(1, 1, 11).is_err());
}

#[test]
fn test_forecast_values_are_finite() {
    let data = synthetic_series(80);
    let best = AutoArima::default().search(&data).unwrap();

    let forecast = best.forecast(60).unwrap();
    assert!(forecast.values().iter().all(|v| v.is_finite()));
}

#[test]
fn test_confidence_intervals_bracket_the_forecast() {
    let data = synthetic_series(60);
    let model = ArimaModel::new(2, 1, 1).unwrap();
    let trained = model.fit(&data).unwrap();

    let forecast = trained.forecast(10).unwrap();
    let intervals = forecast
        .confidence_intervals(0.95, trained.residual_std())
        .unwrap();

    assert_eq!(intervals.len(), forecast.horizon());
    for (value, (lower, upper)) in forecast.values().iter().zip(&intervals) {
        assert!(lower <= value && value <= upper);
    }

    let with_intervals = forecast.with_intervals(intervals).unwrap();
    assert!(with_intervals.intervals().is_some());
}

#[test]
fn test_invalid_confidence_level() {
    let data = synthetic_series(60);
    let trained = ArimaModel::new(1, 0, 0).unwrap().fit(&data).unwrap();
    let forecast = trained.forecast(5).unwrap();

    assert!(forecast.confidence_intervals(0.0, 1.0).is_err());
    assert!(forecast.confidence_intervals(1.0, 1.0).is_err());
}
