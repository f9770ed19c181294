use approx::assert_relative_eq;
use chrono::NaiveDate;
use market_data::{pct_change, PricePoint, PriceSeries};
use pretty_assertions::assert_eq;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn series(dates: &[&str], closes: &[f64]) -> PriceSeries {
    let dates = dates.iter().map(|s| s.parse().unwrap()).collect();
    PriceSeries::from_parts(dates, closes.to_vec()).unwrap()
}

#[test]
fn test_returns_length_and_values() {
    let prices = series(
        &["2023-01-02", "2023-01-03", "2023-01-04", "2023-01-05", "2023-01-06"],
        &[100.0, 101.0, 102.0, 99.0, 98.0],
    );

    let returns = prices.returns();
    assert_eq!(returns.len(), prices.len() - 1);

    let values = returns.values();
    assert_relative_eq!(values[0], 0.01, epsilon = 1e-10);
    assert_relative_eq!(values[1], 0.009_900_990_099_009_901, epsilon = 1e-10);
    assert_relative_eq!(values[2], -0.029_411_764_705_882_36, epsilon = 1e-10);
    assert_relative_eq!(values[3], -0.010_101_010_101_010_166, epsilon = 1e-10);
}

#[test]
fn test_return_dates_follow_later_observation() {
    let prices = series(&["2023-01-02", "2023-01-03", "2023-01-04"], &[10.0, 11.0, 12.1]);

    let returns = prices.returns();
    let dates: Vec<NaiveDate> = returns.points().iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![date("2023-01-03"), date("2023-01-04")]);
}

#[test]
fn test_single_observation_has_empty_returns() {
    let prices = series(&["2023-01-02"], &[100.0]);
    assert!(prices.returns().is_empty());
}

#[test]
fn test_pct_change_matches_series_returns() {
    let prices = series(
        &["2023-01-02", "2023-01-03", "2023-01-04"],
        &[100.0, 104.0, 101.0],
    );

    assert_eq!(pct_change(&prices.closes()), prices.returns().values());
}

#[test]
fn test_from_parts_rejects_length_mismatch() {
    let dates = vec![date("2023-01-02"), date("2023-01-03")];
    assert!(PriceSeries::from_parts(dates, vec![100.0]).is_err());
}

#[test]
fn test_construction_rejects_unordered_dates() {
    let points = vec![
        PricePoint { date: date("2023-01-04"), close: 100.0 },
        PricePoint { date: date("2023-01-03"), close: 101.0 },
        PricePoint { date: date("2023-01-05"), close: 102.0 },
    ];
    assert!(PriceSeries::new(points).is_err());
}

#[test]
fn test_last_accessors() {
    let prices = series(&["2023-01-02", "2023-01-03"], &[100.0, 105.5]);
    assert_eq!(prices.last_close(), 105.5);
    assert_eq!(prices.last_date(), date("2023-01-03"));
}
