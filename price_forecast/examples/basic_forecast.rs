//! Fit a forecast on a synthetic price series and print the result

use chrono::NaiveDate;
use market_data::PriceSeries;
use price_forecast::utils::is_business_day;
use price_forecast::{ForecastEngine, ForecastTarget};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let observations = 120;

    let start: NaiveDate = "2023-01-02".parse()?;
    let mut dates = Vec::with_capacity(observations);
    let mut current = start;
    while dates.len() < observations {
        if is_business_day(current) {
            dates.push(current);
        }
        current = current.succ_opt().ok_or("date overflow")?;
    }

    let closes: Vec<f64> = (0..observations)
        .map(|i| 100.0 + 0.2 * i as f64 + (i as f64 * 0.3).sin())
        .collect();
    let series = PriceSeries::from_parts(dates, closes)?;

    let engine = ForecastEngine::new()
        .horizon(10)?
        .target(ForecastTarget::Returns)
        .trace(true);
    let outcome = engine.forecast(&series)?;

    let (p, d, q) = outcome.order;
    println!("Selected model: ARIMA({},{},{})", p, d, q);
    if let Some(holdout) = &outcome.holdout {
        print!("{}", holdout);
    }
    print!("{}", outcome.forecast);

    Ok(())
}
