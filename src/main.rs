//! Portfolio optimization and forecasting pipeline
//!
//! Prompts for comma-separated tickers and weights, fetches five years of
//! daily closes, prints the current portfolio's statistics, solves the
//! max-Sharpe and minimum-volatility portfolios on the efficient frontier,
//! then forecasts each optimized constituent 90 business days ahead.

use chrono::{Duration, Local};
use market_data::{ChartClient, PriceSeries, RiskFreeRateClient};
use portfolio_opt::{EfficientFrontier, PortfolioStatistics, ReturnPanel, WeightBounds};
use price_forecast::ForecastEngine;
use std::error::Error;
use std::io::{self, Write};

const LOOKBACK_YEARS: i64 = 5;
const FORECAST_HORIZON: usize = 90;

fn main() -> Result<(), Box<dyn Error>> {
    let (tickers, weights) = read_portfolio_input()?;

    let end = Local::now().date_naive();
    let start = end - Duration::days(LOOKBACK_YEARS * 365);

    let chart = ChartClient::new();
    let mut basket: Vec<(String, PriceSeries)> = Vec::with_capacity(tickers.len());
    for ticker in &tickers {
        println!("Fetching {} from {} to {}...", ticker, start, end);
        let series = chart.daily_closes(ticker, start, end)?;
        basket.push((ticker.clone(), series));
    }

    let panel = ReturnPanel::from_series(&basket)?;
    let risk_free = RiskFreeRateClient::new().ten_year_rate();

    let current = PortfolioStatistics::compute(&panel, &weights, risk_free)?;
    println!();
    println!("Current Portfolio Information:");
    print!("{}", current);
    println!("-------------------------------------------------------------------");

    let frontier = EfficientFrontier::new(&panel, WeightBounds::default())?;

    let max_sharpe = frontier.max_sharpe(risk_free)?;
    println!("{}", max_sharpe);
    println!("-------------------------------------------------------------------");

    let min_vol = frontier.min_volatility()?;
    println!("{}", min_vol);
    println!("-------------------------------------------------------------------");

    println!(
        "Forecasting for the optimized portfolio for the next {} business days...",
        FORECAST_HORIZON
    );
    let engine = ForecastEngine::new().horizon(FORECAST_HORIZON)?.trace(true);

    for ticker in max_sharpe.active_tickers() {
        let Some((_, series)) = basket.iter().find(|(t, _)| *t == ticker) else {
            continue;
        };

        println!();
        println!("Forecasting for {}...", ticker);
        let outcome = engine.forecast(series)?;

        let (p, d, q) = outcome.order;
        println!("Selected model: ARIMA({},{},{})", p, d, q);
        if let Some(holdout) = &outcome.holdout {
            print!("{}", holdout);
        }

        println!(
            "Forecast for {} (last close {:.2} on {}):",
            ticker,
            series.last_close(),
            series.last_date()
        );
        print!("{}", outcome.forecast);
    }

    Ok(())
}

/// Prompt for comma-separated tickers and weights on the console
fn read_portfolio_input() -> Result<(Vec<String>, Vec<f64>), Box<dyn Error>> {
    let tickers: Vec<String> = prompt("Please enter tickers separated by commas: ")?
        .split(',')
        .map(|t| t.trim().to_uppercase())
        .filter(|t| !t.is_empty())
        .collect();

    if tickers.is_empty() {
        return Err("No tickers provided".into());
    }

    let weights: Vec<f64> = prompt("Please enter weights separated by commas: ")?
        .split(',')
        .map(|w| w.trim().parse::<f64>())
        .collect::<Result<_, _>>()?;

    if weights.len() != tickers.len() {
        return Err(format!(
            "Got {} weights for {} tickers",
            weights.len(),
            tickers.len()
        )
        .into());
    }

    Ok((tickers, weights))
}

fn prompt(message: &str) -> Result<String, io::Error> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
