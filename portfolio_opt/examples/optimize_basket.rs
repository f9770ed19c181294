//! Optimize a small basket from explicit annualized moments and print
//! both frontier portfolios

use portfolio_opt::{EfficientFrontier, WeightBounds};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tickers = vec!["EQ".to_string(), "BND".to_string(), "CMD".to_string()];
    let mu = vec![0.10, 0.04, 0.07];

    let vols = [0.15_f64, 0.20, 0.25];
    let corrs = [[1.0, 0.3, 0.1], [0.3, 1.0, 0.5], [0.1, 0.5, 1.0]];
    let mut cov = vec![vec![0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            cov[i][j] = corrs[i][j] * vols[i] * vols[j];
        }
    }

    let frontier = EfficientFrontier::with_moments(tickers, mu, cov, WeightBounds::default())?;
    let risk_free = 0.045;

    println!("{}", frontier.max_sharpe(risk_free)?);
    println!("-------------------------------------------------------------------");
    println!("{}", frontier.min_volatility()?);

    Ok(())
}
