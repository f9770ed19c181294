//! Price reconstruction from forecast returns

/// Compound a forecast return sequence forward from the last known price.
///
/// `price[i] = price[i-1] * (1 + returns[i])`, anchored at `last_price`.
/// The anchor itself is not included, so the output length equals the
/// input length. Empty input yields an empty path.
pub fn reconstruct_prices(last_price: f64, returns: &[f64]) -> Vec<f64> {
    let mut prices = Vec::with_capacity(returns.len());
    let mut current = last_price;

    for ret in returns {
        current *= 1.0 + ret;
        prices.push(current);
    }

    prices
}

/// The anchored price path: `start_price` followed by the compounded
/// sequence. Exact inverse of the pairwise return computation.
pub fn price_path(start_price: f64, returns: &[f64]) -> Vec<f64> {
    let mut path = Vec::with_capacity(returns.len() + 1);
    path.push(start_price);
    path.extend(reconstruct_prices(start_price, returns));
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_returns_are_a_no_op() {
        assert!(reconstruct_prices(100.0, &[]).is_empty());
        assert_eq!(price_path(100.0, &[]), vec![100.0]);
    }
}
