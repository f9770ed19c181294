//! Small dense-matrix helpers for the optimizer

use crate::error::{OptimizeError, Result};

/// Dot product
pub(crate) fn vec_dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Matrix-vector multiplication
pub(crate) fn mat_vec_multiply(mat: &[Vec<f64>], v: &[f64]) -> Vec<f64> {
    mat.iter().map(|row| vec_dot(row, v)).collect()
}

/// Portfolio standard deviation: `sqrt(w' * Sigma * w)`
pub(crate) fn portfolio_std(w: &[f64], sigma: &[Vec<f64>]) -> f64 {
    let sigma_w = mat_vec_multiply(sigma, w);
    vec_dot(w, &sigma_w).max(0.0).sqrt()
}

/// Matrix inverse via Gauss-Jordan with partial pivoting
pub(crate) fn mat_inverse(mat: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let n = mat.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut aug: Vec<Vec<f64>> = Vec::with_capacity(n);
    for (i, source) in mat.iter().enumerate() {
        let mut row = Vec::with_capacity(2 * n);
        row.extend_from_slice(source);
        for j in 0..n {
            row.push(if i == j { 1.0 } else { 0.0 });
        }
        aug.push(row);
    }

    for col in 0..n {
        let mut max_row = col;
        let mut max_val = aug[col][col].abs();
        for (row, candidate) in aug.iter().enumerate().skip(col + 1) {
            let val = candidate[col].abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val < 1e-12 {
            return Err(OptimizeError::MathError(
                "Singular covariance matrix cannot be inverted".to_string(),
            ));
        }

        if max_row != col {
            aug.swap(col, max_row);
        }

        let pivot = aug[col][col];
        for cell in aug[col].iter_mut() {
            *cell /= pivot;
        }

        let pivot_row = aug[col].clone();
        for (row, target) in aug.iter_mut().enumerate() {
            if row == col {
                continue;
            }
            let factor = target[col];
            for (cell, &pv) in target.iter_mut().zip(pivot_row.iter()) {
                *cell -= factor * pv;
            }
        }
    }

    Ok(aug.iter().map(|row| row[n..].to_vec()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_dot() {
        assert_eq!(vec_dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    }

    #[test]
    fn test_inverse_times_original_is_identity() {
        let a = vec![vec![2.0, 1.0], vec![5.0, 3.0]];
        let inv = mat_inverse(&a).unwrap();

        for i in 0..2 {
            for j in 0..2 {
                let cell: f64 = (0..2).map(|k| a[i][k] * inv[k][j]).sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((cell - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_singular_matrix_is_rejected() {
        let a = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
        assert!(mat_inverse(&a).is_err());
    }
}
