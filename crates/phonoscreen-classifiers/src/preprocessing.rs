//! Feature standardization for the SVM.
//!
//! Jitter lives around 1e-3 while HNR lives around 1e1, so the columns are
//! brought to zero mean / unit variance before fitting. The scaler is fitted
//! on the training rows only and then applied unchanged at prediction time.

use ndarray::{Array1, Array2, Axis};

use crate::data_handling::N_FEATURES;

/// Per-column mean/std standard scaler.
#[derive(Clone, Debug, PartialEq)]
pub struct Scaler {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
}

impl Scaler {
    /// Minimum stddev to avoid division by zero when transforming.
    const MIN_STD: f64 = 1e-9;

    /// Standardize every row of `x`.
    pub fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        let mut out = x.to_owned();
        out -= &self.mean;
        out /= &self.std;
        out
    }

    /// Standardize one feature row.
    pub fn transform_row(&self, row: &[f64; N_FEATURES]) -> [f64; N_FEATURES] {
        let mut out = *row;
        for (c, v) in out.iter_mut().enumerate() {
            *v = (*v - self.mean[c]) / self.std[c];
        }
        out
    }
}

/// Fit a `Scaler` on `x` where rows are samples and columns are features.
///
/// Uses the population standard deviation. Panics on an empty matrix; the
/// trainer checks sample counts before calling this.
pub(crate) fn fit_scaler(x: &Array2<f64>) -> Scaler {
    let (nrows, ncols) = x.dim();
    assert!(nrows > 0 && ncols > 0, "fit_scaler requires non-empty matrix");

    let mean = x.sum_axis(Axis(0)) / nrows as f64;
    let std = x
        .std_axis(Axis(0), 0.0)
        .mapv(|s| if s.is_finite() { s.max(Scaler::MIN_STD) } else { Scaler::MIN_STD });

    Scaler { mean, std }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn fit_scaler_computes_mean_and_std() {
        let x = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]];
        let sc = fit_scaler(&x);
        assert!((sc.mean[0] - 2.5).abs() < 1e-12);
        assert!((sc.mean[1] - 25.0).abs() < 1e-12);
        assert!((sc.std[0] - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn transform_centers_and_scales() {
        let x = array![[0.001, 0.01, 20.0], [0.003, 0.05, 30.0], [0.011, 0.09, 10.0]];
        let sc = fit_scaler(&x);
        let t = sc.transform(&x);
        for c in 0..3 {
            let col = t.column(c);
            let mean = col.sum() / 3.0;
            let var = col.mapv(|v| (v - mean) * (v - mean)).sum() / 3.0;
            assert!(mean.abs() < 1e-9, "column {} mean {}", c, mean);
            assert!((var - 1.0).abs() < 1e-9, "column {} var {}", c, var);
        }
        let row = sc.transform_row(&[0.003, 0.05, 30.0]);
        for c in 0..3 {
            assert!((row[c] - t[(1, c)]).abs() < 1e-12);
        }
    }

    #[test]
    fn constant_column_does_not_divide_by_zero() {
        let x = array![[1.0, 5.0, 0.0], [2.0, 5.0, 0.0]];
        let sc = fit_scaler(&x);
        let t = sc.transform(&x);
        assert!(t.iter().all(|v| v.is_finite()));
        assert_eq!(t[(0, 1)], 0.0);
    }
}
