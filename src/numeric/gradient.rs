//! Numerical gradients of uniformly sampled fields.
//!
//! Interior samples use second-order central differences,
//! `(f[i+1] - f[i-1]) / 2h`; the first and last samples use first-order
//! forward and backward differences.

use crate::float_types::Real;
use crate::grid::Grid2;

/// Derivative estimate of `samples` taken with spacing `step`.
///
/// Fewer than two samples carry no slope information and give zeros.
pub fn gradient(samples: &[Real], step: Real) -> Vec<Real> {
    let n = samples.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let mut out = Vec::with_capacity(n);
    out.push((samples[1] - samples[0]) / step);
    for i in 1..n - 1 {
        out.push((samples[i + 1] - samples[i - 1]) / (2.0 * step));
    }
    out.push((samples[n - 1] - samples[n - 2]) / step);
    out
}

/// Gradient along each row, i.e. along the column index (the `u` axis).
pub fn gradient_cols(field: &Grid2<Real>, step: Real) -> Grid2<Real> {
    let mut out = Grid2::filled(field.rows(), field.cols(), 0.0);
    for r in 0..field.rows() {
        for (c, d) in gradient(field.row(r), step).into_iter().enumerate() {
            out[(r, c)] = d;
        }
    }
    out
}

/// Gradient along each column, i.e. along the row index (the `v` axis).
pub fn gradient_rows(field: &Grid2<Real>, step: Real) -> Grid2<Real> {
    let mut out = Grid2::filled(field.rows(), field.cols(), 0.0);
    for c in 0..field.cols() {
        for (r, d) in gradient(&field.column(c), step).into_iter().enumerate() {
            out[(r, c)] = d;
        }
    }
    out
}
