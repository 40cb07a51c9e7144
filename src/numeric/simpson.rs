//! Composite Simpson's rule on uniform samples.

use crate::float_types::Real;
use crate::grid::Grid2;

/// Integrate uniformly spaced `samples` (spacing `step`).
///
/// - odd sample count: plain composite Simpson's rule
/// - even sample count: Simpson's rule over all but the last interval,
///   the last interval closed with the trapezoid rule
/// - two samples: trapezoid rule
/// - fewer than two samples: zero
pub fn simpson(samples: &[Real], step: Real) -> Real {
    let n = samples.len();
    match n {
        0 | 1 => 0.0,
        2 => 0.5 * step * (samples[0] + samples[1]),
        _ => {
            let odd_len = if n % 2 == 1 { n } else { n - 1 };
            let body = &samples[..odd_len];

            let mut acc = body[0] + body[odd_len - 1];
            for (i, &y) in body.iter().enumerate().take(odd_len - 1).skip(1) {
                acc += if i % 2 == 1 { 4.0 * y } else { 2.0 * y };
            }
            let mut total = acc * step / 3.0;

            if odd_len < n {
                total += 0.5 * step * (samples[n - 2] + samples[n - 1]);
            }
            total
        },
    }
}

/// Iterated integral of `field` over its grid: along each column first
/// (row spacing `row_step`), then over the resulting per-column values
/// (column spacing `col_step`).
pub fn simpson_2d(field: &Grid2<Real>, row_step: Real, col_step: Real) -> Real {
    let per_column: Vec<Real> = (0..field.cols())
        .map(|c| simpson(&field.column(c), row_step))
        .collect();
    simpson(&per_column, col_step)
}
