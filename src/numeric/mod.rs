//! Finite differences and quadrature over uniformly sampled data.

mod gradient;
mod simpson;

pub use gradient::{gradient, gradient_cols, gradient_rows};
pub use simpson::{simpson, simpson_2d};
