//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use mobius_strip::{ParametricSurface, float_types::Real, float_types::TAU};
use nalgebra::Point3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Relative comparison: `|a - b| <= rel * |b|`.
pub fn rel_eq(a: Real, b: Real, rel: Real) -> bool {
    (a - b).abs() <= rel * b.abs()
}

/// Open cylinder of radius `radius` and height `height`; area `2π·r·h`.
pub struct Cylinder {
    pub radius: Real,
    pub height: Real,
}

impl ParametricSurface for Cylinder {
    fn u_span(&self) -> (Real, Real) {
        (0.0, TAU)
    }

    fn v_span(&self) -> (Real, Real) {
        (0.0, self.height)
    }

    fn eval(&self, u: Real, v: Real) -> Point3<Real> {
        Point3::new(self.radius * u.cos(), self.radius * u.sin(), v)
    }
}

/// Axis-aligned rectangle in the XY plane, `[0, a] × [0, b]`.
pub struct Rectangle {
    pub a: Real,
    pub b: Real,
}

impl ParametricSurface for Rectangle {
    fn u_span(&self) -> (Real, Real) {
        (0.0, self.a)
    }

    fn v_span(&self) -> (Real, Real) {
        (0.0, self.b)
    }

    fn eval(&self, u: Real, v: Real) -> Point3<Real> {
        Point3::new(u, v, 0.0)
    }
}
