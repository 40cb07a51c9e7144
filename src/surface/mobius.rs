//! The Möbius strip surface model.
//!
//! ```text
//! x = (R + v·cos(u/2))·cos(u)
//! y = (R + v·cos(u/2))·sin(u)
//! z = v·sin(u/2)
//! ```
//! with `u ∈ [0, 2π]` and `v ∈ [-w/2, w/2]`.

use super::{ParametricSurface, SampledSurface};
use crate::errors::{MobiusError, ensure_positive, ensure_resolution};
use crate::float_types::{Real, TAU, tolerance};
use crate::grid::{Grid2, ParamGrid};
use crate::triangulated::Triangulated3D;
use crate::vertex::Vertex;
use log::{debug, info};
use nalgebra::Point3;

/// Construction parameters of a [`MobiusStrip`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MobiusParams {
    /// Radius of the center circle `R`.
    pub radius: Real,
    /// Full strip width `w`; `v` spans `[-w/2, w/2]`.
    pub width: Real,
    /// Samples along `u`.
    pub resolution_u: usize,
    /// Samples along `v`.
    pub resolution_v: usize,
}

impl MobiusParams {
    /// Square `n × n` sampling.
    pub const fn new(radius: Real, width: Real, resolution: usize) -> Self {
        Self { radius, width, resolution_u: resolution, resolution_v: resolution }
    }

    /// Check every parameter without sampling anything.
    pub fn validate(&self) -> Result<(), MobiusError> {
        ensure_positive("radius", self.radius)?;
        ensure_positive("width", self.width)?;
        ensure_resolution("resolution_u", self.resolution_u)?;
        ensure_resolution("resolution_v", self.resolution_v)?;
        Ok(())
    }
}

impl Default for MobiusParams {
    /// `R = 1.0`, `w = 0.2`, `n = 200`
    fn default() -> Self {
        Self::new(1.0, 0.2, 200)
    }
}

/// The analytic Möbius parametrization, without any sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MobiusSurface {
    pub radius: Real,
    pub width: Real,
}

impl ParametricSurface for MobiusSurface {
    fn u_span(&self) -> (Real, Real) {
        (0.0, TAU)
    }

    fn v_span(&self) -> (Real, Real) {
        (-0.5 * self.width, 0.5 * self.width)
    }

    #[inline]
    fn eval(&self, u: Real, v: Real) -> Point3<Real> {
        let half = 0.5 * u;
        let r = self.radius + v * half.cos();
        Point3::new(r * u.cos(), r * u.sin(), v * half.sin())
    }
}

/// One of the two `v`-extreme grid rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// `v = -w/2`
    Lower,
    /// `v = +w/2`
    Upper,
}

/// A sampled Möbius strip with its surface area and edge length.
///
/// Everything is computed in [`MobiusStrip::from_params`]; the value is
/// immutable afterwards.
#[derive(Clone, Debug)]
pub struct MobiusStrip {
    params: MobiusParams,
    surface: MobiusSurface,
    samples: SampledSurface,
    surface_area: Real,
    edge_length: Real,
}

impl MobiusStrip {
    /// Strip of center radius `radius` and width `width`, sampled `n × n`.
    ///
    /// # Errors
    /// [`MobiusError::InvalidParameter`] when `radius <= 0`, `width <= 0`
    /// (or either is not finite), or `n < 2`.
    ///
    /// ```
    /// # use mobius_strip::MobiusStrip;
    /// let strip = MobiusStrip::new(1.0, 0.2, 101).unwrap();
    /// assert!(strip.surface_area() > 1.25);
    /// assert!(MobiusStrip::new(0.0, 0.2, 101).is_err());
    /// ```
    pub fn new(radius: Real, width: Real, n: usize) -> Result<Self, MobiusError> {
        Self::from_params(&MobiusParams::new(radius, width, n))
    }

    /// Strip sampled with `n_u` points around and `n_v` points across.
    pub fn with_resolution(
        radius: Real,
        width: Real,
        n_u: usize,
        n_v: usize,
    ) -> Result<Self, MobiusError> {
        Self::from_params(&MobiusParams { radius, width, resolution_u: n_u, resolution_v: n_v })
    }

    pub fn from_params(params: &MobiusParams) -> Result<Self, MobiusError> {
        params.validate()?;

        let surface = MobiusSurface { radius: params.radius, width: params.width };
        let samples = SampledSurface::sample(&surface, params.resolution_u, params.resolution_v)?;
        let surface_area = samples.surface_area();
        let edge_length = samples.row_length(samples.shape().0 - 1);
        debug!(
            "mobius R = {}, w = {}: area = {surface_area:.6}, edge = {edge_length:.6}",
            params.radius, params.width
        );

        Ok(Self { params: *params, surface, samples, surface_area, edge_length })
    }

    pub const fn params(&self) -> &MobiusParams {
        &self.params
    }

    pub const fn radius(&self) -> Real {
        self.params.radius
    }

    pub const fn width(&self) -> Real {
        self.params.width
    }

    /// The analytic surface this strip samples.
    pub const fn surface(&self) -> &MobiusSurface {
        &self.surface
    }

    /// Grid, point cloud and derivative fields.
    pub const fn samples(&self) -> &SampledSurface {
        &self.samples
    }

    pub const fn grid(&self) -> &ParamGrid {
        self.samples.grid()
    }

    pub const fn x(&self) -> &Grid2<Real> {
        self.samples.x()
    }

    pub const fn y(&self) -> &Grid2<Real> {
        self.samples.y()
    }

    pub const fn z(&self) -> &Grid2<Real> {
        self.samples.z()
    }

    /// Simpson estimate of `∬ |∂P/∂u × ∂P/∂v| du dv`.
    pub const fn surface_area(&self) -> Real {
        self.surface_area
    }

    /// Length of the `v = +w/2` boundary scanned once over `u ∈ [0, 2π]`.
    ///
    /// Because of the half twist this is half of the strip's single
    /// closed edge; see [`MobiusStrip::full_edge_length`].
    pub const fn edge_length(&self) -> Real {
        self.edge_length
    }

    /// Polyline length of one boundary row.
    pub fn boundary_length(&self, boundary: Boundary) -> Real {
        match boundary {
            Boundary::Upper => self.edge_length,
            Boundary::Lower => self.samples.row_length(0),
        }
    }

    /// Both boundary scans together: the full closed edge of the strip.
    pub fn full_edge_length(&self) -> Real {
        self.boundary_length(Boundary::Lower) + self.boundary_length(Boundary::Upper)
    }

    /// Triangle-sum area of the sampled mesh, independent of the Simpson estimate.
    pub fn mesh_area(&self) -> Real {
        self.samples.triangulated_area()
    }

    /// Largest distance between `P(2π, v)` and `P(0, -v)` over the sampled `v`.
    ///
    /// The half twist glues the last column to the first with the rows reversed.
    pub fn seam_error(&self) -> Real {
        let (rows, cols) = self.samples.shape();
        (0..rows)
            .map(|r| (self.samples.point(r, cols - 1) - self.samples.point(rows - 1 - r, 0)).norm())
            .fold(0.0, Real::max)
    }

    /// Whether [`MobiusStrip::seam_error`] is within the crate tolerance
    /// (scaled by the strip size).
    pub fn is_seam_closed(&self) -> bool {
        self.seam_error() <= tolerance() * (self.params.radius + self.params.width)
    }

    /// Log the headline numbers at `info` level.
    pub fn log_summary(&self) {
        info!(
            "Möbius strip R = {}, w = {}, {}x{} samples",
            self.params.radius, self.params.width, self.params.resolution_u, self.params.resolution_v
        );
        info!("surface area = {:.5}, edge length = {:.5}", self.surface_area, self.edge_length);
    }
}

impl Triangulated3D for MobiusStrip {
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        self.samples.visit_triangles(f)
    }

    fn triangle_count(&self) -> usize {
        self.samples.triangle_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_matches_parametrization() {
        let s = MobiusSurface { radius: 2.0, width: 1.0 };
        let p = s.eval(0.0, 0.5);
        assert!((p - Point3::new(2.5, 0.0, 0.0)).norm() < 1e-12);
        let q = s.eval(crate::float_types::PI, 0.5);
        assert!((q - Point3::new(-2.0, 0.0, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn validation_runs_before_sampling() {
        let params = MobiusParams { radius: 1.0, width: 0.2, resolution_u: 1, resolution_v: 50 };
        let err = params.validate().unwrap_err();
        assert_eq!(err.parameter(), "resolution_u");
    }
}
