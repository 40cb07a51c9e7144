//! Parametric surfaces and their sampled, integrable representation.
//!
//! A [`ParametricSurface`] maps a rectangular `(u, v)` domain into 3D.
//! [`SampledSurface::sample`] runs the numerical pipeline on it:
//!
//! 1. uniform `u`/`v` samples and their outer-product grid
//! 2. the point cloud `X, Y, Z`
//! 3. `∂P/∂u`, `∂P/∂v` by finite differences of the sampled fields
//! 4. the area element `|∂P/∂u × ∂P/∂v|` at every grid point
//!
//! Surface area is the iterated Simpson integral of the area elements.

pub mod mobius;

use crate::errors::{MobiusError, ensure_resolution};
use crate::float_types::Real;
use crate::grid::{Grid2, ParamGrid, linspace, meshgrid};
use crate::numeric::{gradient_cols, gradient_rows, simpson_2d};
use crate::triangulated::Triangulated3D;
use crate::vertex::Vertex;
use log::debug;
use nalgebra::{Point3, Vector3};

/// A surface given as the image of a `(u, v)` rectangle.
pub trait ParametricSurface {
    /// Closed interval covered by `u`.
    fn u_span(&self) -> (Real, Real);

    /// Closed interval covered by `v`.
    fn v_span(&self) -> (Real, Real);

    /// Position at `(u, v)`.
    fn eval(&self, u: Real, v: Real) -> Point3<Real>;
}

/// Eagerly computed samples of a [`ParametricSurface`].
///
/// Every grid-shaped field has `n_v` rows and `n_u` columns.
#[derive(Clone, Debug)]
pub struct SampledSurface {
    u: Vec<Real>,
    v: Vec<Real>,
    grid: ParamGrid,
    x: Grid2<Real>,
    y: Grid2<Real>,
    z: Grid2<Real>,
    d_du: Grid2<Vector3<Real>>,
    d_dv: Grid2<Vector3<Real>>,
    area_elements: Grid2<Real>,
    du: Real,
    dv: Real,
}

impl SampledSurface {
    /// Sample `surface` with `n_u` points along `u` and `n_v` along `v`.
    ///
    /// Both counts must be at least 2.
    pub fn sample<S: ParametricSurface + ?Sized>(
        surface: &S,
        n_u: usize,
        n_v: usize,
    ) -> Result<Self, MobiusError> {
        ensure_resolution("n_u", n_u)?;
        ensure_resolution("n_v", n_v)?;

        let (u0, u1) = surface.u_span();
        let (v0, v1) = surface.v_span();
        let u = linspace(u0, u1, n_u);
        let v = linspace(v0, v1, n_v);
        let du = (u1 - u0) / (n_u - 1) as Real;
        let dv = (v1 - v0) / (n_v - 1) as Real;

        let grid = meshgrid(&u, &v);
        let points = Grid2::from_fn(n_v, n_u, |r, c| surface.eval(grid.u[(r, c)], grid.v[(r, c)]));
        let x = points.map(|p| p.x);
        let y = points.map(|p| p.y);
        let z = points.map(|p| p.z);
        debug!("sampled {n_v}x{n_u} grid, du = {du:.6e}, dv = {dv:.6e}");

        let d_du = stack(&gradient_cols(&x, du), &gradient_cols(&y, du), &gradient_cols(&z, du));
        let d_dv = stack(&gradient_rows(&x, dv), &gradient_rows(&y, dv), &gradient_rows(&z, dv));

        let area_elements = Grid2::from_fn(n_v, n_u, |r, c| {
            d_du[(r, c)].cross(&d_dv[(r, c)]).norm()
        });
        debug!("area element field ready ({} samples)", n_u * n_v);
        if n_u % 2 == 0 || n_v % 2 == 0 {
            debug!("even sample count, last Simpson interval uses the trapezoid rule");
        }

        Ok(Self { u, v, grid, x, y, z, d_du, d_dv, area_elements, du, dv })
    }

    /// The 1D `u` samples (one per column).
    pub fn u(&self) -> &[Real] {
        &self.u
    }

    /// The 1D `v` samples (one per row).
    pub fn v(&self) -> &[Real] {
        &self.v
    }

    pub const fn grid(&self) -> &ParamGrid {
        &self.grid
    }

    pub const fn x(&self) -> &Grid2<Real> {
        &self.x
    }

    pub const fn y(&self) -> &Grid2<Real> {
        &self.y
    }

    pub const fn z(&self) -> &Grid2<Real> {
        &self.z
    }

    /// Spacing between consecutive `u` samples.
    pub const fn du(&self) -> Real {
        self.du
    }

    /// Spacing between consecutive `v` samples.
    pub const fn dv(&self) -> Real {
        self.dv
    }

    /// `(rows, cols)` = `(n_v, n_u)`
    pub const fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Finite-difference estimate of `∂P/∂u`.
    pub const fn partial_u(&self) -> &Grid2<Vector3<Real>> {
        &self.d_du
    }

    /// Finite-difference estimate of `∂P/∂v`.
    pub const fn partial_v(&self) -> &Grid2<Vector3<Real>> {
        &self.d_dv
    }

    /// `|∂P/∂u × ∂P/∂v|` at every grid point.
    pub const fn area_elements(&self) -> &Grid2<Real> {
        &self.area_elements
    }

    pub fn point(&self, row: usize, col: usize) -> Point3<Real> {
        Point3::new(self.x[(row, col)], self.y[(row, col)], self.z[(row, col)])
    }

    /// Unnormalized surface normal `∂P/∂u × ∂P/∂v`.
    pub fn normal(&self, row: usize, col: usize) -> Vector3<Real> {
        self.d_du[(row, col)].cross(&self.d_dv[(row, col)])
    }

    /// `∬ dA du dv`, integrating along `v` first, then along `u`.
    pub fn surface_area(&self) -> Real {
        simpson_2d(&self.area_elements, self.dv, self.du)
    }

    /// Polyline length of one grid row (a curve of constant `v`).
    pub fn row_length(&self, row: usize) -> Real {
        (1..self.x.cols())
            .map(|c| (self.point(row, c) - self.point(row, c - 1)).norm())
            .sum()
    }

    fn vertex(&self, row: usize, col: usize) -> Vertex {
        Vertex::new(self.point(row, col), self.normal(row, col))
    }
}

fn stack(x: &Grid2<Real>, y: &Grid2<Real>, z: &Grid2<Real>) -> Grid2<Vector3<Real>> {
    Grid2::from_fn(x.rows(), x.cols(), |r, c| Vector3::new(x[(r, c)], y[(r, c)], z[(r, c)]))
}

impl Triangulated3D for SampledSurface {
    /// Two triangles per grid cell, split along the `(r, c)`–`(r+1, c+1)` diagonal.
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        let (rows, cols) = self.shape();
        for r in 0..rows - 1 {
            for c in 0..cols - 1 {
                let v00 = self.vertex(r, c);
                let v01 = self.vertex(r, c + 1);
                let v10 = self.vertex(r + 1, c);
                let v11 = self.vertex(r + 1, c + 1);
                f([v00, v01, v11]);
                f([v00, v11, v10]);
            }
        }
    }

    fn triangle_count(&self) -> usize {
        let (rows, cols) = self.shape();
        2 * (rows - 1) * (cols - 1)
    }
}
