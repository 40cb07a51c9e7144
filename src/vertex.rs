//! Mesh vertices handed to triangle consumers (STL export, rendering).

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A surface sample, holding position and normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `position` – the position in model space
    /// * `normal`   – (optionally non‑unit) normal; it is **copied
    ///                verbatim**, callers normalize when they need to.
    pub const fn new(position: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { position, normal }
    }
}
