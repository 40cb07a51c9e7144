/// A trait for any shape which can be represented by triangles
use crate::float_types::Real;
use crate::vertex::Vertex;

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each triangle.
    ///
    /// The triangle is `[v0, v1, v2]` with positions+normals.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]);

    /// Number of triangles `visit_triangles` produces.
    fn triangle_count(&self) -> usize {
        let mut count = 0;
        self.visit_triangles(|_| count += 1);
        count
    }

    /// Sum of the triangle areas (half the norm of each edge cross product).
    fn triangulated_area(&self) -> Real {
        let mut total_area = 0.0;
        self.visit_triangles(|[a, b, c]| {
            let edge1 = b.position - a.position;
            let edge2 = c.position - a.position;
            total_area += edge1.cross(&edge2).norm() * 0.5;
        });
        total_area
    }
}
