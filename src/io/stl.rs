use super::IoError;
use crate::float_types::Real;
use crate::triangulated::Triangulated3D;
use crate::vertex::Vertex;
use log::info;
use nalgebra::Vector3;
use std::io::Cursor;
use std::path::Path;

/// Unit facet normal from the triangle winding; zero for degenerate triangles.
fn facet_normal(tri: &[Vertex; 3]) -> Vector3<Real> {
    let n = (tri[1].position - tri[0].position).cross(&(tri[2].position - tri[0].position));
    n.try_normalize(Real::EPSILON).unwrap_or_else(Vector3::zeros)
}

/// Export to ASCII STL
/// Convert any triangulated shape to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use mobius_strip::{MobiusStrip, io::to_stl_ascii};
/// let strip = MobiusStrip::new(1.0, 0.2, 16).unwrap();
/// let text = to_stl_ascii(&strip, "mobius");
/// assert!(text.starts_with("solid mobius"));
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.position;
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Size of the free-form header that opens a binary STL file.
const STL_HEADER_LEN: usize = 80;

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// `name` is written into the 80 byte header, truncated to fit.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T, name: &str) -> Result<Vec<u8>, IoError> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::with_capacity(shape.triangle_count());

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|v| {
                    let p = v.position;
                    Vertex::new([p.x as f32, p.y as f32, p.z as f32])
                }),
            });
        }
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    let mut bytes = cursor.into_inner();

    let label = &name.as_bytes()[..name.len().min(STL_HEADER_LEN)];
    bytes[..label.len()].copy_from_slice(label);
    Ok(bytes)
}

/// Write `shape` to `path`: `.stl` files ending in `ascii.stl` (case-insensitive)
/// get the text format, everything else the binary one.
pub fn write_stl_file<T: Triangulated3D>(shape: &T, name: &str, path: &Path) -> Result<(), IoError> {
    let file_name = path
        .file_name()
        .and_then(|f| f.to_str())
        .ok_or_else(|| IoError::MalformedPath(path.display().to_string()))?;

    if file_name.to_ascii_lowercase().ends_with("ascii.stl") {
        std::fs::write(path, to_stl_ascii(shape, name))?;
    } else {
        std::fs::write(path, to_stl_binary(shape, name)?)?;
    }
    info!("wrote {} triangles to {}", shape.triangle_count(), path.display());
    Ok(())
}
