//! Software rendering of a sampled surface to a raster image.
//!
//! Orthographic camera given by elevation/azimuth (degrees), z-buffered
//! triangle fill, faces colored by height through a viridis ramp and shaded
//! two-sided (a Möbius strip has no consistent outside), plus a sparse grid
//! line overlay.

use crate::float_types::Real;
use crate::io::IoError;
use crate::surface::SampledSurface;
use image::{Rgb, RgbImage};
use log::{debug, info};
use nalgebra::{Point3, Vector3};
use std::path::Path;

/// Minimum on-screen distance between neighboring grid lines, pixels.
const MIN_LINE_SPACING_PX: Real = 6.0;

/// Camera and output settings for [`render`].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Camera elevation above the XY plane, degrees.
    pub elevation_deg: Real,
    /// Camera azimuth around Z, degrees.
    pub azimuth_deg: Real,
    /// Overlay grid lines.
    pub edges: bool,
    pub background: [u8; 3],
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            elevation_deg: 30.0,
            azimuth_deg: -60.0,
            edges: true,
            background: [255, 255, 255],
        }
    }
}

/// Viridis sampled at nine evenly spaced stops.
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

/// Linear interpolation through [`VIRIDIS`]; `t` is clamped to `[0, 1]`.
pub fn viridis(t: Real) -> [Real; 3] {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as Real;
    let i = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let f = scaled - i as Real;
    let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
    [0, 1, 2].map(|k| a[k] as Real + (b[k] as Real - a[k] as Real) * f)
}

/// Orthographic view: screen right, screen up, and the direction towards the viewer.
struct Camera {
    right: Vector3<Real>,
    up: Vector3<Real>,
    toward_eye: Vector3<Real>,
    scale: Real,
    offset: (Real, Real),
    height: Real,
}

impl Camera {
    fn new(opts: &RenderOptions) -> Self {
        let elev = opts.elevation_deg.to_radians();
        let azim = opts.azimuth_deg.to_radians();
        let toward_eye = Vector3::new(elev.cos() * azim.cos(), elev.cos() * azim.sin(), elev.sin());
        let right = Vector3::new(-azim.sin(), azim.cos(), 0.0);
        let up = toward_eye.cross(&right);
        Self { right, up, toward_eye, scale: 1.0, offset: (0.0, 0.0), height: opts.height as Real }
    }

    /// Scale and center so all `points` fit with a 5% margin.
    fn fit(&mut self, points: &[Point3<Real>], width: Real, height: Real) {
        let (mut min_x, mut min_y) = (Real::MAX, Real::MAX);
        let (mut max_x, mut max_y) = (Real::MIN, Real::MIN);
        for p in points {
            let (x, y) = (p.coords.dot(&self.right), p.coords.dot(&self.up));
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        let span = (max_x - min_x).max(max_y - min_y).max(Real::EPSILON);
        self.scale = 0.9 * width.min(height) / span;
        let cx = 0.5 * (min_x + max_x);
        let cy = 0.5 * (min_y + max_y);
        self.offset = (0.5 * width - cx * self.scale, 0.5 * height - cy * self.scale);
    }

    /// Pixel coordinates (y down) and depth (larger is closer).
    fn project(&self, p: &Point3<Real>) -> (Real, Real, Real) {
        let sx = p.coords.dot(&self.right) * self.scale + self.offset.0;
        let sy = p.coords.dot(&self.up) * self.scale + self.offset.1;
        (sx, self.height - sy, p.coords.dot(&self.toward_eye))
    }
}

struct Canvas {
    image: RgbImage,
    depth: Vec<Real>,
}

impl Canvas {
    fn new(width: u32, height: u32, background: [u8; 3]) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(background)),
            depth: vec![Real::MIN; (width * height) as usize],
        }
    }

    fn plot(&mut self, x: i64, y: i64, z: Real, color: Rgb<u8>, bias: Real) {
        let (w, h) = (self.image.width() as i64, self.image.height() as i64);
        if x < 0 || y < 0 || x >= w || y >= h {
            return;
        }
        let idx = (y * w + x) as usize;
        if z + bias >= self.depth[idx] {
            self.depth[idx] = self.depth[idx].max(z);
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    fn fill_triangle(&mut self, v: [(Real, Real, Real); 3], color: Rgb<u8>) {
        let edge = |a: (Real, Real, Real), b: (Real, Real, Real), px: Real, py: Real| {
            (b.0 - a.0) * (py - a.1) - (b.1 - a.1) * (px - a.0)
        };
        let area = edge(v[0], v[1], v[2].0, v[2].1);
        if area.abs() < Real::EPSILON {
            return;
        }

        let min_x = v.iter().map(|p| p.0).fold(Real::MAX, Real::min).floor().max(0.0) as i64;
        let max_x = v.iter().map(|p| p.0).fold(Real::MIN, Real::max).ceil() as i64;
        let min_y = v.iter().map(|p| p.1).fold(Real::MAX, Real::min).floor().max(0.0) as i64;
        let max_y = v.iter().map(|p| p.1).fold(Real::MIN, Real::max).ceil() as i64;
        let max_x = max_x.min(self.image.width() as i64 - 1);
        let max_y = max_y.min(self.image.height() as i64 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let (px, py) = (x as Real + 0.5, y as Real + 0.5);
                let w0 = edge(v[1], v[2], px, py) / area;
                let w1 = edge(v[2], v[0], px, py) / area;
                let w2 = edge(v[0], v[1], px, py) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }
                let z = w0 * v[0].2 + w1 * v[1].2 + w2 * v[2].2;
                self.plot(x, y, z, color, 0.0);
            }
        }
    }

    fn line(&mut self, a: (Real, Real, Real), b: (Real, Real, Real), color: Rgb<u8>, bias: Real) {
        let steps = ((b.0 - a.0).abs().max((b.1 - a.1).abs()) * 2.0).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as Real / steps as Real;
            let x = a.0 + (b.0 - a.0) * t;
            let y = a.1 + (b.1 - a.1) * t;
            let z = a.2 + (b.2 - a.2) * t;
            self.plot(x.floor() as i64, y.floor() as i64, z, color, bias);
        }
    }
}

fn to_rgb(c: [Real; 3], shade: Real) -> Rgb<u8> {
    Rgb(c.map(|k| (k * shade).round().clamp(0.0, 255.0) as u8))
}

/// Mean screen distance between grid neighbors one `step = (dr, dc)` apart.
fn mean_spacing(projected: &[(Real, Real, Real)], rows: usize, cols: usize, step: (usize, usize)) -> Real {
    let (dr, dc) = step;
    let mut total = 0.0;
    let mut count = 0usize;
    for r in 0..rows - dr {
        for c in 0..cols - dc {
            let a = projected[r * cols + c];
            let b = projected[(r + dr) * cols + c + dc];
            total += ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
            count += 1;
        }
    }
    if count == 0 { 0.0 } else { total / count as Real }
}

/// Every how many grid rows (or columns) a line is drawn.
fn line_stride(spacing_px: Real) -> usize {
    if spacing_px >= MIN_LINE_SPACING_PX {
        1
    } else if spacing_px > Real::EPSILON {
        (MIN_LINE_SPACING_PX / spacing_px).ceil() as usize
    } else {
        usize::MAX
    }
}

/// Rasterize `surface` into a new image.
pub fn render(surface: &SampledSurface, opts: &RenderOptions) -> RgbImage {
    let width = opts.width.max(1);
    let height = opts.height.max(1);
    let (rows, cols) = surface.shape();

    let points: Vec<Point3<Real>> =
        (0..rows).flat_map(|r| (0..cols).map(move |c| (r, c))).map(|(r, c)| surface.point(r, c)).collect();
    let mut camera = Camera::new(&RenderOptions { width, height, ..opts.clone() });
    camera.fit(&points, width as Real, height as Real);

    let (z_min, z_max) = surface.z().iter().fold((Real::MAX, Real::MIN), |(lo, hi), &z| (lo.min(z), hi.max(z)));
    let z_span = z_max - z_min;
    let light = (camera.toward_eye + camera.up * 0.5).normalize();

    let projected: Vec<(Real, Real, Real)> = points.iter().map(|p| camera.project(p)).collect();
    let at = |r: usize, c: usize| projected[r * cols + c];

    let mut canvas = Canvas::new(width, height, opts.background);
    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            let quad = [(r, c), (r, c + 1), (r + 1, c + 1), (r + 1, c)];
            for tri in [[quad[0], quad[1], quad[2]], [quad[0], quad[2], quad[3]]] {
                let p = tri.map(|(r, c)| surface.point(r, c));
                let normal = (p[1] - p[0]).cross(&(p[2] - p[0]));
                let shade = match normal.try_normalize(Real::EPSILON) {
                    Some(n) => 0.35 + 0.65 * n.dot(&light).abs(),
                    None => 1.0,
                };
                let z_mid = (p[0].z + p[1].z + p[2].z) / 3.0;
                let t = if z_span > Real::EPSILON { (z_mid - z_min) / z_span } else { 0.5 };
                canvas.fill_triangle(tri.map(|(r, c)| at(r, c)), to_rgb(viridis(t), shade));
            }
        }
    }

    if opts.edges {
        let line_color = Rgb([20, 20, 20]);
        let bias = 1e-3 * (z_span.max(Real::EPSILON) + 1.0);
        let row_stride = line_stride(mean_spacing(&projected, rows, cols, (1, 0)));
        let col_stride = line_stride(mean_spacing(&projected, rows, cols, (0, 1)));
        for r in (0..rows).step_by(row_stride) {
            for c in 0..cols - 1 {
                canvas.line(at(r, c), at(r, c + 1), line_color, bias);
            }
        }
        for c in (0..cols).step_by(col_stride) {
            for r in 0..rows - 1 {
                canvas.line(at(r, c), at(r + 1, c), line_color, bias);
            }
        }
    }

    debug!("rendered {rows}x{cols} surface into {width}x{height} image");
    canvas.image
}

/// Render `surface` and write it to `path` as PNG, whatever the extension.
pub fn save_png(surface: &SampledSurface, path: &Path, opts: &RenderOptions) -> Result<(), IoError> {
    if path.file_name().is_none() {
        return Err(IoError::MalformedPath(path.display().to_string()));
    }
    render(surface, opts).save_with_format(path, image::ImageFormat::Png)?;
    info!("wrote image {}", path.display());
    Ok(())
}
