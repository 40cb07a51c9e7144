mod support;

use mobius_strip::{
    MobiusError, SampledSurface, Triangulated3D,
    float_types::{Real, TAU},
};
use support::{Cylinder, Rectangle, approx_eq, rel_eq};

#[test]
fn flat_rectangle_area_is_exact() {
    // Linear parametrization: finite differences and Simpson are exact,
    // also with an even sample count along u.
    let rect = Rectangle { a: 2.0, b: 3.0 };
    let s = SampledSurface::sample(&rect, 4, 5).unwrap();
    assert_eq!(s.shape(), (5, 4));
    assert!(approx_eq(s.surface_area(), 6.0, 1e-12), "area {}", s.surface_area());
    assert!(s.area_elements().iter().all(|&a| approx_eq(a, 1.0, 1e-12)));
    assert!(approx_eq(s.triangulated_area(), 6.0, 1e-12));
    assert!(approx_eq(s.row_length(0), 2.0, 1e-12));
}

#[test]
fn cylinder_area_matches_closed_form() {
    let cyl = Cylinder { radius: 1.5, height: 2.0 };
    let s = SampledSurface::sample(&cyl, 101, 11).unwrap();
    let exact = TAU * 1.5 * 2.0;
    assert!(rel_eq(s.surface_area(), exact, 1e-3), "area {} vs {exact}", s.surface_area());
    // the circle traced by a row
    assert!(rel_eq(s.row_length(5), TAU * 1.5, 1e-3));
}

#[test]
fn spacing_and_partials() {
    let cyl = Cylinder { radius: 1.0, height: 1.0 };
    let s = SampledSurface::sample(&cyl, 65, 9).unwrap();
    assert!(approx_eq(s.du(), TAU / 64.0, 1e-12));
    assert!(approx_eq(s.dv(), 1.0 / 8.0, 1e-12));

    // ∂P/∂v is exactly +Z everywhere, ∂P/∂u is horizontal and close to unit length
    for r in 0..9 {
        for c in 0..65 {
            let pv = s.partial_v()[(r, c)];
            assert!(approx_eq(pv.z, 1.0, 1e-12) && approx_eq(pv.x, 0.0, 1e-12));
            let pu = s.partial_u()[(r, c)];
            assert!(approx_eq(pu.z, 0.0, 1e-12));
            assert!(rel_eq(pu.norm(), 1.0, 2e-3), "|∂P/∂u| = {}", pu.norm());
            assert!(rel_eq(s.normal(r, c).norm(), s.area_elements()[(r, c)], 1e-12));
        }
    }
}

#[test]
fn minimum_resolution_samples_corners() {
    let rect = Rectangle { a: 1.0, b: 1.0 };
    let s = SampledSurface::sample(&rect, 2, 2).unwrap();
    assert_eq!(s.u(), &[0.0, 1.0]);
    assert_eq!(s.v(), &[0.0, 1.0]);
    assert_eq!(s.triangle_count(), 2);
    assert!(approx_eq(s.surface_area(), 1.0, 1e-12));
}

#[test]
fn too_few_samples() {
    let rect = Rectangle { a: 1.0, b: 1.0 };
    let err: MobiusError = SampledSurface::sample(&rect, 1, 10).unwrap_err();
    assert_eq!(err.parameter(), "n_u");
    let err = SampledSurface::sample(&rect, 10, 0).unwrap_err();
    assert_eq!(err.parameter(), "n_v");
}

#[test]
fn triangle_count_matches_visit() {
    let cyl = Cylinder { radius: 1.0, height: 0.5 };
    let s = SampledSurface::sample(&cyl, 7, 4).unwrap();
    let mut visited = 0usize;
    let mut area: Real = 0.0;
    s.visit_triangles(|[a, b, c]| {
        visited += 1;
        area += (b.position - a.position).cross(&(c.position - a.position)).norm() * 0.5;
    });
    assert_eq!(visited, s.triangle_count());
    assert_eq!(visited, 2 * 6 * 3);
    assert!(approx_eq(area, s.triangulated_area(), 1e-12));
}
