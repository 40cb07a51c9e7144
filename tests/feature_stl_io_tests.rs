#![cfg(feature = "stl-io")]

use mobius_strip::{
    MobiusStrip, Triangulated3D,
    io::{to_stl_ascii, to_stl_binary, write_stl_file},
};

#[test]
fn ascii_stl_has_one_facet_per_triangle() {
    let strip = MobiusStrip::new(1.0, 0.2, 10).unwrap();
    let text = to_stl_ascii(&strip, "mobius");

    assert!(text.starts_with("solid mobius\n"));
    assert!(text.ends_with("endsolid mobius\n"));
    assert_eq!(text.matches("facet normal").count(), 2 * 9 * 9);
    assert_eq!(text.matches("vertex ").count(), 3 * 2 * 9 * 9);
}

#[test]
fn binary_stl_size() {
    let strip = MobiusStrip::new(1.0, 0.2, 10).unwrap();
    let bytes = to_stl_binary(&strip, "mobius").unwrap();
    // 80 byte header, u32 count, 50 bytes per triangle
    assert_eq!(bytes.len(), 84 + 50 * strip.triangle_count());
    let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
    assert_eq!(count as usize, strip.triangle_count());
}

#[test]
fn binary_stl_header_carries_the_name() {
    let strip = MobiusStrip::new(1.0, 0.2, 4).unwrap();
    let bytes = to_stl_binary(&strip, "mobius").unwrap();
    assert_eq!(&bytes[..6], b"mobius");
    assert!(bytes[6..80].iter().all(|&b| b == 0));

    let long_name = "m".repeat(120);
    let bytes = to_stl_binary(&strip, &long_name).unwrap();
    assert!(bytes[..80].iter().all(|&b| b == b'm'));
    assert_eq!(bytes.len(), 84 + 50 * strip.triangle_count());
}

#[test]
fn file_format_follows_name() {
    let strip = MobiusStrip::new(1.0, 0.2, 6).unwrap();
    let dir = std::env::temp_dir();

    let ascii_path = dir.join("mobius_strip_test_ascii.stl");
    write_stl_file(&strip, "mobius", &ascii_path).unwrap();
    let text = std::fs::read_to_string(&ascii_path).unwrap();
    assert!(text.starts_with("solid mobius"));

    let binary_path = dir.join("mobius_strip_test.stl");
    write_stl_file(&strip, "mobius", &binary_path).unwrap();
    let bytes = std::fs::read(&binary_path).unwrap();
    assert_eq!(bytes.len(), 84 + 50 * strip.triangle_count());

    let _ = std::fs::remove_file(ascii_path);
    let _ = std::fs::remove_file(binary_path);
}
