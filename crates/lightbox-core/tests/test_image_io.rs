mod common;

use std::path::Path;

use lightbox_core::error::LightboxError;
use lightbox_core::geometry::Size;
use lightbox_core::io::image_io::{is_supported_image, load_rgba, probe_dimensions, scan_gallery};

use common::write_png;

#[test]
fn test_probe_dimensions_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tile.png");
    write_png(&path, 64, 32);

    assert_eq!(probe_dimensions(&path).unwrap(), Size::new(64, 32));
}

#[test]
fn test_probe_dimensions_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = probe_dimensions(&dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, LightboxError::Io(_)));
}

#[test]
fn test_probe_dimensions_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    assert!(probe_dimensions(&path).is_err());
}

#[test]
fn test_load_rgba() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tile.png");
    write_png(&path, 10, 20);

    let rgba = load_rgba(&path).unwrap();
    assert_eq!(rgba.dimensions(), (10, 20));
}

#[test]
fn test_is_supported_image() {
    assert!(is_supported_image(Path::new("a.png")));
    assert!(is_supported_image(Path::new("photos/B.JPG")));
    assert!(is_supported_image(Path::new("c.webp")));
    assert!(!is_supported_image(Path::new("notes.txt")));
    assert!(!is_supported_image(Path::new("README")));
}

#[test]
fn test_scan_gallery_sorted_with_thumbnails() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_png(&root.join("b.png"), 8, 8);
    write_png(&root.join("a.png"), 8, 8);
    std::fs::write(root.join("notes.txt"), b"ignored").unwrap();
    std::fs::create_dir(root.join("thumbs")).unwrap();
    write_png(&root.join("thumbs").join("a.png"), 4, 4);

    let sources = scan_gallery(root).unwrap();
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].primary, root.join("a.png"));
    assert_eq!(sources[0].fallback, Some(root.join("thumbs").join("a.png")));
    assert_eq!(sources[1].primary, root.join("b.png"));
    assert_eq!(sources[1].fallback, None);
}

#[test]
fn test_scan_gallery_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    assert!(scan_gallery(&dir.path().join("missing")).is_err());
}
