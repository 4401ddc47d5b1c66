use image::ImageFormat;
use patent_fetch::fetch::{output_format, output_path};
use std::path::Path;

#[test]
fn filenames_are_deterministic_and_collision_free() {
    let dir = Path::new("patent_images");
    let a = output_path(dir, "07654321", "1", "tif");
    let b = output_path(dir, "07654321", "2", "tif");
    let c = output_path(dir, "10283223", "1", "tif");

    assert_eq!(a, Path::new("patent_images/07654321-1.tif"));
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
    assert_eq!(a, output_path(dir, "07654321", "1", "tif"));
}

#[test]
fn format_names_map_to_encoders() {
    assert!(matches!(output_format("tiff"), Ok((ImageFormat::Tiff, "tif"))));
    assert!(matches!(output_format("TIF"), Ok((ImageFormat::Tiff, "tif"))));
    assert!(matches!(output_format("png"), Ok((ImageFormat::Png, "png"))));
    assert!(matches!(output_format("jpg"), Ok((ImageFormat::Jpeg, "jpg"))));
    assert!(output_format("docx").is_err());
}
