use std::path::PathBuf;

use color_dropper::DropperError;
use color_dropper::loader::{ImageSource, LoadTracker, builtin_image, decode_file, load_image};
use image::{ImageFormat, Rgba, RgbaImage};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("color_dropper_{}_{name}", std::process::id()))
}

#[test]
fn builtin_image_has_distinct_corners() {
    let image = builtin_image();
    assert_eq!(image.dimensions(), (640, 400));
    assert_eq!(*image.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    assert_eq!(*image.get_pixel(639, 399), Rgba([255, 255, 255, 255]));
    assert_ne!(image.get_pixel(639, 0), image.get_pixel(0, 399));
}

#[tokio::test]
async fn loads_builtin_source() {
    let loaded = load_image(ImageSource::Builtin).await.expect("builtin loads");
    assert_eq!(loaded.source, ImageSource::Builtin);
    assert_eq!(loaded.pixels.dimensions(), (640, 400));
}

#[tokio::test]
async fn format_is_detected_from_contents() {
    let path = temp_path("no_extension.bin");
    let mut image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    image.put_pixel(2, 2, Rgba([10, 20, 30, 255]));
    image
        .save_with_format(&path, ImageFormat::Png)
        .expect("write fixture");

    let loaded = load_image(ImageSource::File(path.clone()))
        .await
        .expect("png decodes");
    assert_eq!(*loaded.pixels.get_pixel(2, 2), Rgba([10, 20, 30, 255]));

    std::fs::remove_file(&path).ok();
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let path = temp_path("garbage.png");
    std::fs::write(&path, b"definitely not an image").expect("write fixture");

    let result = decode_file(&path);
    assert!(matches!(result, Err(DropperError::Decode(_))), "{result:?}");

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let result = load_image(ImageSource::File(temp_path("missing.png"))).await;
    assert!(matches!(result, Err(DropperError::Io(_))));
}

#[test]
fn only_the_latest_ticket_is_current() {
    let mut tracker = LoadTracker::default();
    let first = tracker.issue();
    assert!(tracker.is_current(first));

    let second = tracker.issue();
    assert!(!tracker.is_current(first));
    assert!(tracker.is_current(second));
}
