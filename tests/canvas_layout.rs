use std::sync::Arc;

use color_dropper::canvas::{CanvasSurface, fit_canvas_size};
use color_dropper::scene::DrawOp;
use iced::{Point, Size};
use image::{Rgba, RgbaImage};

#[test]
fn canvas_takes_the_larger_of_container_and_image() {
    assert_eq!(fit_canvas_size((800, 600), (400, 300)), (800, 600));
    assert_eq!(fit_canvas_size((800, 600), (1200, 300)), (1200, 600));
    assert_eq!(fit_canvas_size((800, 600), (100, 900)), (800, 900));
    assert_eq!(fit_canvas_size((0, 0), (4, 4)), (4, 4));
}

#[test]
fn loading_an_image_resizes_the_canvas() {
    let mut canvas = CanvasSurface::new((300, 200));
    canvas.set_image(Arc::new(RgbaImage::new(500, 120)));
    assert_eq!(canvas.size(), (500, 200));

    // replacing the image re-fits from the container, not the old canvas
    canvas.set_image(Arc::new(RgbaImage::new(50, 50)));
    assert_eq!(canvas.size(), (300, 200));
}

#[test]
fn container_resize_refits_around_the_image() {
    let mut canvas = CanvasSurface::new((300, 200));
    canvas.set_image(Arc::new(RgbaImage::new(500, 120)));

    assert!(canvas.set_container((640, 100)));
    assert_eq!(canvas.size(), (640, 120));
    assert!(!canvas.set_container((640, 100)));
}

#[test]
fn base_scene_clears_then_draws_unscaled_at_origin() {
    let mut canvas = CanvasSurface::new((10, 10));
    canvas.set_image(Arc::new(RgbaImage::from_pixel(6, 3, Rgba([1, 2, 3, 255]))));

    let scene = canvas.base_scene();
    assert_eq!(
        scene.ops(),
        &[
            DrawOp::Clear {
                size: Size::new(10.0, 10.0)
            },
            DrawOp::BaseImage {
                origin: Point::ORIGIN,
                size: Size::new(6.0, 3.0)
            },
        ]
    );
}
