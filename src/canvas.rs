use std::sync::Arc;

use iced::{Point, Size};
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::scene::{DrawOp, Scene};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Size of a canvas that shows `image` inside a container of `container`
/// without clipping the image or shrinking below the container.
pub fn fit_canvas_size(container: (u32, u32), image: (u32, u32)) -> (u32, u32) {
    (container.0.max(image.0), container.1.max(image.1))
}

/// The drawing surface: a transparent canvas with the current image at its
/// origin.
///
/// The image is replaced wholesale on every load and never mutated. Pixel reads
/// outside the image (or outside the canvas) yield transparent black.
#[derive(Debug, Clone, Default)]
pub struct CanvasSurface {
    container: (u32, u32),
    size: (u32, u32),
    image: Option<Arc<RgbaImage>>,
}

impl CanvasSurface {
    pub fn new(container: (u32, u32)) -> Self {
        Self {
            container,
            size: container,
            image: None,
        }
    }

    pub fn set_image(&mut self, image: Arc<RgbaImage>) {
        self.image = Some(image);
        self.relayout();
    }

    /// Returns true when the canvas dimensions changed.
    pub fn set_container(&mut self, container: (u32, u32)) -> bool {
        self.container = container;
        self.relayout()
    }

    fn relayout(&mut self) -> bool {
        let image = self.image_dimensions().unwrap_or((0, 0));
        let size = fit_canvas_size(self.container, image);
        let changed = size != self.size;
        if changed {
            debug!(width = size.0, height = size.1, "canvas resized");
        }
        self.size = size;
        changed
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn container(&self) -> (u32, u32) {
        self.container
    }

    pub fn image(&self) -> Option<&Arc<RgbaImage>> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn image_dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(|image| image.dimensions())
    }

    /// Reads one canvas pixel; coordinates are clamped to transparent black
    /// rather than faulting.
    pub fn pixel(&self, x: i64, y: i64) -> Rgba<u8> {
        let Some(image) = self.image.as_ref() else {
            return TRANSPARENT;
        };
        let (canvas_w, canvas_h) = self.size;
        if x < 0 || y < 0 || x >= canvas_w as i64 || y >= canvas_h as i64 {
            return TRANSPARENT;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= image.width() || y >= image.height() {
            return TRANSPARENT;
        }
        *image.get_pixel(x, y)
    }

    /// The frame with nothing but the base image: clear, then draw at origin.
    pub fn base_scene(&self) -> Scene {
        let mut scene = Scene::new();
        scene.push(DrawOp::Clear {
            size: Size::new(self.size.0 as f32, self.size.1 as f32),
        });
        if let Some((width, height)) = self.image_dimensions() {
            scene.push(DrawOp::BaseImage {
                origin: Point::ORIGIN,
                size: Size::new(width as f32, height as f32),
            });
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_reads_are_clamped() {
        let mut canvas = CanvasSurface::new((8, 8));
        canvas.set_image(Arc::new(RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]))));

        assert_eq!(canvas.pixel(3, 3), Rgba([9, 9, 9, 255]));
        // inside the canvas, outside the image
        assert_eq!(canvas.pixel(6, 1), TRANSPARENT);
        assert_eq!(canvas.pixel(-1, 0), TRANSPARENT);
        assert_eq!(canvas.pixel(0, 8), TRANSPARENT);
        assert_eq!(canvas.pixel(i64::MAX, i64::MIN), TRANSPARENT);
    }

    #[test]
    fn empty_canvas_has_no_base_image() {
        let canvas = CanvasSurface::new((10, 5));
        let scene = canvas.base_scene();
        assert_eq!(
            scene.ops(),
            &[DrawOp::Clear {
                size: Size::new(10.0, 5.0)
            }]
        );
    }
}
