use iced::Point;

use crate::canvas::CanvasSurface;
use crate::color::SampledColor;

/// Pointer location in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The pixel under the pointer; sub-pixel offsets are dropped.
    pub fn pixel(&self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }

    pub fn as_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Converts a pointer's screen position into canvas-local coordinates by
/// subtracting the canvas' top-left corner.
pub fn canvas_local(pointer: Point, canvas_origin: Point) -> PointerPosition {
    PointerPosition::new(pointer.x - canvas_origin.x, pointer.y - canvas_origin.y)
}

/// Reads the color under `position`, or `None` when no image is loaded.
pub fn sample(canvas: &CanvasSurface, position: PointerPosition) -> Option<SampledColor> {
    if !canvas.has_image() {
        return None;
    }
    let (x, y) = position.pixel();
    Some(SampledColor::from_rgba(canvas.pixel(x, y)))
}
