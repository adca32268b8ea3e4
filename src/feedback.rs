use iced::{Point, Rectangle, Size};
use image::Rgba;

use crate::color::SampledColor;
use crate::sampler::PointerPosition;
use crate::scene::{DrawOp, Scene};

const OUTLINE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const OUTLINE_WIDTH: f32 = 2.0;

/// Small square drawn in place of the system cursor while picking.
///
/// The hotspot is the square's center; the white outline keeps it visible on
/// any background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorSwatch {
    pub rect: Rectangle,
    pub fill: Rgba<u8>,
}

impl CursorSwatch {
    pub fn new(position: PointerPosition, color: &SampledColor, size: f32) -> Self {
        let half = size / 2.0;
        Self {
            rect: Rectangle::new(
                Point::new(position.x - half, position.y - half),
                Size::new(size, size),
            ),
            fill: color.opaque(),
        }
    }

    pub fn push_to(&self, scene: &mut Scene) {
        scene.push(DrawOp::FillRect {
            rect: self.rect,
            color: self.fill,
        });
        scene.push(DrawOp::StrokeRect {
            rect: self.rect,
            width: OUTLINE_WIDTH,
            color: OUTLINE,
        });
    }
}
