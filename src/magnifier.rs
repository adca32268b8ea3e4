//! The zoomed, pixelated inset drawn around the pointer.

use std::sync::Arc;

use iced::{Point, Rectangle, Size};
use image::{Rgba, RgbaImage};

use crate::canvas::CanvasSurface;
use crate::color::SampledColor;
use crate::config::DropperConfig;
use crate::sampler::PointerPosition;
use crate::scene::{DrawOp, Scene, TextMetrics};

pub const LABEL_BACKGROUND: Rgba<u8> = Rgba([0xE0, 0xE4, 0xE7, 255]);

/// Where the magnifier reads from and where it draws to, in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnifierGeometry {
    pub center: Point,
    pub radius: f32,
    /// Square of side `2·radius/zoom_factor` centered on the pointer.
    pub source: Rectangle,
    /// Square of side `2·radius` centered on the pointer.
    pub dest: Rectangle,
}

impl MagnifierGeometry {
    pub fn around(position: PointerPosition, config: &DropperConfig) -> Self {
        let radius = config.zoom_radius();
        let center = position.as_point();
        let source_half = radius / config.zoom_factor;
        let source = Rectangle::new(
            Point::new(center.x - source_half, center.y - source_half),
            Size::new(source_half * 2.0, source_half * 2.0),
        );
        let dest = Rectangle::new(
            Point::new(center.x - radius, center.y - radius),
            Size::new(radius * 2.0, radius * 2.0),
        );
        Self {
            center,
            radius,
            source,
            dest,
        }
    }
}

/// Scales `source` up onto a `zoom_size` square with nearest-neighbour sampling.
pub fn zoom_region(canvas: &CanvasSurface, source: Rectangle, zoom_size: u32) -> RgbaImage {
    let step_x = source.width / zoom_size as f32;
    let step_y = source.height / zoom_size as f32;
    RgbaImage::from_fn(zoom_size, zoom_size, |u, v| {
        let sx = (source.x + (u as f32 + 0.5) * step_x).floor() as i64;
        let sy = (source.y + (v as f32 + 0.5) * step_y).floor() as i64;
        canvas.pixel(sx, sy)
    })
}

/// Flattens every `block`×`block` cell to the color of its top-left pixel.
///
/// Returns the number of blocks written; edge cells are partial when the
/// surface size is not a multiple of `block`.
pub fn pixelate(surface: &mut RgbaImage, block: u32) -> usize {
    if block == 0 {
        return 0;
    }
    let (width, height) = surface.dimensions();
    let mut blocks = 0;
    for by in (0..height).step_by(block as usize) {
        for bx in (0..width).step_by(block as usize) {
            let color = *surface.get_pixel(bx, by);
            for y in by..(by + block).min(height) {
                for x in bx..(bx + block).min(width) {
                    surface.put_pixel(x, y, color);
                }
            }
            blocks += 1;
        }
    }
    blocks
}

/// Makes every pixel whose center lies outside the inscribed circle transparent.
pub fn clip_to_circle(surface: &mut RgbaImage) {
    let (width, height) = surface.dimensions();
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let radius = cx.min(cy);
    for (x, y, pixel) in surface.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        if dx * dx + dy * dy > radius * radius {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }
}

/// Zoom, pixelate and clip in one go.
pub fn render_inset(
    canvas: &CanvasSurface,
    geometry: &MagnifierGeometry,
    config: &DropperConfig,
) -> RgbaImage {
    let mut inset = zoom_region(canvas, geometry.source, config.zoom_size);
    pixelate(&mut inset, config.pixel_size);
    clip_to_circle(&mut inset);
    inset
}

/// Builds the full frame for one pointer position: base image, inset, border
/// ring and hex label. `None` when no image is loaded.
pub fn compose(
    canvas: &CanvasSurface,
    position: PointerPosition,
    color: &SampledColor,
    config: &DropperConfig,
    metrics: &dyn TextMetrics,
) -> Option<Scene> {
    if !canvas.has_image() {
        return None;
    }

    let mut scene = canvas.base_scene();
    let geometry = MagnifierGeometry::around(position, config);

    scene.push(DrawOp::Inset {
        dest: geometry.dest,
        pixels: Arc::new(render_inset(canvas, &geometry, config)),
    });

    scene.push(DrawOp::StrokeCircle {
        center: geometry.center,
        radius: config.border_radius,
        width: config.border_width,
        color: color.opaque(),
    });

    push_label(&mut scene, position, color, config, metrics);
    Some(scene)
}

fn push_label(
    scene: &mut Scene,
    position: PointerPosition,
    color: &SampledColor,
    config: &DropperConfig,
    metrics: &dyn TextMetrics,
) {
    let hex = color.hex();
    let size = config.label_text_size;
    let padding = config.label_padding;
    let text_width = metrics.text_width(&hex, size);

    let rect = Rectangle::new(
        Point::new(
            position.x - text_width / 2.0 - padding,
            position.y + config.label_offset,
        ),
        Size::new(text_width + padding * 2.0, size + padding * 2.0),
    );
    scene.push(DrawOp::FillRect {
        rect,
        color: LABEL_BACKGROUND,
    });
    scene.push(DrawOp::Text {
        content: hex,
        position: Point::new(position.x - text_width / 2.0, rect.y + padding),
        size,
        color: color.opaque(),
    });
}
