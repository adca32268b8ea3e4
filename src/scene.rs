//! Renderer-independent description of one canvas frame.
//!
//! The widget computes a [`Scene`] for every qualifying pointer event; the GUI
//! replays it onto a canvas frame. Keeping the frame as plain data lets the
//! sampling and layout logic be checked without a window.

use std::sync::Arc;

use iced::{Point, Rectangle, Size};
use image::{Rgba, RgbaImage};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Wipe the whole canvas.
    Clear { size: Size },
    /// The loaded image, unscaled.
    BaseImage { origin: Point, size: Size },
    /// A pre-rendered bitmap composited 1:1 into `dest`.
    Inset {
        dest: Rectangle,
        pixels: Arc<RgbaImage>,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        width: f32,
        color: Rgba<u8>,
    },
    FillRect { rect: Rectangle, color: Rgba<u8> },
    StrokeRect {
        rect: Rectangle,
        width: f32,
        color: Rgba<u8>,
    },
    /// Text whose top-left corner sits at `position`.
    Text {
        content: String,
        position: Point,
        size: f32,
        color: Rgba<u8>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    ops: Vec<DrawOp>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn stroke_circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeCircle { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

/// Measures the advance width of a run of text.
pub trait TextMetrics {
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// Fixed-advance metrics matching the monospace font the canvas draws with.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    /// Advance of one glyph as a fraction of the font size.
    pub advance: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * self.advance * size
    }
}
