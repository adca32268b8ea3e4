use std::sync::Arc;

use image::RgbaImage;
use tracing::{debug, info};

use crate::canvas::CanvasSurface;
use crate::color::SampledColor;
use crate::config::DropperConfig;
use crate::feedback::CursorSwatch;
use crate::magnifier;
use crate::sampler::{self, PointerPosition};
use crate::scene::{MonospaceMetrics, Scene};

/// Whether pointer events sample the canvas. There is no way back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickingMode {
    #[default]
    Idle,
    Picking,
}

/// Owns everything the pointer handlers touch.
///
/// The sampled color only exists while picking with an image loaded; every
/// transition below is a no-op otherwise.
#[derive(Debug, Clone)]
pub struct DropperState {
    config: DropperConfig,
    metrics: MonospaceMetrics,
    canvas: CanvasSurface,
    mode: PickingMode,
    pointer: Option<PointerPosition>,
    color: Option<SampledColor>,
    label: Option<SampledColor>,
    frame: Scene,
}

impl DropperState {
    pub fn new(config: DropperConfig, container: (u32, u32)) -> Self {
        let canvas = CanvasSurface::new(container);
        let frame = canvas.base_scene();
        Self {
            config,
            metrics: MonospaceMetrics::default(),
            canvas,
            mode: PickingMode::Idle,
            pointer: None,
            color: None,
            label: None,
            frame,
        }
    }

    pub fn config(&self) -> &DropperConfig {
        &self.config
    }

    pub fn canvas(&self) -> &CanvasSurface {
        &self.canvas
    }

    pub fn mode(&self) -> PickingMode {
        self.mode
    }

    pub fn is_picking(&self) -> bool {
        self.mode == PickingMode::Picking
    }

    pub fn pointer(&self) -> Option<PointerPosition> {
        self.pointer
    }

    pub fn sampled(&self) -> Option<SampledColor> {
        self.color
    }

    /// The color shown by the persistent label, set by the last click.
    pub fn label(&self) -> Option<SampledColor> {
        self.label
    }

    /// The most recently composed frame.
    pub fn frame(&self) -> &Scene {
        &self.frame
    }

    /// Enter picking mode. Returns false when already picking.
    pub fn activate(&mut self) -> bool {
        if self.is_picking() {
            return false;
        }
        info!("color picking enabled");
        self.mode = PickingMode::Picking;
        true
    }

    /// Replace the image. Overlays from the previous image are dropped and the
    /// pointer must move again before anything is sampled.
    pub fn image_loaded(&mut self, image: Arc<RgbaImage>) {
        debug!(width = image.width(), height = image.height(), "image replaced");
        self.canvas.set_image(image);
        self.pointer = None;
        self.color = None;
        self.frame = self.canvas.base_scene();
    }

    pub fn resize_container(&mut self, container: (u32, u32)) {
        if self.canvas.set_container(container) {
            self.pointer = None;
            self.color = None;
            self.frame = self.canvas.base_scene();
        }
    }

    /// Sample under the pointer and recompose the frame.
    pub fn pointer_moved(&mut self, position: PointerPosition) -> Option<&Scene> {
        if !self.is_picking() {
            return None;
        }
        let color = sampler::sample(&self.canvas, position)?;
        let mut scene =
            magnifier::compose(&self.canvas, position, &color, &self.config, &self.metrics)?;
        CursorSwatch::new(position, &color, self.config.cursor_size).push_to(&mut scene);

        self.pointer = Some(position);
        self.color = Some(color);
        self.frame = scene;
        Some(&self.frame)
    }

    /// Commit the current color to the label and return the hex to copy.
    pub fn click(&mut self) -> Option<String> {
        if !self.is_picking() {
            return None;
        }
        let color = self.color?;
        self.label = Some(color);
        Some(color.hex())
    }
}
