use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{ImageReader, Rgba, RgbaImage};
use tracing::debug;

use crate::error::DropperError;

const BUILTIN_WIDTH: u32 = 640;
const BUILTIN_HEIGHT: u32 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Builtin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub pixels: Arc<RgbaImage>,
    pub source: ImageSource,
}

/// Identifies one image load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Hands out tickets; only the most recently issued one is current, so a slow
/// decode finishing after a newer request is dropped.
#[derive(Debug, Default)]
pub struct LoadTracker {
    latest: u64,
}

impl LoadTracker {
    pub fn issue(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// The image shown before anything is uploaded: a horizontal red ramp, a
/// vertical green ramp and blue rising on the diagonal, so every spot has a
/// distinct color to pick.
pub fn builtin_image() -> RgbaImage {
    let max_x = (BUILTIN_WIDTH - 1) as f32;
    let max_y = (BUILTIN_HEIGHT - 1) as f32;
    RgbaImage::from_fn(BUILTIN_WIDTH, BUILTIN_HEIGHT, |x, y| {
        let r = (x as f32 / max_x * 255.0).round() as u8;
        let g = (y as f32 / max_y * 255.0).round() as u8;
        let b = ((x as f32 / max_x + y as f32 / max_y) * 127.5).round() as u8;
        Rgba([r, g, b, 255])
    })
}

/// Decodes any format `image` can recognise from the file contents; the
/// extension is not consulted.
pub fn decode_file(path: &Path) -> Result<RgbaImage, DropperError> {
    let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(decoded.to_rgba8())
}

pub async fn load_image(source: ImageSource) -> Result<LoadedImage, DropperError> {
    tokio::task::spawn_blocking(move || {
        let pixels = match &source {
            ImageSource::Builtin => builtin_image(),
            ImageSource::File(path) => decode_file(path)?,
        };
        debug!(
            width = pixels.width(),
            height = pixels.height(),
            source = ?source,
            "image decoded"
        );
        Ok::<_, DropperError>(LoadedImage {
            pixels: Arc::new(pixels),
            source,
        })
    })
    .await
    .map_err(|err| DropperError::Task(err.to_string()))?
}
