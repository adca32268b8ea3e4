use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DropperError;

const ZOOM_SIZE: u32 = 100;
const ZOOM_FACTOR: f32 = 3.0;
const PIXEL_SIZE: u32 = 10;
const BORDER_RADIUS: f32 = 50.0;
const BORDER_WIDTH: f32 = 6.0;
const LABEL_OFFSET: f32 = 20.0;
const LABEL_PADDING: f32 = 2.0;
const LABEL_TEXT_SIZE: f32 = 16.0;
const CURSOR_SIZE: f32 = 12.0;
const TOAST_DURATION_MS: u64 = 1000;
const TOAST_FADE_MS: u64 = 300;

/// Tunables for the magnifier, the cursor swatch and the copy confirmation.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropperConfig {
    /// Side of the offscreen zoom surface in pixels.
    pub zoom_size: u32,
    pub zoom_factor: f32,
    /// Side of a pixelation block on the zoom surface.
    pub pixel_size: u32,
    pub border_radius: f32,
    pub border_width: f32,
    /// Distance from the pointer to the top of the hex label.
    pub label_offset: f32,
    pub label_padding: f32,
    pub label_text_size: f32,
    pub cursor_size: f32,
    pub toast_duration_ms: u64,
    pub toast_fade_ms: u64,
    pub debug: bool,
}

impl Default for DropperConfig {
    fn default() -> Self {
        Self {
            zoom_size: ZOOM_SIZE,
            zoom_factor: ZOOM_FACTOR,
            pixel_size: PIXEL_SIZE,
            border_radius: BORDER_RADIUS,
            border_width: BORDER_WIDTH,
            label_offset: LABEL_OFFSET,
            label_padding: LABEL_PADDING,
            label_text_size: LABEL_TEXT_SIZE,
            cursor_size: CURSOR_SIZE,
            toast_duration_ms: TOAST_DURATION_MS,
            toast_fade_ms: TOAST_FADE_MS,
            debug: false,
        }
    }
}

impl DropperConfig {
    pub fn load(path: &Path) -> Result<Self, DropperError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DropperError> {
        let config: DropperConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DropperError> {
        if self.zoom_size == 0 {
            return Err(DropperError::InvalidConfig("zoom_size must be positive".into()));
        }
        if self.pixel_size == 0 {
            return Err(DropperError::InvalidConfig("pixel_size must be positive".into()));
        }
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 0.0) {
            return Err(DropperError::InvalidConfig(format!(
                "zoom_factor must be a positive number, got {}",
                self.zoom_factor
            )));
        }
        Ok(())
    }

    /// Radius of the magnifier circle, half the zoom surface.
    pub fn zoom_radius(&self) -> f32 {
        self.zoom_size as f32 / 2.0
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn toast_fade(&self) -> Duration {
        Duration::from_millis(self.toast_fade_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DropperConfig::from_json_str(r#"{ "zoom_factor": 4.0, "debug": true }"#)
            .expect("config should parse");
        assert_eq!(config.zoom_factor, 4.0);
        assert!(config.debug);
        assert_eq!(config.zoom_size, 100);
        assert_eq!(config.pixel_size, 10);
        assert_eq!(config.toast_duration(), Duration::from_millis(1000));
    }

    #[test]
    fn zero_pixel_size_is_rejected() {
        let err = DropperConfig::from_json_str(r#"{ "pixel_size": 0 }"#).unwrap_err();
        assert!(matches!(err, DropperError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = DropperConfig::from_json_str("{ zoom").unwrap_err();
        assert!(matches!(err, DropperError::Config(_)));
    }
}
