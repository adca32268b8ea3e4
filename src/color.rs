//! RGB triples and the two string encodings the widget displays.

use image::Rgba;

/// Converts an RGB triple into a fixed-width `#RRGGBB` string.
///
/// The channels are packed on top of `0x1000000` so the hexadecimal rendering
/// always has seven digits; the synthetic leading `1` is then dropped, which
/// keeps leading zero channels visible.
pub fn hex_from_rgb(r: u8, g: u8, b: u8) -> String {
    let packed = 0x100_0000u32 + ((r as u32) << 16) + ((g as u32) << 8) + b as u32;
    let digits = format!("{packed:x}");
    format!("#{}", digits[1..].to_uppercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color read from the canvas under the pointer.
///
/// Alpha is kept for inspection only; every encoding and every overlay drawn in
/// this color treats it as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SampledColor {
    pub rgb: Rgb,
    pub alpha: u8,
}

impl SampledColor {
    pub const TRANSPARENT: SampledColor = SampledColor {
        rgb: Rgb::new(0, 0, 0),
        alpha: 0,
    };

    pub fn from_rgba(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self {
            rgb: Rgb::new(r, g, b),
            alpha: a,
        }
    }

    pub fn hex(&self) -> String {
        hex_from_rgb(self.rgb.r, self.rgb.g, self.rgb.b)
    }

    pub fn css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b)
    }

    /// The color used for strokes and text: alpha discarded.
    pub fn opaque(&self) -> Rgba<u8> {
        Rgba([self.rgb.r, self.rgb.g, self.rgb.b, 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_ignored_by_encodings() {
        let color = SampledColor::from_rgba(Rgba([255, 128, 1, 0]));
        assert_eq!(color.hex(), "#FF8001");
        assert_eq!(color.css_rgb(), "rgb(255, 128, 1)");
        assert_eq!(color.opaque(), Rgba([255, 128, 1, 255]));
    }

    #[test]
    fn transparent_reads_as_black() {
        assert_eq!(SampledColor::TRANSPARENT.hex(), "#000000");
    }
}
