//! Label measurement and glyph rasterization
//!
//! Widgets only need to know how wide a label is so they can center it.
//! That question goes through [`TextMetrics`], which has a real
//! implementation backed by a font file and an approximate one for
//! headless use without font assets.

use std::fmt;
use std::path::Path;

use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use tiny_skia::Pixmap;

use crate::config::style::Rgb;
use crate::domain::core::Position;
use crate::ui::assets::{AssetError, read_asset};

/// Measures the horizontal extent of a label
pub trait TextMetrics {
    /// Advance width of `text` at a font size of `px` pixels
    fn advance_width(&self, text: &str, px: f32) -> f32;
}

/// Font-less metrics assuming every character has the same advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxMetrics {
    /// Advance of one character as a fraction of the font size
    pub advance_ratio: f32,
}

impl ApproxMetrics {
    pub const DEFAULT_RATIO: f32 = 0.6;

    pub fn new(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }
}

impl Default for ApproxMetrics {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATIO)
    }
}

impl TextMetrics for ApproxMetrics {
    fn advance_width(&self, text: &str, px: f32) -> f32 {
        text.chars().count() as f32 * px * self.advance_ratio
    }
}

/// Outline font used for both measuring and drawing labels
#[derive(Clone)]
pub struct GlyphFont {
    font: FontArc,
}

impl fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphFont")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl GlyphFont {
    /// Parses TrueType/OpenType font data
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, AssetError> {
        FontArc::try_from_vec(bytes)
            .map(|font| Self { font })
            .map_err(|e| AssetError::InvalidFont {
                reason: e.to_string(),
            })
    }

    /// Reads and parses a font file
    pub fn from_file(path: &Path) -> Result<Self, AssetError> {
        Self::from_bytes(read_asset(path)?)
    }

    /// Visits each glyph of `text` with its pen x position, kerning applied
    fn layout(&self, text: &str, px: f32, mut visit: impl FnMut(GlyphId, f32)) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(px));
        let mut caret = 0.0;
        let mut previous: Option<GlyphId> = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(previous) = previous {
                caret += scaled.kern(previous, id);
            }
            visit(id, caret);
            caret += scaled.h_advance(id);
            previous = Some(id);
        }

        caret
    }

    /// Rasterizes `text` with its baseline starting at `origin`
    ///
    /// Coverage is blended over the existing pixels; glyphs falling partly
    /// outside the pixmap are clipped.
    pub fn draw_text(&self, pixmap: &mut Pixmap, text: &str, px: f32, origin: Position, color: Rgb) {
        let scale = PxScale::from(px);
        let mut glyphs = Vec::new();
        self.layout(text, px, |id, x| {
            glyphs.push(id.with_scale_and_position(scale, point(origin.x + x, origin.y)));
        });

        for glyph in glyphs {
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                // Whitespace and missing glyphs have no outline
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                blend_pixel(pixmap, x, y, color, coverage);
            });
        }
    }
}

impl TextMetrics for GlyphFont {
    fn advance_width(&self, text: &str, px: f32) -> f32 {
        self.layout(text, px, |_, _| {})
    }
}

/// Source-over blend of an opaque color with partial coverage
///
/// Works directly on premultiplied RGBA bytes.
fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, color: Rgb, coverage: f32) {
    let (width, height) = (pixmap.width() as i32, pixmap.height() as i32);
    if x < 0 || y < 0 || x >= width || y >= height {
        return;
    }

    let coverage = coverage.clamp(0.0, 1.0);
    let offset = (y as usize * width as usize + x as usize) * 4;
    let data = pixmap.data_mut();
    for (i, src) in [color.r, color.g, color.b, 255].into_iter().enumerate() {
        let dst = data[offset + i] as f32;
        data[offset + i] = (src as f32 * coverage + dst * (1.0 - coverage)).round() as u8;
    }
}
