//! One glyph as supplied by the font collaborator.

use crate::PixelGrid;

/// A single glyph: the raster drawn into the font's bounding-box cell, the
/// code point identifying the character and its printable value (which may
/// be a control code).
///
/// The encoder only reads glyphs; every transform works on a private clone
/// of the raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub code_point: u32,
    pub display: char,
    pub grid: PixelGrid,
}

impl Glyph {
    pub fn new(code_point: u32, display: char, grid: PixelGrid) -> Self {
        Self { code_point, display, grid }
    }
}
