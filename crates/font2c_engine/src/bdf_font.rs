//! Adapter around the `bdf` crate.
//!
//! The engine never looks at BDF internals: this module draws each glyph's
//! BBX raster into the font's global bounding-box cell, so every grid handed
//! to the encoder has the same dimensions, the way glyphs render in a fixed
//! character cell.

use std::{io::Read, path::Path};

use crate::{Glyph, PixelGrid};

/// Global font metrics, for informational logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Font bounding-box width in pixels
    pub width: u32,
    /// Font bounding-box height in pixels
    pub height: u32,
    /// Number of glyphs the font contains
    pub glyph_count: usize,
}

/// A loaded BDF font yielding [`Glyph`] records by code point.
pub struct BdfFont {
    font: bdf::Font,
}

impl BdfFont {
    /// Load a font from a `.bdf` file.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let font = bdf::open(path)?;
        log::debug!("Parsed BDF font with {} glyphs", font.glyphs().len());
        Ok(Self { font })
    }

    /// Load a font from a reader.
    pub fn read(stream: impl Read) -> crate::Result<Self> {
        Ok(Self { font: bdf::read(stream)? })
    }

    pub fn metrics(&self) -> FontMetrics {
        let bounds = self.font.bounds();
        FontMetrics {
            width: bounds.width,
            height: bounds.height,
            glyph_count: self.font.glyphs().len(),
        }
    }

    /// Get the glyph for a code point, drawn into the bounding-box cell.
    ///
    /// Returns `None` when the font has no glyph for the code point; absent
    /// glyphs are skipped by callers, never an error.
    pub fn glyph(&self, code_point: u32) -> Option<Glyph> {
        let ch = char::from_u32(code_point)?;
        let glyph = self.font.glyphs().get(&ch)?;
        Some(self.draw_cell(code_point, ch, glyph))
    }

    /// Place the BBX raster inside the global bounding box using the BDF
    /// x/y offsets. Pixels falling outside the cell are dropped.
    fn draw_cell(&self, code_point: u32, ch: char, glyph: &bdf::Glyph) -> Glyph {
        let font_bounds = self.font.bounds();
        let glyph_bounds = glyph.bounds();
        let mut grid = PixelGrid::new(font_bounds.width as usize, font_bounds.height as usize);

        let left = glyph_bounds.x - font_bounds.x;
        let top = (font_bounds.y + font_bounds.height as i32) - (glyph_bounds.y + glyph_bounds.height as i32);

        for y in 0..glyph.height() {
            for x in 0..glyph.width() {
                if glyph.get(x, y) {
                    let cell_x = left + x as i32;
                    let cell_y = top + y as i32;
                    if cell_x >= 0 && cell_y >= 0 {
                        grid.set(cell_x as usize, cell_y as usize, true);
                    }
                }
            }
        }

        Glyph::new(code_point, ch, grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TEST_FONT: &str = "\
STARTFONT 2.1
FONT test
SIZE 16 75 75
FONTBOUNDINGBOX 4 4 0 0
CHARS 2
STARTCHAR A
ENCODING 65
SWIDTH 500 0
DWIDTH 4 0
BBX 2 2 1 1
BITMAP
80
40
ENDCHAR
STARTCHAR B
ENCODING 66
SWIDTH 500 0
DWIDTH 4 0
BBX 4 4 0 0
BITMAP
F0
90
90
F0
ENDCHAR
ENDFONT
";

    fn test_font() -> BdfFont {
        BdfFont::read(Cursor::new(TEST_FONT)).unwrap()
    }

    #[test]
    fn test_metrics() {
        let metrics = test_font().metrics();
        assert_eq!(metrics.width, 4);
        assert_eq!(metrics.height, 4);
        assert_eq!(metrics.glyph_count, 2);
    }

    #[test]
    fn test_missing_glyph_is_none() {
        assert!(test_font().glyph(0x43).is_none());
        assert!(test_font().glyph(0xD800).is_none()); // not a valid char
    }

    #[test]
    fn test_glyph_placed_in_cell() {
        let glyph = test_font().glyph(65).unwrap();
        assert_eq!(glyph.code_point, 65);
        assert_eq!(glyph.display, 'A');
        assert_eq!(glyph.grid.width(), 4);
        assert_eq!(glyph.grid.height(), 4);
        // BBX 2 2 1 1 inside a 4x4 box at (0,0): raster shifts one column
        // right and one row up from the bottom.
        assert_eq!(glyph.grid, PixelGrid::from_pattern(&["0000", "0100", "0010", "0000"]));
    }

    #[test]
    fn test_full_cell_glyph() {
        let glyph = test_font().glyph(66).unwrap();
        assert_eq!(glyph.grid, PixelGrid::from_pattern(&["1111", "1001", "1001", "1111"]));
    }
}
