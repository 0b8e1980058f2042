//! Writes the generated C header: struct typedef, array entries, footer.

use std::io::Write;

use crate::{EngineError, Glyph, GlyphEncoder};

/// Write the complete C header for a glyph batch.
///
/// The first glyph is the layout sample for the typedef; glyphs that
/// transform to a different element count than the sample still get written
/// (a warning is logged), matching the lenient header derivation. The stream
/// is flushed before returning; closing it is the caller's business.
pub fn write_font<W: Write>(out: &mut W, encoder: &GlyphEncoder, glyphs: &[Glyph]) -> crate::Result<()> {
    let Some(sample) = glyphs.first() else {
        return Err(EngineError::NoGlyphsSelected);
    };

    writeln!(out, "{}", encoder.layout_header(sample))?;
    writeln!(out)?;
    writeln!(out, "{}", encoder.array_open())?;

    let expected = encoder.elements_per_glyph(&encoder.transform(sample));
    for glyph in glyphs {
        let packed = encoder.encode(glyph);
        if packed.elements.len() != expected {
            log::warn!(
                "Glyph 0x{:04X} packs into {} elements, header declares {}",
                glyph.code_point,
                packed.elements.len(),
                expected
            );
        }
        writeln!(out, "\t{}, // {}", encoder.entry(glyph), encoder.describe(glyph))?;
    }

    writeln!(out, "{}", encoder.array_close())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PixelGrid, TransformConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_font() {
        let encoder = GlyphEncoder::new(TransformConfig::default()).unwrap();
        let glyphs = vec![
            Glyph::new(0x61, 'a', PixelGrid::from_pattern(&["01100", "01100"])),
            Glyph::new(0x62, 'b', PixelGrid::from_pattern(&["10000", "10000"])),
        ];

        let mut out = Vec::new();
        write_font(&mut out, &encoder, &glyphs).unwrap();

        let expected = "\
#include <stdint.h>

typedef struct {
\tchar16_t code;
\tuint8_t data[5];
} fontGlyphEntry_t;

const static fontGlyphEntry_t fontArray[] = {
\t{    97, { 0x00, 0x03, 0x03, 0x00, 0x00 } }, // ' a ' (0x0061)
\t{    98, { 0x03, 0x00, 0x00, 0x00, 0x00 } }, // ' b ' (0x0062)
};
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_write_font_no_glyphs() {
        let encoder = GlyphEncoder::new(TransformConfig::default()).unwrap();
        let mut out = Vec::new();
        assert!(matches!(write_font(&mut out, &encoder, &[]), Err(EngineError::NoGlyphsSelected)));
        assert!(out.is_empty());
    }
}
