//! Glyph encoder: owns a [`TransformConfig`] and turns glyphs into
//! output-ready array entries and comments.

use serde::{Deserialize, Serialize};

use crate::{ByteOrder, EngineError, Glyph, PixelGrid};

/// Default C struct name for array entries
pub const DEFAULT_STRUCT_NAME: &str = "fontGlyphEntry_t";
/// Default C array name
pub const DEFAULT_ARRAY_NAME: &str = "fontArray";

/// Geometric transform and byte layout applied to every glyph of a run.
///
/// Mutators overwrite their field (last write wins); only the final values
/// matter because [`GlyphEncoder::transform`] applies them in a fixed order
/// regardless of the sequence of configuration calls. Immutable once handed
/// to an encoder for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Rows added above the glyph; negative values trim instead.
    pub pad_top: i32,
    pub pad_bottom: i32,
    pub pad_left: i32,
    pub pad_right: i32,
    /// Mirror glyphs left-right before rotating.
    pub mirror_horizontal: bool,
    /// Mirror glyphs top-bottom before rotating.
    pub mirror_vertical: bool,
    /// Net clockwise quarter turns, applied modulo 4.
    pub rotation: i32,
    /// Element order in the flattened output.
    pub byte_order: ByteOrder,
    /// Bytes per array element, 1-4 (1 = bytes, 2 = shorts, 3-4 = longs).
    pub element_size: u32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            pad_top: 0,
            pad_bottom: 0,
            pad_left: 0,
            pad_right: 0,
            mirror_horizontal: false,
            mirror_vertical: false,
            rotation: 0,
            byte_order: ByteOrder::RowMajor,
            element_size: 1,
        }
    }
}

impl TransformConfig {
    /// Check the configuration invariants. The element size is the only
    /// field with a restricted range; everything else is total.
    pub fn validate(&self) -> crate::Result<()> {
        if !(1..=4).contains(&self.element_size) {
            return Err(EngineError::ElementSizeOutOfRange { size: self.element_size });
        }
        Ok(())
    }

    /// Positive value for padding, negative value for trimming, in pixels.
    pub fn set_padding_top(&mut self, pad: i32) {
        self.pad_top = pad;
    }

    /// Positive value for padding, negative value for trimming, in pixels.
    pub fn set_padding_bottom(&mut self, pad: i32) {
        self.pad_bottom = pad;
    }

    /// Positive value for padding, negative value for trimming, in pixels.
    pub fn set_padding_left(&mut self, pad: i32) {
        self.pad_left = pad;
    }

    /// Positive value for padding, negative value for trimming, in pixels.
    pub fn set_padding_right(&mut self, pad: i32) {
        self.pad_right = pad;
    }

    pub fn set_mirror_horizontal(&mut self, mirror: bool) {
        self.mirror_horizontal = mirror;
    }

    pub fn set_mirror_vertical(&mut self, mirror: bool) {
        self.mirror_vertical = mirror;
    }

    /// Add one clockwise quarter turn to the net rotation.
    pub fn rotate_cw(&mut self) {
        self.rotation += 1;
    }

    /// Add one counter-clockwise quarter turn to the net rotation.
    pub fn rotate_ccw(&mut self) {
        self.rotation -= 1;
    }

    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    /// Set the array element size in bytes. Sizes outside 1-4 are a
    /// configuration error, raised here before any glyph is processed.
    pub fn set_element_size(&mut self, size: u32) -> crate::Result<()> {
        if !(1..=4).contains(&size) {
            return Err(EngineError::ElementSizeOutOfRange { size });
        }
        self.element_size = size;
        Ok(())
    }
}

/// The packed output for one glyph: the code point plus the ordered element
/// strings (uppercase hex digits, `element_size * 2` digits each).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedEntry {
    pub code_point: u32,
    pub elements: Vec<String>,
}

/// Converts glyphs into C array entries under one [`TransformConfig`].
///
/// Configured once, then invoked per glyph arbitrarily many times; every
/// [`GlyphEncoder::encode`] call is independent.
#[derive(Debug, Clone)]
pub struct GlyphEncoder {
    config: TransformConfig,
    struct_name: String,
    array_name: String,
}

impl GlyphEncoder {
    /// Create an encoder, validating the configuration.
    pub fn new(config: TransformConfig) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            struct_name: DEFAULT_STRUCT_NAME.to_string(),
            array_name: DEFAULT_ARRAY_NAME.to_string(),
        })
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn set_struct_name(&mut self, name: impl Into<String>) {
        self.struct_name = name.into();
    }

    pub fn set_array_name(&mut self, name: impl Into<String>) {
        self.array_name = name.into();
    }

    /// Apply the configured transform to a private clone of the glyph raster.
    ///
    /// Fixed operation order: pad, mirror horizontal, mirror vertical, then
    /// `rotation mod 4` clockwise rotations. Padding is always relative to
    /// the glyph's original orientation and mirroring always precedes
    /// rotation, so the result only depends on the final configuration
    /// values, never on the order the mutators were called in.
    pub fn transform(&self, glyph: &Glyph) -> PixelGrid {
        let c = &self.config;
        let mut grid = glyph.grid.clone();
        grid.pad(c.pad_top, c.pad_bottom, c.pad_left, c.pad_right);
        if c.mirror_horizontal {
            grid.flip_horizontal();
        }
        if c.mirror_vertical {
            grid.flip_vertical();
        }
        for _ in 0..c.rotation.rem_euclid(4) {
            grid.rotate_cw();
        }
        grid
    }

    /// Transform and pack one glyph.
    pub fn encode(&self, glyph: &Glyph) -> PackedEntry {
        let grid = self.transform(glyph);
        PackedEntry {
            code_point: glyph.code_point,
            elements: grid.pack(self.config.element_size, self.config.byte_order),
        }
    }

    /// Human-readable annotation for an array entry, e.g. `' a ' (0x0061)`.
    /// A literal space is substituted for code points below the printable
    /// ASCII space.
    pub fn describe(&self, glyph: &Glyph) -> String {
        let symbol = if glyph.display < ' ' { ' ' } else { glyph.display };
        format!("' {symbol} ' (0x{:04X})", glyph.code_point)
    }

    /// One formatted array entry, e.g.
    /// `{    97, { 0x00, 0x01, 0x02, 0x03, 0x04, 0x05 } }`.
    pub fn entry(&self, glyph: &Glyph) -> String {
        let packed = self.encode(glyph);
        let data = packed.elements.iter().map(|e| format!("0x{e}")).collect::<Vec<_>>().join(", ");
        format!("{{ {:>5}, {{ {data} }} }}", packed.code_point)
    }

    /// C type name matching the configured element size.
    pub fn element_type(&self) -> &'static str {
        match self.config.element_size {
            1 => "uint8_t",
            2 => "uint16_t",
            _ => "uint32_t",
        }
    }

    /// Per-glyph element count, derived from transformed dimensions: one
    /// column packs into `ceil(height / (8 * element_size))` elements.
    pub fn elements_per_glyph(&self, transformed: &PixelGrid) -> usize {
        transformed.width() * transformed.height().div_ceil(8 * self.config.element_size as usize)
    }

    /// Struct typedef sized from the *transformed* sample glyph. All glyphs
    /// of a run must transform to congruent dimensions; this is not
    /// re-validated against the rest of the batch.
    pub fn layout_header(&self, sample: &Glyph) -> String {
        let transformed = self.transform(sample);
        let elements = self.elements_per_glyph(&transformed);
        format!(
            "#include <stdint.h>\n\ntypedef struct {{\n\tchar16_t code;\n\t{} data[{elements}];\n}} {};",
            self.element_type(),
            self.struct_name
        )
    }

    /// Array declaration opening line.
    pub fn array_open(&self) -> String {
        format!("const static {} {}[] = {{", self.struct_name, self.array_name)
    }

    /// Array closing line.
    pub fn array_close(&self) -> &'static str {
        "};"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bar_glyph() -> Glyph {
        Glyph::new(0x61, 'a', PixelGrid::from_pattern(&["01100", "01100"]))
    }

    #[test]
    fn test_default_config() {
        let config = TransformConfig::default();
        assert_eq!(config.pad_top, 0);
        assert_eq!(config.byte_order, ByteOrder::RowMajor);
        assert_eq!(config.element_size, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_element_size_validation() {
        let mut config = TransformConfig::default();
        assert!(config.set_element_size(0).is_err());
        assert!(config.set_element_size(5).is_err());
        assert!(config.set_element_size(2).is_ok());
        assert_eq!(config.element_size, 2);

        let mut bad = TransformConfig::default();
        bad.element_size = 7;
        assert!(GlyphEncoder::new(bad).is_err());
    }

    #[test]
    fn test_rotation_mutators_accumulate() {
        let mut config = TransformConfig::default();
        config.rotate_cw();
        config.rotate_cw();
        config.rotate_ccw();
        assert_eq!(config.rotation, 1);
    }

    #[test]
    fn test_transform_applies_fixed_order() {
        // Trimming the top row must happen before rotation, so the surviving
        // row is the original bottom one.
        let glyph = Glyph::new(0x30, '0', PixelGrid::from_pattern(&["11", "01"]));
        let mut config = TransformConfig::default();
        config.set_padding_top(-1);
        config.rotate_cw();

        let encoder = GlyphEncoder::new(config).unwrap();
        let grid = encoder.transform(&glyph);
        assert_eq!(grid, PixelGrid::from_pattern(&["0", "1"]));
    }

    #[test]
    fn test_negative_rotation_wraps() {
        let glyph = Glyph::new(0x30, '0', PixelGrid::from_pattern(&["10", "00"]));
        let mut cw3 = TransformConfig::default();
        cw3.rotation = 3;
        let mut ccw1 = TransformConfig::default();
        ccw1.rotate_ccw();

        let a = GlyphEncoder::new(cw3).unwrap().transform(&glyph);
        let b = GlyphEncoder::new(ccw1).unwrap().transform(&glyph);
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_vertical_bar() {
        let encoder = GlyphEncoder::new(TransformConfig::default()).unwrap();
        let packed = encoder.encode(&bar_glyph());
        assert_eq!(packed.code_point, 0x61);
        assert_eq!(packed.elements, vec!["00", "03", "03", "00", "00"]);
    }

    #[test]
    fn test_entry_format() {
        let encoder = GlyphEncoder::new(TransformConfig::default()).unwrap();
        assert_eq!(encoder.entry(&bar_glyph()), "{    97, { 0x00, 0x03, 0x03, 0x00, 0x00 } }");
    }

    #[test]
    fn test_describe_printable() {
        let encoder = GlyphEncoder::new(TransformConfig::default()).unwrap();
        assert_eq!(encoder.describe(&bar_glyph()), "' a ' (0x0061)");
    }

    #[test]
    fn test_describe_control_code() {
        let encoder = GlyphEncoder::new(TransformConfig::default()).unwrap();
        let tab = Glyph::new(0x09, '\t', PixelGrid::new(2, 2));
        assert_eq!(encoder.describe(&tab), "'   ' (0x0009)");
    }

    #[test]
    fn test_layout_header() {
        let encoder = GlyphEncoder::new(TransformConfig::default()).unwrap();
        assert_eq!(
            encoder.layout_header(&bar_glyph()),
            "#include <stdint.h>\n\ntypedef struct {\n\tchar16_t code;\n\tuint8_t data[5];\n} fontGlyphEntry_t;"
        );
    }

    #[test]
    fn test_layout_header_wide_elements() {
        let glyph = Glyph::new(0x41, 'A', PixelGrid::new(6, 12));
        let mut config = TransformConfig::default();
        config.set_element_size(2).unwrap();
        let mut encoder = GlyphEncoder::new(config).unwrap();
        encoder.set_struct_name("glyph_t");
        // 12 rows pack into one 16-bit element per column.
        assert_eq!(
            encoder.layout_header(&glyph),
            "#include <stdint.h>\n\ntypedef struct {\n\tchar16_t code;\n\tuint16_t data[6];\n} glyph_t;"
        );
    }

    #[test]
    fn test_array_open_close() {
        let mut encoder = GlyphEncoder::new(TransformConfig::default()).unwrap();
        assert_eq!(encoder.array_open(), "const static fontGlyphEntry_t fontArray[] = {");
        encoder.set_struct_name("glyph_t");
        encoder.set_array_name("asciiFont");
        assert_eq!(encoder.array_open(), "const static glyph_t asciiFont[] = {");
        assert_eq!(encoder.array_close(), "};");
    }
}
