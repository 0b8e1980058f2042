#![warn(clippy::all)]
#![allow(clippy::cast_sign_loss, clippy::cast_possible_truncation, clippy::must_use_candidate)]

//! Glyph transformation and byte-packing engine.
//!
//! Converts bitmap font glyphs into packed byte arrays suitable for embedding
//! in firmware/C source. The core is [`PixelGrid`] (geometric operations and
//! the packing algorithm) and [`GlyphEncoder`] (applies a [`TransformConfig`]
//! to a stream of glyphs and formats the results). Font file parsing is
//! delegated to the `bdf` crate via [`BdfFont`].

mod error;
pub use error::*;

mod grid;
pub use grid::{ByteOrder, PixelGrid};

mod glyph;
pub use glyph::Glyph;

mod encoder;
pub use encoder::{GlyphEncoder, PackedEntry, TransformConfig};

mod bdf_font;
pub use bdf_font::{BdfFont, FontMetrics};

pub mod c_header;
