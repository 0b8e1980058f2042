//! Unified error type for font2c_engine.

use thiserror::Error;

/// Main error type for engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("BDF parse error: {0}")]
    Bdf(#[from] bdf::Error),

    #[error("Element size must be 1-4 bytes, got {size}")]
    ElementSizeOutOfRange { size: u32 },

    #[error("No glyphs selected for output")]
    NoGlyphsSelected,
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
