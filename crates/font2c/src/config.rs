//! Optional TOML configuration file.
//!
//! Example:
//! ```toml
//! ranges = ["0x0000-0x007F", "0x0400-0x04FF"]
//! struct_name = "fontGlyphEntry_t"
//! array_name = "fontArray"
//!
//! [transform]
//! pad_top = -1
//! byte_order = "row_major"
//! element_size = 1
//! ```

use std::{fs, path::Path};

use anyhow::Context;
use font2c_engine::TransformConfig;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub transform: TransformConfig,
    pub ranges: Vec<String>,
    pub struct_name: Option<String>,
    pub array_name: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use font2c_engine::ByteOrder;

    #[test]
    fn test_parse_full_config() {
        let config: FileConfig = toml::from_str(
            r#"
            ranges = ["0x20-0x7E"]
            struct_name = "glyph_t"

            [transform]
            pad_top = -1
            mirror_vertical = true
            rotation = 2
            byte_order = "column_major"
            element_size = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.ranges, vec!["0x20-0x7E"]);
        assert_eq!(config.struct_name.as_deref(), Some("glyph_t"));
        assert_eq!(config.array_name, None);
        assert_eq!(config.transform.pad_top, -1);
        assert!(config.transform.mirror_vertical);
        assert_eq!(config.transform.rotation, 2);
        assert_eq!(config.transform.byte_order, ByteOrder::ColumnMajor);
        assert_eq!(config.transform.element_size, 2);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.transform, TransformConfig::default());
        assert!(config.ranges.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("paddding = 1").is_err());
    }
}
