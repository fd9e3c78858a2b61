//! Producer-side configuration.
//!
//! A [`Config`] is usually loaded once at start-up from a TOML file. Every field has a
//! default, so an empty file (or a missing table) is valid.
//!
//! ```toml
//! [display]
//! width = 480
//! height = 272
//! rotation = "cw90"
//! mirror_x = false
//! mirror_y = true
//! offset_x = 0
//! offset_y = 0
//!
//! [touch]
//! drag_threshold = 3
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub touch: TouchConfig,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded input config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Clockwise rotation from touch-panel space to display space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    #[default]
    None,
    Cw90,
    Cw180,
    Cw270,
}

/// Geometry of the touch panel and how it maps onto the display.
///
/// `width`/`height` are the raw panel extent, before rotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: i16,
    pub height: i16,
    pub rotation: Rotation,
    pub mirror_x: bool,
    pub mirror_y: bool,
    pub offset_x: i16,
    pub offset_y: i16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 272,
            rotation: Rotation::None,
            mirror_x: false,
            mirror_y: false,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

/// Touch tracking thresholds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchConfig {
    /// Minimum movement on either axis, in panel units, before a drag is reported.
    pub drag_threshold: i16,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self { drag_threshold: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = Config::from_toml_str("").expect("parse");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.display.width, 480);
        assert_eq!(cfg.touch.drag_threshold, 1);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let cfg = Config::from_toml_str(
            r#"
            [display]
            rotation = "cw270"
            mirror_y = true

            [touch]
            drag_threshold = 4
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.display.rotation, Rotation::Cw270);
        assert!(cfg.display.mirror_y);
        assert!(!cfg.display.mirror_x);
        assert_eq!(cfg.display.height, 272);
        assert_eq!(cfg.touch.drag_threshold, 4);
    }

    #[test]
    fn unknown_rotation_is_rejected() {
        let err = Config::from_toml_str("[display]\nrotation = \"sideways\"\n");
        assert!(matches!(err, Err(crate::Error::ConfigParse(_))));
    }

    #[test]
    fn written_config_parses_back() {
        let mut cfg = Config::default();
        cfg.display.offset_x = -12;
        cfg.display.rotation = Rotation::Cw180;
        let text = cfg.to_toml_string().expect("serialize");
        assert_eq!(Config::from_toml_str(&text).expect("parse"), cfg);
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("tapwire-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[display]\nwidth = 800\nrotation = \"cw90\"\n\n[touch]\ndrag_threshold = 6\n")
            .expect("write config");

        let loaded = Config::load(&path);
        let _ = std::fs::remove_file(&path);
        let cfg = loaded.expect("load");

        assert_eq!(cfg.display.width, 800);
        assert_eq!(cfg.display.height, 272);
        assert_eq!(cfg.display.rotation, Rotation::Cw90);
        assert_eq!(cfg.touch.drag_threshold, 6);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load("/nonexistent/tapwire.toml");
        assert!(matches!(err, Err(crate::Error::Io(_))));
    }
}
