use crate::i18n::Lang;
use crate::utils::error::{BottlError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "bottl.toml";

/// Optional on-disk defaults. Only display preferences live here; the
/// reference year is a compile-time constant and stays out of configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    pub language: Option<Lang>,
    pub unicode_boxes: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| BottlError::Config {
            message: format!("{}: {}", path.display(), e),
        })
    }

    /// Explicit path must exist; the well-known name is picked up only when
    /// present in the working directory.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    tracing::debug!("Loading display defaults from {}", DEFAULT_CONFIG_FILE);
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn language(&self) -> Option<Lang> {
        self.display.as_ref().and_then(|d| d.language)
    }

    pub fn unicode_boxes(&self) -> Option<bool> {
        self.display.as_ref().and_then(|d| d.unicode_boxes)
    }
}
