use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Icon rendering style for the filename column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    /// Emoji glyphs per file type.
    Unicode,
    /// Single-character ASCII markers; the named color still applies.
    Plain,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How file-type icons are drawn.
    pub icon_style: IconStyle,
    /// Display cells consumed per tree level by the branch glyphs.
    pub indent_width: usize,
    /// Hard cap on the column width; longer names are truncated.
    pub max_cell_width: usize,
    /// Whether git status decides the filename highlight.
    pub git_highlights: bool,
    /// Whether the demo walker lists dotfiles.
    pub show_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            icon_style: IconStyle::Unicode,
            indent_width: 2,
            max_cell_width: 60,
            git_highlights: true,
            show_hidden: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        // An empty or corrupted file falls back to defaults
        // (this can happen when the config format changes)
        if data.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_json::from_str(&data).unwrap_or_default())
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(&config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("treecol").join("config.json"))
    }
}
