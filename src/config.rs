//! Listing layout: built-in defaults + optional TOML config.
//!
//! - `ListingConfig::default()` → `<glyph>,Images\Emoticons\<name>.png`
//! - `ListingConfig::from_toml_file(path)` → user overrides, missing keys keep defaults
//! - `ListingConfig::load(cli_path)` → `--config FILE`, else ~/.emoji_parser/config.toml if present

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListingConfig {
    /// Between the glyph and the name/path field.
    pub delimiter: String,
    /// Directory written in front of image file names.
    pub asset_dir: String,
    pub path_separator: String,
    pub extension: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            asset_dir: "Images\\Emoticons".to_string(),
            path_separator: "\\".to_string(),
            extension: "png".to_string(),
        }
    }
}

impl ListingConfig {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// An explicit path must exist; the default path is optional.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        if let Some(p) = cli_path {
            return Self::from_toml_file(p);
        }
        match default_config_path() {
            Some(p) if p.exists() => Self::from_toml_file(&p),
            _ => Ok(Self::default()),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.emoji_parser\config.toml on Windows; ~/.emoji_parser/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".emoji_parser").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
