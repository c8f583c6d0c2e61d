// src/core/listing.rs
//! Rendering decoded glyphs into the listing lines the downloader persists.

use serde::Serialize;

use crate::config::ListingConfig;
use crate::core::codepoint::CodepointSequence;

/// A glyph paired with the name it is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiRecord {
    pub glyph: CodepointSequence,
    pub name: String,
}

impl EmojiRecord {
    pub fn new(glyph: CodepointSequence, name: impl Into<String>) -> Self {
        Self { glyph, name: name.into() }
    }

    /// `😀,Images\Emoticons\grinning_face.png`
    pub fn image_line(&self, cfg: &ListingConfig) -> String {
        format!(
            "{}{}{}",
            self.glyph,
            cfg.delimiter,
            image_path(cfg, &self.name)
        )
    }

    /// `😀,grinning_face`
    pub fn category_line(&self, cfg: &ListingConfig) -> String {
        format!("{}{}{}", self.glyph, cfg.delimiter, self.name)
    }
}

pub fn image_path(cfg: &ListingConfig, stem: &str) -> String {
    if cfg.asset_dir.is_empty() {
        format!("{}.{}", stem, cfg.extension)
    } else {
        format!("{}{}{}.{}", cfg.asset_dir, cfg.path_separator, stem, cfg.extension)
    }
}

/// Name used in category listings: lower-cased, spaces → `_`.
pub fn category_name(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

/// File stem for a downloaded image, derived from its title.
///
/// Same as [`category_name`], then anything that is not a word character is
/// dropped.
pub fn asset_file_stem(title: &str) -> String {
    category_name(title)
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// Fallback stem when a source has no title: its leading label, with `-`
/// turned into `_`.
pub fn stem_from_token(token: &str) -> String {
    let label = token.split('_').next().unwrap_or(token);
    asset_file_stem(&label.replace('-', " "))
}
