// src/core/decoder.rs
//! Identifier token → scalar values.
//!
//! Everything here is pure: no I/O, no shared state. Callers may decode as
//! many tokens as they like from as many threads as they like.

use crate::core::codepoint::CodepointSequence;
use crate::core::error::DecodeError;
use crate::core::listing::category_name;
use crate::core::token::{is_hex_digits, RawToken, Resolution};

/// Decoded identifier together with how its segment was picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub sequence: CodepointSequence,
    pub resolution: Resolution,
    /// The body segment the sequence was read from.
    pub segment: String,
}

/// Decode a lower-cased asset token such as `apple_1f91a-1f3fb_1f3fb`.
pub fn decode_identifier(token: &str) -> Result<CodepointSequence, DecodeError> {
    decode_identifier_detailed(token).map(|d| d.sequence)
}

/// Like [`decode_identifier`] but also reports the tie-break outcome.
pub fn decode_identifier_detailed(token: &str) -> Result<Decoded, DecodeError> {
    let raw = RawToken::parse(token);
    let (segment, resolution) = raw.authoritative();

    let scalars = segment
        .parts
        .iter()
        .map(|part| decode_hex_part(token, part))
        .collect::<Result<Vec<char>, _>>()?;

    // split('-') never yields zero parts, and an empty part fails above
    let sequence =
        CodepointSequence::new(scalars).ok_or_else(|| DecodeError::invalid_hex(token, segment.text))?;
    Ok(Decoded { sequence, resolution, segment: segment.text.to_string() })
}

/// Parse one `-`-part. Only bare hex digits are accepted: no sign, no `0x`.
pub fn decode_hex_part(token: &str, part: &str) -> Result<char, DecodeError> {
    if !is_hex_digits(part) {
        return Err(DecodeError::invalid_hex(token, part));
    }
    // digits are validated, so the only failure left is overflow
    let value = u32::from_str_radix(part, 16).map_err(|_| DecodeError::invalid_scalar(token, part))?;
    char::from_u32(value).ok_or_else(|| DecodeError::invalid_scalar(token, part))
}

/// Split a listing label like `😀 Grinning Face` into glyph and name.
///
/// The glyph is every scalar value before the first space; the name is the
/// remainder, lower-cased with spaces turned into underscores. Line breaks
/// and tabs around scraped text are dropped; spaces are significant.
pub fn decode_category_entry(display_text: &str) -> Result<(CodepointSequence, String), DecodeError> {
    let text = display_text.trim_matches(|c: char| c != ' ' && c.is_whitespace());
    let space = text
        .char_indices()
        .find(|&(_, c)| c == ' ')
        .map(|(i, _)| i)
        .ok_or_else(|| DecodeError::empty_input(display_text))?;

    let glyph =
        CodepointSequence::from_text(&text[..space]).ok_or_else(|| DecodeError::empty_input(display_text))?;
    Ok((glyph, category_name(&text[space + 1..])))
}

/// Token embedded in an image source: the text between the last path
/// separator and the last `.`, lower-cased. Query strings and fragments are
/// ignored.
pub fn token_from_asset_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let stem = match file.rfind('.') {
        Some(dot) => &file[..dot],
        None => file,
    };
    stem.to_lowercase()
}

pub fn decode_asset_path(path: &str) -> Result<CodepointSequence, DecodeError> {
    decode_identifier(&token_from_asset_path(path))
}
