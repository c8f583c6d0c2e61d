//! Decode emoji asset identifiers (`apple_1f91a-1f3fb_1f3fb`) and listing
//! labels (`😀 Grinning Face`) into the scalar values that render the glyph.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::{decode_category_entry, decode_identifier, CodepointSequence, DecodeError};
