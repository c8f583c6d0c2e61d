//! Core module tree: token grammar, decoding, and listing rendering.
//! Nothing under here performs I/O except the diagnostics printer.

pub mod codepoint;
pub mod decoder;
pub mod diagnostics;
pub mod error;
pub mod listing;
pub mod token;
#[macro_use]
pub mod debug; // gated debug logging (EMOJI_PARSER_DEBUG=1) provides debug_log! macro

pub use codepoint::CodepointSequence;
pub use decoder::{decode_category_entry, decode_identifier};
pub use error::DecodeError;
