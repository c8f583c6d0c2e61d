//! src/commands/decode.rs
//! `decode`: identifier tokens (or asset paths) from the command line.

use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::decoder::{decode_identifier_detailed, token_from_asset_path, Decoded};
use crate::core::diagnostics::report;
use crate::core::CodepointSequence;

#[derive(Debug, Serialize)]
struct DecodeReport<'a> {
    input: &'a str,
    token: &'a str,
    segment: &'a str,
    resolution: &'static str,
    sequence: &'a CodepointSequence,
}

pub fn render(input: &str, token: &str, decoded: &Decoded, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format!(
            "{}\t{}\t{}",
            token,
            decoded.sequence,
            decoded.sequence.to_code_points()
        ),
        OutputFormat::Hex => decoded.sequence.to_hex_identifier(),
        OutputFormat::Json => serde_json::to_string(&DecodeReport {
            input,
            token,
            segment: &decoded.segment,
            resolution: decoded.resolution.as_str(),
            sequence: &decoded.sequence,
        })?,
    })
}

pub fn main(inputs: Vec<String>, as_paths: bool, format: OutputFormat, pretty: bool) -> Result<i32> {
    let mut failed = 0usize;
    for (i, input) in inputs.iter().enumerate() {
        let token = if as_paths {
            token_from_asset_path(input)
        } else {
            input.to_lowercase()
        };
        match decode_identifier_detailed(&token) {
            Ok(decoded) => {
                crate::debug_log!(
                    "{}: segment '{}' ({})",
                    token,
                    decoded.segment,
                    decoded.resolution.as_str()
                );
                println!("{}", render(input, &token, &decoded, format)?);
            }
            Err(e) => {
                report("<args>", i + 1, &e, pretty);
                failed += 1;
            }
        }
    }
    Ok(if failed == 0 { 0 } else { 1 })
}
