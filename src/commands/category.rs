//! src/commands/category.rs
//! `category`: listing labels from the command line.

use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::decoder::decode_category_entry;
use crate::core::diagnostics::report;
use crate::core::CodepointSequence;

#[derive(Debug, Serialize)]
struct CategoryReport<'a> {
    input: &'a str,
    name: &'a str,
    sequence: &'a CodepointSequence,
}

pub fn render(input: &str, glyph: &CodepointSequence, name: &str, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format!("{}\t{}\t{}", glyph, name, glyph.to_code_points()),
        OutputFormat::Hex => format!("{}\t{}", glyph.to_hex_identifier(), name),
        OutputFormat::Json => serde_json::to_string(&CategoryReport { input, name, sequence: glyph })?,
    })
}

pub fn main(entries: Vec<String>, format: OutputFormat, pretty: bool) -> Result<i32> {
    let mut failed = 0usize;
    for (i, entry) in entries.iter().enumerate() {
        match decode_category_entry(entry) {
            Ok((glyph, name)) => println!("{}", render(entry, &glyph, &name, format)?),
            Err(e) => {
                report("<args>", i + 1, &e, pretty);
                failed += 1;
            }
        }
    }
    Ok(if failed == 0 { 0 } else { 1 })
}
