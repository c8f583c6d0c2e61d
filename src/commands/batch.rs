//! src/commands/batch.rs
//! One item per line in, listing records out. Bad lines are reported and skipped.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::BatchMode;
use crate::config::ListingConfig;
use crate::core::decoder::{decode_category_entry, decode_identifier_detailed, token_from_asset_path};
use crate::core::diagnostics::report;
use crate::core::error::DecodeError;
use crate::core::listing::{asset_file_stem, stem_from_token, EmojiRecord};
use crate::io::atomic::atomic_write;

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub lines: Vec<String>,
    /// 1-based input line number and the error it produced.
    pub failures: Vec<(usize, DecodeError)>,
}

impl BatchOutcome {
    pub fn rendered(&self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

/// Decode every non-blank, non-`#` line of `text`.
pub fn process(text: &str, mode: BatchMode, cfg: &ListingConfig) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        match decode_line(line, mode) {
            Ok(record) => outcome.lines.push(match mode {
                BatchMode::Images => record.image_line(cfg),
                BatchMode::Category => record.category_line(cfg),
            }),
            Err(e) => outcome.failures.push((idx + 1, e)),
        }
    }
    outcome
}

fn decode_line(line: &str, mode: BatchMode) -> Result<EmojiRecord, DecodeError> {
    match mode {
        BatchMode::Images => {
            let (source, title) = match line.split_once('\t') {
                Some((s, t)) => (s.trim(), Some(t.trim())),
                None => (line.trim(), None),
            };
            let token = token_from_asset_path(source);
            let decoded = decode_identifier_detailed(&token)?;
            crate::debug_log!(
                "{}: segment '{}' ({})",
                token,
                decoded.segment,
                decoded.resolution.as_str()
            );
            let name = match title {
                Some(t) if !t.is_empty() => asset_file_stem(t),
                _ => stem_from_token(&token),
            };
            Ok(EmojiRecord::new(decoded.sequence, name))
        }
        BatchMode::Category => {
            let (glyph, name) = decode_category_entry(line)?;
            Ok(EmojiRecord::new(glyph, name))
        }
    }
}

fn read_input(input: &Path) -> Result<(String, String)> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(("<stdin>".to_string(), buf));
    }
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    Ok((input.display().to_string(), text))
}

pub fn main(
    input: PathBuf,
    mode: BatchMode,
    out: Option<PathBuf>,
    cfg: &ListingConfig,
    pretty: bool,
) -> Result<i32> {
    let (origin, text) = read_input(&input)?;
    let outcome = process(&text, mode, cfg);

    for (line, err) in &outcome.failures {
        report(&origin, *line, err, pretty);
    }

    match out {
        Some(path) => {
            atomic_write(&path, outcome.rendered())
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!(
                "wrote {} record(s) to {}",
                outcome.lines.len(),
                path.display()
            );
        }
        None => print!("{}", outcome.rendered()),
    }

    if !outcome.failures.is_empty() {
        eprintln!(
            "decoded {}, skipped {}",
            outcome.lines.len(),
            outcome.failures.len()
        );
    }
    Ok(if outcome.failures.is_empty() { 0 } else { 1 })
}
