// src/core/diagnostics.rs
//! Per-item error reports: plain one-liners or colored, underlined snippets.

use colored::Colorize;

use crate::core::error::DecodeError;
use crate::core::token::RawToken;

pub struct Span {
    pub line: usize,
    pub col: usize,
    pub len: usize, // underline length (use 1 if unknown)
}

impl Span {
    /// Where `err` points inside the text it was raised for.
    ///
    /// Part errors come from the authoritative segment, so the part is
    /// located there rather than anywhere in the token.
    pub fn for_error(line: usize, err: &DecodeError) -> Self {
        let input = err.input();
        match err.offending() {
            Some(part) => {
                let at = RawToken::parse(input)
                    .authoritative()
                    .0
                    .part_offset(part)
                    .or_else(|| input.rfind(part))
                    .unwrap_or(0);
                Self {
                    line,
                    col: input[..at].chars().count() + 1,
                    len: part.chars().count().max(1),
                }
            }
            None => Self { line, col: 1, len: input.chars().count().max(1) },
        }
    }
}

/// One failing item; `origin` names where it came from (file, `<stdin>`, `<args>`).
pub fn report(origin: &str, line: usize, err: &DecodeError, pretty: bool) {
    if pretty {
        print_error(origin, err.input(), &err.to_string(), Span::for_error(line, err));
    } else {
        eprintln!("error: {}:{}: {}", origin, line, err);
    }
}

pub fn print_error(origin: &str, text: &str, title: &str, span: Span) {
    eprintln!(
        "{} {}",
        "error:".bright_red().bold(),
        title.bright_white()
    );
    let (ln, col) = (span.line, span.col);

    // line number gutter
    let ln_str = format!("{:>4}", ln);
    eprintln!("{} {}", "-->".bright_blue(), format!("{}:{}:{}", origin, ln, col).bright_white());
    eprintln!(" {} {}", " ".repeat(ln_str.len()).dimmed(), "|".dimmed());
    eprintln!("{} {} {}", ln_str.dimmed(), "|".dimmed(), text);

    // underline with ^^^^^
    eprintln!(
        " {} {} {}",
        " ".repeat(ln_str.len()).dimmed(),
        "|".dimmed(),
        underline(&span).bright_red()
    );
    eprintln!();
}

fn underline(span: &Span) -> String {
    " ".repeat(span.col.saturating_sub(1)) + &"^".repeat(span.len.max(1))
}
