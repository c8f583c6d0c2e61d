use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Input, glyph and code points, tab separated
    #[default]
    Text,
    /// Canonical `-`-joined hex identifier
    Hex,
    /// One JSON object per line
    Json,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BatchMode {
    /// Lines are image sources, optionally followed by a tab and a title
    #[default]
    Images,
    /// Lines are listing labels like `😀 Grinning Face`
    #[clap(alias = "categories")]
    Category,
}

#[derive(Debug, Parser)]
#[command(
    name = "emoji-parser",
    about = "Decode emoji asset identifiers and listing labels into Unicode scalar values",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct EmojiCli {
    /// Global: colored diagnostics pointing at the offending part
    #[arg(long = "pretty-errors", action = ArgAction::SetTrue, global = true)]
    pub pretty_errors: bool,

    /// Global: path to config (TOML); default: ~/.emoji_parser/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode identifier tokens
    ///
    /// Examples:
    ///   emoji-parser decode apple_1f91a-1f3fb_1f3fb
    ///   emoji-parser decode --path https://cdn.example.org/72/apple/grinning-face_1f600.png
    Decode {
        #[arg(value_name = "TOKEN", required = true)]
        tokens: Vec<String>,

        /// Treat arguments as asset paths/URLs and extract the token first
        #[arg(long = "path", action = ArgAction::SetTrue)]
        path: bool,

        #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Decode listing labels (glyph, space, display name)
    Category {
        #[arg(value_name = "TEXT", required = true)]
        entries: Vec<String>,

        #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Decode one item per line and write listing records
    ///
    /// Failing lines are reported and skipped; the exit status is 1 if any failed.
    Batch {
        /// Input file, or `-` for stdin
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[arg(long = "mode", value_enum, default_value_t = BatchMode::Images)]
        mode: BatchMode,

        /// Output file (written atomically). Defaults to stdout.
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Show the effective listing configuration
    Config {
        /// Only print the config file path that would be used
        #[arg(long = "path", action = ArgAction::SetTrue)]
        path: bool,
    },
}
