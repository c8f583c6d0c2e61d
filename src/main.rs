//! emoji-parser — decode asset identifiers and listing labels into glyphs.

use clap::Parser; // trait import enables EmojiCli::parse()

use emoji_parser::cli::{Command, EmojiCli};
use emoji_parser::commands;
use emoji_parser::config::ListingConfig;

fn main() -> anyhow::Result<()> {
    let args = EmojiCli::parse();

    let code = match args.cmd {
        Command::Decode { tokens, path, format } => {
            commands::decode::main(tokens, path, format, args.pretty_errors)?
        }
        Command::Category { entries, format } => {
            commands::category::main(entries, format, args.pretty_errors)?
        }
        Command::Batch { input, mode, out } => {
            let cfg = ListingConfig::load(&args.config)?;
            commands::batch::main(input, mode, out, &cfg, args.pretty_errors)?
        }
        Command::Config { path } => commands::show_config::main(&args.config, path)?,
    };

    // 1 when at least one item failed to decode
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
