//! src/commands/show_config.rs
//! `config`: print the effective listing layout.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::{resolve_config_path, ListingConfig};

pub fn main(cli_path: &Option<PathBuf>, path_only: bool) -> Result<i32> {
    let path = resolve_config_path(cli_path);
    if path_only {
        match &path {
            Some(p) => println!("{}", p.display()),
            None => println!("(no home directory; built-in defaults only)"),
        }
        return Ok(0);
    }

    let cfg = ListingConfig::load(cli_path)?;
    let source = match &path {
        Some(p) if p.exists() => p.display().to_string(),
        _ => "built-in defaults".to_string(),
    };
    println!("# source: {}", source);
    println!("delimiter = {:?}", cfg.delimiter);
    println!("asset_dir = {:?}", cfg.asset_dir);
    println!("path_separator = {:?}", cfg.path_separator);
    println!("extension = {:?}", cfg.extension);
    Ok(0)
}
