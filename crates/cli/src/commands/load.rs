//! `jcf load`: resolve the config value and print it.

use std::path::Path;

use anyhow::{Context, Result};
use jcf_config::{LoaderOptions, load_config};
use serde_json::Value;

/// Parses the default from inline JSON or a file, if either was given.
fn read_default(inline: Option<&str>, file: Option<&Path>) -> Result<Option<Value>> {
    if let Some(raw) = inline {
        let value = serde_json::from_str(raw).context("Invalid JSON in --default")?;
        return Ok(Some(value));
    }
    if let Some(path) = file {
        let raw = std::fs::read(path)
            .with_context(|| format!("Failed to read default file {}", path.display()))?;
        let value = serde_json::from_slice(&raw)
            .with_context(|| format!("Invalid JSON in default file {}", path.display()))?;
        return Ok(Some(value));
    }
    Ok(None)
}

pub fn run(
    options: LoaderOptions<Value>,
    default: Option<&str>,
    default_file: Option<&Path>,
) -> Result<()> {
    let options = match read_default(default, default_file)? {
        Some(value) => options.with_default(value),
        None => options,
    };

    let mut config = Value::Null;
    match load_config(Some(&options), &mut config) {
        Ok(()) => {}
        Err(e) if !e.is_fatal() => {
            eprintln!("warning: {}", e);
        }
        Err(e) => return Err(e).context("Failed to load config"),
    }

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
