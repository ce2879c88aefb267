//! `jcf check`: verify the config file parses without rewriting it.

use anyhow::{Context, Result};
use jcf_config::{LoaderOptions, load_config};
use serde_json::Value;

pub fn run(options: LoaderOptions<Value>) -> Result<()> {
    // A check must never rewrite the file, whatever the environment says.
    let options = options.with_erase_on_fail(false);

    let mut config = Value::Null;
    load_config(Some(&options), &mut config).with_context(|| {
        format!("Config file {} is not valid", options.path().display())
    })?;

    tracing::debug!(path = %options.path().display(), "Config file is valid JSON");
    println!("{}: ok", options.path().display());
    Ok(())
}
