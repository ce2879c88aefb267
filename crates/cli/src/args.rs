//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn global flags into `LoaderOptions`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use jcf_config::LoaderOptions;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jcf")]
#[command(about = "Load a JSON config file, falling back to a default value", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  jcf --path app.json load --default '{\"port\": 8080}'\n  jcf --path app.json --no-erase load --default-file defaults.json\n  jcf --path app.json check\n"
)]
pub struct Cli {
    /// Path to the JSON config file [default: config.json].
    #[arg(long, global = true, value_name = "FILE", env = "JCF_CONFIG_PATH")]
    pub path: Option<PathBuf>,

    /// Do not rewrite an unparseable file with the default.
    ///
    /// Can also be set via JCF_ERASE_ON_FAIL=false.
    #[arg(long, global = true)]
    pub no_erase: bool,

    /// Keep a `<name>.corrupt.<timestamp>` copy of an unparseable file before resetting it.
    #[arg(long, global = true)]
    pub backup: bool,

    /// Write the default as indented JSON.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the config file and print the resolved value as JSON
    Load {
        /// Default value as inline JSON
        #[arg(long, conflicts_with = "default_file", allow_hyphen_values = true)]
        default: Option<String>,

        /// Default value read from a JSON file
        #[arg(long, value_name = "FILE")]
        default_file: Option<PathBuf>,
    },

    /// Verify the config file parses, without ever rewriting it
    Check,
}

impl Cli {
    /// Loader options from env vars, then CLI flags (CLI wins).
    ///
    /// `--path` already falls back to `JCF_CONFIG_PATH` through clap; the
    /// erase override has no flag equivalent and comes from `from_env`.
    pub fn loader_options(&self) -> anyhow::Result<LoaderOptions<Value>> {
        let mut options = LoaderOptions::new().from_env()?;

        // Blank/whitespace-only values are ignored to allow fallback to env var
        if let Some(ref path) = self.path
            && !path.to_string_lossy().trim().is_empty()
        {
            options = options.with_path(path.clone());
        }
        if self.no_erase {
            options = options.with_erase_on_fail(false);
        }

        Ok(options
            .with_backup_on_reset(self.backup)
            .with_pretty(self.pretty))
    }
}
