//! Loader options (the per-call loader configuration).
//!
//! Responsibilities:
//! - Hold the path, erase-on-fail policy, default value and write flags.
//! - Provide `with_*` builder methods and environment overrides.
//!
//! Does NOT handle:
//! - File I/O (see `loader.rs`).
//!
//! Invariants:
//! - `LoaderOptions::default()` always builds a fresh record; there is no
//!   process-wide default instance.
//! - `from_env` overrides whatever was set before it is called.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constants::{
    DEFAULT_CONFIG_PATH, DEFAULT_ERASE_ON_FAIL, ENV_CONFIG_PATH, ENV_ERASE_ON_FAIL,
};
use crate::env::{env_var_or_none, parse_bool};
use crate::error::{LoadError, OptionsError};

/// Options controlling a single `load_config` call.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderOptions<T> {
    path: PathBuf,
    erase_on_fail: bool,
    config_default: Option<T>,
    backup_on_reset: bool,
    pretty: bool,
}

impl<T> Default for LoaderOptions<T> {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
            erase_on_fail: DEFAULT_ERASE_ON_FAIL,
            config_default: None,
            backup_on_reset: false,
            pretty: false,
        }
    }
}

impl<T> LoaderOptions<T> {
    /// Options for `config.json` with erase-on-fail enabled and no default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the config file path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Overwrite the file with the default when it cannot be parsed.
    pub fn with_erase_on_fail(mut self, erase: bool) -> Self {
        self.erase_on_fail = erase;
        self
    }

    /// Value used when the file cannot be parsed.
    pub fn with_default(mut self, value: T) -> Self {
        self.config_default = Some(value);
        self
    }

    /// Copy unparseable contents to `<stem>.corrupt.<unix-seconds>` before a reset.
    pub fn with_backup_on_reset(mut self, backup: bool) -> Self {
        self.backup_on_reset = backup;
        self
    }

    /// Write the default as indented JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Apply `JCF_CONFIG_PATH` and `JCF_ERASE_ON_FAIL` overrides.
    ///
    /// Blank variables are ignored.
    ///
    /// # Errors
    /// Returns `OptionsError::InvalidBool` if `JCF_ERASE_ON_FAIL` is not a
    /// recognised boolean.
    pub fn from_env(mut self) -> Result<Self, OptionsError> {
        if let Some(path) = env_var_or_none(ENV_CONFIG_PATH) {
            self.path = PathBuf::from(path);
        }
        if let Some(raw) = env_var_or_none(ENV_ERASE_ON_FAIL) {
            self.erase_on_fail = parse_bool(ENV_ERASE_ON_FAIL, &raw)?;
        }
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn erase_on_fail(&self) -> bool {
        self.erase_on_fail
    }

    pub fn config_default(&self) -> Option<&T> {
        self.config_default.as_ref()
    }

    pub fn backup_on_reset(&self) -> bool {
        self.backup_on_reset
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

impl<T> LoaderOptions<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Shorthand for [`crate::load_config`] with these options.
    pub fn load(&self, output: &mut T) -> Result<(), LoadError> {
        crate::loader::load_config(Some(self), output)
    }
}
