//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define the `LoadError` variants returned by `load_config`.
//! - Expose the kind, cause and attached details of every error.
//! - Define `OptionsError` for environment override parsing.
//!
//! Does NOT handle:
//! - Logging or surfacing errors to a user (callers decide).
//!
//! Invariants:
//! - Every variant carries the path of the config file involved.
//! - `details()` always returns a map, and it always includes `path`.
//! - `Reset` and `Fallback` are soft errors: the output value is valid.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Discriminant of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadErrorKind {
    /// The file could not be created or opened.
    Open,
    /// The file was opened but reading it failed.
    Read,
    /// Parsing failed, no default was supplied and erasing is disabled.
    DefaultNil,
    /// The chosen default could not be serialized to JSON.
    DefaultFailMarshal,
    /// Parsing failed and the file was rewritten with the default.
    Reset,
    /// Parsing failed and rewriting the file with the default failed.
    Write,
    /// Parsing failed and the default was applied without touching the file.
    Fallback,
}

impl LoadErrorKind {
    /// Returns false for the kinds that still leave a usable output value.
    pub const fn is_fatal(self) -> bool {
        !matches!(self, LoadErrorKind::Reset | LoadErrorKind::Fallback)
    }

    /// Stable snake_case name, matching the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            LoadErrorKind::Open => "open",
            LoadErrorKind::Read => "read",
            LoadErrorKind::DefaultNil => "default_nil",
            LoadErrorKind::DefaultFailMarshal => "default_fail_marshal",
            LoadErrorKind::Reset => "reset",
            LoadErrorKind::Write => "write",
            LoadErrorKind::Fallback => "fallback",
        }
    }
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a load attempt that did not end in a plain success.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Config file could not be created or opened at {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config file at {path} is not valid JSON and no default value is set")]
    DefaultNil {
        path: PathBuf,
        #[source]
        parse_error: serde_json::Error,
    },

    #[error("Failed to serialize default config for {path}: {source}")]
    DefaultFailMarshal {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Soft error: the file now holds the default and the output was set to it.
    #[error("Config file at {path} was reset to default")]
    Reset {
        path: PathBuf,
        #[source]
        parse_error: serde_json::Error,
        backup_path: Option<PathBuf>,
    },

    #[error("Failed to write default config to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Soft error: the output was set to the default, the file was left as is.
    #[error("Config file at {path} is not valid JSON, using default without rewriting it")]
    Fallback {
        path: PathBuf,
        #[source]
        parse_error: serde_json::Error,
    },
}

impl LoadError {
    /// The kind of this error.
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::Open { .. } => LoadErrorKind::Open,
            LoadError::Read { .. } => LoadErrorKind::Read,
            LoadError::DefaultNil { .. } => LoadErrorKind::DefaultNil,
            LoadError::DefaultFailMarshal { .. } => LoadErrorKind::DefaultFailMarshal,
            LoadError::Reset { .. } => LoadErrorKind::Reset,
            LoadError::Write { .. } => LoadErrorKind::Write,
            LoadError::Fallback { .. } => LoadErrorKind::Fallback,
        }
    }

    /// Returns true if this error is of the given kind.
    pub fn is(&self, kind: LoadErrorKind) -> bool {
        self.kind() == kind
    }

    /// See [`LoadErrorKind::is_fatal`].
    pub fn is_fatal(&self) -> bool {
        self.kind().is_fatal()
    }

    /// Path of the config file this error concerns.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Open { path, .. }
            | LoadError::Read { path, .. }
            | LoadError::DefaultNil { path, .. }
            | LoadError::DefaultFailMarshal { path, .. }
            | LoadError::Reset { path, .. }
            | LoadError::Write { path, .. }
            | LoadError::Fallback { path, .. } => path.as_path(),
        }
    }

    /// The underlying error, if any.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self)
    }

    /// Context attached to this error.
    ///
    /// Always contains `path`. Kinds wrapping an I/O or JSON failure also
    /// carry `error`; a reset that saved a backup carries `backup_path`.
    pub fn details(&self) -> BTreeMap<String, Value> {
        let mut details = BTreeMap::new();
        details.insert(
            "path".to_string(),
            Value::String(self.path().display().to_string()),
        );

        match self {
            LoadError::Open { source, .. }
            | LoadError::Read { source, .. }
            | LoadError::Write { source, .. } => {
                details.insert("error".to_string(), Value::String(source.to_string()));
            }
            LoadError::DefaultFailMarshal { source, .. } => {
                details.insert("error".to_string(), Value::String(source.to_string()));
            }
            LoadError::Reset {
                backup_path: Some(backup),
                ..
            } => {
                details.insert(
                    "backup_path".to_string(),
                    Value::String(backup.display().to_string()),
                );
            }
            _ => {}
        }

        details
    }
}

/// Errors raised while applying environment overrides to loader options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Invalid boolean for {var}: '{value}' (expected true/false, 1/0, yes/no, on/off)")]
    InvalidBool { var: String, value: String },
}
