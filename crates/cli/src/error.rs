//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `LoadErrorKind` to the matching exit code.
//!
//! Invariants:
//! - Soft load errors (reset, fallback) exit with success.
//! - Exit code 1 covers usage and anything that is not a `LoadError`.

use jcf_config::{LoadError, LoadErrorKind};

/// Structured exit codes for jcf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success, including a reset or fallback to the default.
    Success = 0,

    /// General error - bad arguments, invalid default JSON, env parsing.
    GeneralError = 1,

    /// The config file could not be created or opened.
    OpenFailed = 2,

    /// The config file could not be read.
    ReadFailed = 3,

    /// The file is not valid JSON and there was no default to fall back to.
    NoDefault = 4,

    /// The default value could not be serialized.
    DefaultNotSerializable = 5,

    /// Rewriting the file with the default failed.
    WriteFailed = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<LoadErrorKind> for ExitCode {
    fn from(kind: LoadErrorKind) -> Self {
        match kind {
            LoadErrorKind::Open => ExitCode::OpenFailed,
            LoadErrorKind::Read => ExitCode::ReadFailed,
            LoadErrorKind::DefaultNil => ExitCode::NoDefault,
            LoadErrorKind::DefaultFailMarshal => ExitCode::DefaultNotSerializable,
            LoadErrorKind::Write => ExitCode::WriteFailed,
            LoadErrorKind::Reset | LoadErrorKind::Fallback => ExitCode::Success,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no `LoadError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(load_err) = cause.downcast_ref::<LoadError>() {
                return ExitCode::from(load_err.kind());
            }
        }
        ExitCode::GeneralError
    }
}
