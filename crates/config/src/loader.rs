//! Load a JSON config file with fallback to a default value.
//!
//! Responsibilities:
//! - Open (creating if absent) the config file and read it in full.
//! - Deserialize the contents into the caller's output value.
//! - On parse failure, apply the default and optionally rewrite the file.
//!
//! Does NOT handle:
//! - Merging defaults into partially valid files.
//! - Locking; concurrent callers on the same path may race.
//!
//! Invariants:
//! - The file handle is owned by `load_config` and closed on every return path.
//! - `output` is only assigned whole values; a failed parse never leaves it
//!   half-written.
//! - The file is never deleted. It is only rewritten on `Reset`.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backup::write_corrupt_backup;
use crate::error::LoadError;
use crate::options::LoaderOptions;

/// Loads the config file described by `options` into `output`.
///
/// Passing `None` uses [`LoaderOptions::default`].
///
/// On success `output` holds the parsed file. When the file cannot be parsed:
///
/// - no default and erase disabled: `DefaultNil`, nothing is touched;
/// - erase enabled: the default (or the current `output` if there is no
///   default) is written to the file, `output` is set to it and the soft
///   error `Reset` is returned;
/// - erase disabled with a default: `output` is set to the default, the file
///   is left as is and the soft error `Fallback` is returned.
///
/// # Errors
///
/// Every non-success outcome is a [`LoadError`]; check
/// [`LoadError::is_fatal`] to tell the soft kinds apart.
pub fn load_config<T>(options: Option<&LoaderOptions<T>>, output: &mut T) -> Result<(), LoadError>
where
    T: Serialize + DeserializeOwned + Clone,
{
    let fallback_options;
    let options = match options {
        Some(options) => options,
        None => {
            fallback_options = LoaderOptions::default();
            &fallback_options
        }
    };
    let path = options.path();

    let mut file = open_config_file(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut contents = Vec::new();
    file.read_to_end(&mut contents)
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let parse_error = match serde_json::from_slice::<T>(&contents) {
        Ok(value) => {
            *output = value;
            tracing::debug!(path = %path.display(), "Config loaded");
            return Ok(());
        }
        Err(e) => e,
    };

    let config_default = match (options.config_default(), options.erase_on_fail()) {
        (None, false) => {
            return Err(LoadError::DefaultNil {
                path: path.to_path_buf(),
                parse_error,
            });
        }
        (config_default, _) => config_default,
    };

    // Without a default, the caller's current value is what gets written back.
    let serialized = serialize_default(config_default.unwrap_or(&*output), options.pretty())
        .map_err(|source| LoadError::DefaultFailMarshal {
            path: path.to_path_buf(),
            source,
        })?;

    if !options.erase_on_fail() {
        if let Some(value) = config_default {
            *output = value.clone();
        }
        tracing::warn!(
            path = %path.display(),
            error = %parse_error,
            "Config file is not valid JSON, using default without rewriting it"
        );
        return Err(LoadError::Fallback {
            path: path.to_path_buf(),
            parse_error,
        });
    }

    let backup_path = if options.backup_on_reset() && !contents.is_empty() {
        match write_corrupt_backup(path, &contents) {
            Ok(backup_path) => Some(backup_path),
            Err(backup_err) => {
                tracing::error!(
                    path = %path.display(),
                    backup_error = %backup_err,
                    "Could not back up unparseable config file, resetting anyway"
                );
                None
            }
        }
    } else {
        None
    };

    rewrite_file(&mut file, &serialized).map_err(|source| LoadError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(value) = config_default {
        *output = value.clone();
    }

    tracing::warn!(
        path = %path.display(),
        backup_path = ?backup_path,
        error = %parse_error,
        "Config file is not valid JSON, reset to default"
    );

    Err(LoadError::Reset {
        path: path.to_path_buf(),
        parse_error,
        backup_path,
    })
}

/// Resolves a config value starting from `T::default()`.
///
/// Returns the value together with the error, if any. After a fatal error
/// the value is `T::default()`; after a soft error it is the applied default.
pub fn load_or_default<T>(options: Option<&LoaderOptions<T>>) -> (T, Option<LoadError>)
where
    T: Serialize + DeserializeOwned + Clone + Default,
{
    let mut value = T::default();
    match load_config(options, &mut value) {
        Ok(()) => (value, None),
        Err(e) if e.is_fatal() => (T::default(), Some(e)),
        Err(e) => (value, Some(e)),
    }
}

/// Opens `path` for reading and writing, creating it if missing.
fn open_config_file(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(false);

    #[cfg(unix)]
    {
        use crate::constants::DEFAULT_FILE_MODE;
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(DEFAULT_FILE_MODE);
    }

    options.open(path)
}

fn serialize_default<T: Serialize + ?Sized>(
    value: &T,
    pretty: bool,
) -> Result<Vec<u8>, serde_json::Error> {
    if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    }
}

/// Replaces the whole content of an open file.
///
/// Not atomic: if a step after `set_len` fails, the file may already be
/// truncated or only partly written.
fn rewrite_file(file: &mut File, contents: &[u8]) -> std::io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(contents)?;
    file.flush()
}
