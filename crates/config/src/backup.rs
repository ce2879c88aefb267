//! Backups of unparseable config files.
//!
//! Invariants:
//! - A backup never replaces the original; the caller still owns the rewrite.
//! - Backup names follow `<stem>.corrupt.<unix-seconds>` next to the original,
//!   with a `.<n>` suffix when that name is already taken.
//! - An existing backup is never overwritten.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::constants::{CORRUPT_BACKUP_INFIX, MAX_BACKUP_SUFFIX};

/// Path of backup number `attempt` of `path` taken at `timestamp`.
///
/// Attempt 0 has no suffix.
pub(crate) fn corrupt_backup_path(path: &Path, timestamp: u64, attempt: u32) -> PathBuf {
    // with_extension replaces only the last extension: config.json -> config.corrupt.N
    if attempt == 0 {
        path.with_extension(format!("{}.{}", CORRUPT_BACKUP_INFIX, timestamp))
    } else {
        path.with_extension(format!("{}.{}.{}", CORRUPT_BACKUP_INFIX, timestamp, attempt))
    }
}

/// Writes the unparseable `contents` of `path` to a new sibling backup file.
///
/// The original file is left in place because the loader still holds it
/// open and rewrites it in place afterwards.
///
/// # Returns
///
/// The path of the backup on success, or the IO error that prevented it.
pub(crate) fn write_corrupt_backup(path: &Path, contents: &[u8]) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    for attempt in 0..=MAX_BACKUP_SUFFIX {
        let backup_path = corrupt_backup_path(path, timestamp, attempt);
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&backup_path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        };
        file.write_all(contents)?;
        file.flush()?;
        return Ok(backup_path);
    }

    Err(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!(
            "all backup names for {} at {} are taken",
            path.display(),
            timestamp
        ),
    ))
}
