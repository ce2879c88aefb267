//! Centralized constants for the jcf workspace.
//!
//! Defaults and environment variable names shared by the loader and the CLI.

// =============================================================================
// Loader Defaults
// =============================================================================

/// Config file used when the caller does not name one.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Whether an unparseable file is overwritten with the default.
pub const DEFAULT_ERASE_ON_FAIL: bool = true;

/// Permission bits for a newly created config file.
#[cfg(unix)]
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Infix for backups of unparseable files: `<stem>.corrupt.<unix-seconds>`.
pub const CORRUPT_BACKUP_INFIX: &str = "corrupt";

/// Highest `.<n>` suffix tried when a backup name is already taken.
pub const MAX_BACKUP_SUFFIX: u32 = 99;

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the config file path.
pub const ENV_CONFIG_PATH: &str = "JCF_CONFIG_PATH";

/// Overrides erase-on-fail (`1|true|yes|on` or `0|false|no|off`).
pub const ENV_ERASE_ON_FAIL: &str = "JCF_ERASE_ON_FAIL";
