//! JSON configuration file loading with default fallback.
//!
//! This crate opens a JSON config file (creating it if absent), deserializes
//! it into a caller-supplied value and, when the contents cannot be parsed,
//! falls back to a default value, optionally rewriting the file with it.
//!
//! ```rust,no_run
//! use jcf_config::{LoadErrorKind, LoaderOptions};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Default, Serialize, Deserialize)]
//! struct Settings {
//!     port: u16,
//! }
//!
//! let options = LoaderOptions::new()
//!     .with_path("settings.json")
//!     .with_default(Settings { port: 8080 });
//!
//! let mut settings = Settings::default();
//! match options.load(&mut settings) {
//!     Ok(()) => {}
//!     Err(e) if e.is(LoadErrorKind::Reset) => eprintln!("warning: {e}"),
//!     Err(e) => panic!("{e}"),
//! }
//! ```

mod backup;
pub mod constants;
mod env;
mod error;
mod loader;
mod options;

pub use env::env_var_or_none;
pub use error::{LoadError, LoadErrorKind, OptionsError};
pub use loader::{load_config, load_or_default};
pub use options::LoaderOptions;
