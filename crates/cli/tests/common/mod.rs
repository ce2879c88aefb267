//! Shared test utilities for jcf integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic: host `JCF_*`
//!   variables and `RUST_LOG` never leak into the child process.

use assert_cmd::Command;

/// Returns a hermetic `jcf` command for integration testing.
pub fn jcf_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("jcf");

    cmd.env_remove("JCF_CONFIG_PATH")
        .env_remove("JCF_ERASE_ON_FAIL")
        .env_remove("RUST_LOG");

    cmd
}
