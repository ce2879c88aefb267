//! Architecture tests for file size limits.
//!
//! - Files >700 LOC require justification (warning logged)
//! - Files >1000 LOC are presumed mis-scoped (test failure)
//!
//! This test walks all .rs files in the crates/ directory and checks their
//! line counts against established thresholds.

use std::fs;
use std::path::{Path, PathBuf};

const WARNING_THRESHOLD: usize = 700;
const FAILURE_THRESHOLD: usize = 1000;

/// Files excluded from size checks with justification.
///
/// Each entry is a (path_suffix, justification) tuple.
const EXCLUDED_FILES: &[(&str, &str)] = &[];

#[test]
fn file_size_limits() {
    let workspace_root = find_workspace_root();
    let crates_dir = workspace_root.join("crates");

    assert!(
        crates_dir.exists(),
        "crates/ directory not found at {:?}",
        crates_dir
    );

    let mut failures = Vec::new();
    let mut warnings = Vec::new();

    for file_path in rust_files(&crates_dir) {
        let loc = count_loc(&fs::read_to_string(&file_path).expect("Failed to read file"));
        let relative_path = file_path.strip_prefix(&workspace_root).unwrap_or(&file_path);
        let relative_str = relative_path.to_string_lossy().to_string();

        let is_excluded = EXCLUDED_FILES
            .iter()
            .any(|(suffix, _)| relative_str.ends_with(suffix));

        if loc > FAILURE_THRESHOLD && !is_excluded {
            failures.push((relative_str, loc));
        } else if loc > WARNING_THRESHOLD {
            warnings.push((relative_str, loc));
        }
    }

    for (path, loc) in &warnings {
        eprintln!("[architecture] warning: {}: {} LOC (> {})", path, loc, WARNING_THRESHOLD);
    }

    if !failures.is_empty() {
        let mut error_message = format!(
            "\n=== Architecture Test Failed: File Size Limit Exceeded ===\n\n\
             Files exceeding {} LOC (presumed mis-scoped):\n",
            FAILURE_THRESHOLD
        );
        for (path, loc) in &failures {
            error_message.push_str(&format!("  - {}: {} lines\n", path, loc));
        }
        error_message.push_str("\nThese files must be split or added to EXCLUDED_FILES\n");
        panic!("{}", error_message);
    }
}

/// Count lines of code, excluding blank lines and `//` comments of any kind.
fn count_loc(content: &str) -> usize {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .count()
}

/// All .rs files under `dir`, skipping build output and this crate.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Find the workspace root by looking for Cargo.toml with [workspace].
fn find_workspace_root() -> PathBuf {
    let current_dir = std::env::current_dir().expect("Failed to get current directory");

    let mut dir = current_dir.as_path();
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists()
            && let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return current_dir,
        }
    }
}

#[test]
fn test_count_loc_basic() {
    let source = r#"// This is a comment
fn main() {
    let x = 5; // inline comment

    // Another comment
    println!("Hello");
}
"#;
    assert_eq!(count_loc(source), 4);
}

#[test]
fn test_count_loc_doc_comments() {
    let source = r#"//! Module documentation

/// Function documentation
fn test() {
    let x = 1;
}
"#;
    assert_eq!(count_loc(source), 3);
}

#[test]
fn test_rust_files_skips_target() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(temp_dir.path().join("target")).unwrap();
    fs::create_dir_all(temp_dir.path().join("src")).unwrap();
    fs::write(temp_dir.path().join("target").join("gen.rs"), "fn x() {}").unwrap();
    fs::write(temp_dir.path().join("src").join("lib.rs"), "fn y() {}").unwrap();

    let files = rust_files(temp_dir.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("src/lib.rs"));
}
