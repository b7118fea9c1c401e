//! Path utilities for locating test data files.
//!
//! Font fixtures are not vendored. They are looked up in `TEST_DATA_DIR`,
//! the workspace `testdata/` directory and the usual system font
//! directories, so rendering tests run wherever a suitable font exists.

use std::path::PathBuf;

/// Returns the workspace root directory.
///
/// This is determined by walking up from the current crate's manifest directory
/// until we find the workspace Cargo.toml.
pub fn workspace_root() -> PathBuf {
    // Start from the test-utils crate manifest dir
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Returns the workspace-level testdata directory.
pub fn testdata_dir() -> PathBuf {
    workspace_root().join("testdata")
}

/// System directories searched for font fixtures.
const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/dejavu",
    "/usr/local/share/fonts",
    "/Library/Fonts",
];

/// Searches for a test file.
///
/// Checks, in order:
/// 1. Environment variable `TEST_DATA_DIR` (if set)
/// 2. `testdata/` at the workspace root
///
/// # Returns
///
/// `Some(PathBuf)` if the file is found, `None` otherwise.
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(test_data_dir) = std::env::var("TEST_DATA_DIR") {
        candidates.push(PathBuf::from(test_data_dir).join(name));
    }
    candidates.push(testdata_dir().join(name));

    candidates.into_iter().find(|path| path.exists())
}

/// Searches for a font file in the test data locations, then in system
/// font directories.
pub fn find_test_font(name: &str) -> Option<PathBuf> {
    if let Some(path) = find_test_file(name) {
        return Some(path);
    }
    if let Some(path) = find_test_file(&format!("fonts/{}", name)) {
        return Some(path);
    }

    SYSTEM_FONT_DIRS
        .iter()
        .map(|dir| PathBuf::from(dir).join(name))
        .find(|path| path.exists())
}
