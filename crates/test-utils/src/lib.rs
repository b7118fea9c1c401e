//! Shared test utilities for the og-preview workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Test data path helpers
//! - Skip macros for optional font fixtures
//! - Generated logo and photo fixtures
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{require_test_fonts, fixture_photo_jpeg};
//! ```

pub mod fixtures;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use paths::*;

/// Macro to skip a test if no bold/regular font pair can be found.
///
/// # Usage
///
/// ```ignore
/// use test_utils::require_test_fonts;
///
/// #[test]
/// fn test_render() {
///     let fonts = require_test_fonts!();
///     // fonts.bold / fonts.regular are font file bytes
/// }
/// ```
///
/// If no fonts are found, the test prints a skip message and returns early.
#[macro_export]
macro_rules! require_test_fonts {
    () => {{
        match $crate::load_font_fixtures() {
            Some(fonts) => fonts,
            None => {
                eprintln!(
                    "SKIPPED: No font fixtures found. Install DejaVu fonts or set TEST_DATA_DIR."
                );
                return;
            }
        }
    }};
}

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}
