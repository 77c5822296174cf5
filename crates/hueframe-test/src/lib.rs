//! hueframe-test - Regression test framework for hueframe
//!
//! Each `*_reg.rs` integration test drives a [`RegParams`], which counts
//! checks and collects failures, in one of three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use hueframe_test::{RegParams, RegTestMode};
//!
//! let mut rp = RegParams::new("centroid");
//! rp.compare_values(9.0, c.x as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use hueframe_core::PixelGrid;

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "blob.png")
pub fn load_test_image(name: &str) -> TestResult<PixelGrid> {
    let path = test_data_path(name);
    hueframe_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // hueframe-test is at crates/hueframe-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Path for a scratch file under the regout directory.
///
/// The directory is created if needed.
pub fn regout_path(name: &str) -> String {
    let _ = std::fs::create_dir_all(regout_dir());
    format!("{}/{}", regout_dir(), name)
}
