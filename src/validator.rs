//! Validator - checks screenshot presence for a feature across devices
//!
//! The Validator takes a feature name and a list of device identifiers and
//! partitions the devices into those with at least one captured screenshot
//! on disk and those without.
//!
//! # Examples
//!
//! ```no_run
//! use proofcheck::validator::Validator;
//!
//! let validator = Validator::default();
//! let devices = vec!["iPhone 15 Pro".to_string()];
//! let outcome = validator.validate("login-flow", &devices).unwrap();
//! assert!(outcome.missing.is_empty());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::device;
use crate::paths;

/// Glob matched against entry names inside a device directory
const SCREENSHOT_GLOB: &str = "*.png";

/// Errors that can occur during validation
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Screenshot glob failed to compile
    #[error("invalid screenshot pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// IO error while listing a device directory
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A device with at least one captured screenshot
#[derive(Debug, Clone, Serialize)]
pub struct FoundDevice {
    /// The device identifier as given by the caller
    pub device: String,

    /// Number of matching screenshot files
    pub screenshots: usize,
}

/// The found/missing partition produced by a validation run
///
/// Every input device lands in exactly one of the two lists, in input order.
#[derive(Debug, Default)]
pub struct Outcome {
    /// Devices with at least one screenshot, with counts
    pub found: Vec<FoundDevice>,

    /// Devices with no screenshot directory or no matching files
    pub missing: Vec<String>,
}

/// Validator for screenshot presence under an artifacts root
#[derive(Debug)]
pub struct Validator {
    /// Root directory containing one subdirectory per feature
    root: PathBuf,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(paths::proofs_root())
    }
}

impl Validator {
    /// Create a validator rooted at the given artifacts directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Partition `devices` by screenshot presence for `feature`.
    ///
    /// The feature name is used verbatim as a directory name under the
    /// root. A device is missing when its directory does not exist or
    /// contains no entry matching `*.png`. Absence is a normal outcome, not
    /// an error; only unexpected IO failures while listing an existing
    /// directory are returned as errors.
    pub fn validate(&self, feature: &str, devices: &[String]) -> Result<Outcome, ValidateError> {
        let pattern = Pattern::new(SCREENSHOT_GLOB)?;
        let base = self.root.join(feature);

        let mut outcome = Outcome::default();

        for device in devices {
            let device_dir = base.join(device::slug(device));

            if !device_dir.is_dir() {
                debug!("no screenshot directory at {}", device_dir.display());
                outcome.missing.push(device.clone());
                continue;
            }

            let count = count_matching(&device_dir, &pattern)?;
            if count == 0 {
                debug!("no screenshots in {}", device_dir.display());
                outcome.missing.push(device.clone());
            } else {
                debug!("{count} screenshot(s) in {}", device_dir.display());
                outcome.found.push(FoundDevice {
                    device: device.clone(),
                    screenshots: count,
                });
            }
        }

        Ok(outcome)
    }
}

/// Count entries directly inside `dir` whose name matches `pattern`.
///
/// Non-recursive; entries are matched by name only, with no file-type
/// filter.
fn count_matching(dir: &Path, pattern: &Pattern) -> Result<usize, ValidateError> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if pattern.matches(&entry.file_name().to_string_lossy()) {
            count += 1;
        }
    }
    Ok(count)
}
