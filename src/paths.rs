//! Centralized path definitions for proofcheck
//!
//! This module provides a single source of truth for the filesystem layout
//! proofcheck reads.
//!
//! ## Artifact Layout
//!
//! ```text
//! visual-proofs/                  # Artifacts root (relative to cwd)
//! ├── login-flow/                 # One subdirectory per feature name
//! │   ├── iphone-15-pro/          # One subdirectory per device slug
//! │   │   ├── 01-initial.png
//! │   │   └── 02-submitted.png
//! │   └── iphone-se-3rd-generation/
//! │       └── 01-initial.png
//! └── settings/
//!     └── ...
//! ```
//!
//! Feature names are used verbatim as directory names; device directories
//! use the slug derived in [`crate::device::slug`]. Everything under the
//! root is read-only to this tool.

use std::path::PathBuf;

/// Directory name of the screenshot artifacts root
pub const PROOFS_DIR: &str = "visual-proofs";

/// Get the artifacts root directory.
///
/// Resolved relative to the process working directory, where the capture
/// tooling writes its output.
#[must_use]
pub fn proofs_root() -> PathBuf {
    PathBuf::from(PROOFS_DIR)
}
