//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing proofcheck components.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary working directory with a `visual-proofs/` artifacts tree
pub struct ProofTree {
    dir: TempDir,
}

impl ProofTree {
    /// Create an empty working directory (no artifacts root yet)
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Get the working directory to run the CLI from
    pub fn workdir(&self) -> &Path {
        self.dir.path()
    }

    /// Get the artifacts root (`<workdir>/visual-proofs`)
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("visual-proofs")
    }

    /// Create a device directory for a feature, returning its path
    pub fn add_device_dir(&self, feature: &str, slug: &str) -> PathBuf {
        let dir = self.root().join(feature).join(slug);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Create a file inside a feature's device directory
    pub fn add_file(&self, feature: &str, slug: &str, name: &str) {
        let dir = self.add_device_dir(feature, slug);
        fs::write(dir.join(name), b"fake image bytes").unwrap();
    }

    /// Create `count` numbered screenshots for a feature's device directory
    pub fn add_screenshots(&self, feature: &str, slug: &str, count: usize) {
        for i in 1..=count {
            self.add_file(feature, slug, &format!("{i:02}-step.png"));
        }
    }
}
