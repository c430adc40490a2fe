//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::validator::FoundDevice;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a validation run
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// The feature whose screenshots were checked
    pub feature: String,

    /// Devices that were required, in input order
    pub required: Vec<String>,

    /// Whether every required device has at least one screenshot
    pub passed: bool,

    /// Devices with screenshots, with counts
    pub found: Vec<FoundDevice>,

    /// Devices without screenshots
    pub missing: Vec<String>,
}

impl ValidationReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Validating screenshots for: {}", self.feature);
        println!("Required devices: {}", self.required.join(", "));
        println!();

        if !self.found.is_empty() {
            println!("✅ Screenshots found:");
            for f in &self.found {
                println!("  - {}: {} screenshot(s)", f.device, f.screenshots);
            }
        }

        if self.missing.is_empty() {
            println!("\n✅ All required screenshots present!");
        } else {
            println!("\n❌ Missing screenshots for:");
            for device in &self.missing {
                println!("  - {device}");
            }
            println!("\nRun: /verify-visual to capture missing screenshots");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
