//! proofcheck - screenshot presence checks for visual verification gates
//!
//! This tool checks that the expected screenshot artifacts exist on disk for
//! a named feature across every required device, reports what was found and
//! what is missing, and signals the result through its exit code so it can
//! gate commits and CI runs.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

/// Main entry point for the proofcheck CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
