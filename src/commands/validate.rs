//! Validate screenshot presence for a feature

use proofcheck::output::{OutputMode, ValidationReport};
use proofcheck::validator::Validator;

/// Validate screenshots for `feature` across `devices` and report.
///
/// Exits the process with code 1 when any device is missing screenshots so
/// the command can gate commit hooks and CI steps.
pub fn validate(feature: &str, devices: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let validator = Validator::default();
    let outcome = validator.validate(feature, devices)?;

    let passed = outcome.missing.is_empty();

    let report = ValidationReport {
        feature: feature.to_string(),
        required: devices.to_vec(),
        passed,
        found: outcome.found,
        missing: outcome.missing,
    };

    report.render(mode);

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}
