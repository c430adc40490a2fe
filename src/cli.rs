//! CLI definitions and entry point

use clap::Parser;

use crate::commands;
use proofcheck::device::DEFAULT_DEVICES;
use proofcheck::output::OutputMode;

/// proofcheck - screenshot presence gate
#[derive(Parser, Debug)]
#[command(
    name = "proofcheck",
    version,
    about = "Verify screenshot artifacts exist for every required device",
    long_about = "Check that captured screenshots exist for a feature.\n\n\
                  Each required device must have at least one .png under\n\
                  visual-proofs/<feature>/<device-slug>/ for the gate to pass."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Feature whose screenshots to validate
    #[arg(value_name = "FEATURE")]
    pub feature: Option<String>,

    /// Devices that must have screenshots (defaults to the built-in list)
    #[arg(value_name = "DEVICE")]
    pub devices: Vec<String>,
}

/// Usage line printed when the feature argument is missing
const USAGE: &str = "Usage: proofcheck <feature-name> [device]...";

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(feature) = cli.feature else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "error": "missing required <feature-name> argument",
                    "usage": USAGE
                })
            );
        } else {
            println!("{USAGE}");
        }
        std::process::exit(1);
    };

    let devices: Vec<String> = if cli.devices.is_empty() {
        DEFAULT_DEVICES.iter().map(ToString::to_string).collect()
    } else {
        cli.devices
    };

    commands::validate(&feature, &devices, output_mode)
}
