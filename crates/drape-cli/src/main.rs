//! drape CLI: run cloth scenarios, list fabric presets, check settings.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drape_cli::ScenarioKind;

mod commands;

#[derive(Parser)]
#[command(name = "drape")]
#[command(version, about = "drape: mass-spring cloth simulator")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in fabric presets.
    Presets,

    /// Run a canned scenario and optionally export the final mesh.
    Simulate {
        /// Scenario to run (hanging, drop, drape).
        #[arg(short, long, default_value = "hanging")]
        scenario: ScenarioKind,

        /// Fabric preset.
        #[arg(short, long, default_value = "cotton")]
        material: String,

        /// Number of steps (defaults to the scenario's own).
        #[arg(short = 'n', long)]
        steps: Option<u32>,

        /// Simulation settings (TOML).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for wind turbulence.
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Stop at the first settled step.
        #[arg(long)]
        until_settled: bool,

        /// Write the final mesh as JSON.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a simulation settings file.
    Validate {
        /// Path to settings file (TOML).
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Presets => commands::presets(),
        Commands::Simulate {
            scenario,
            material,
            steps,
            config,
            seed,
            until_settled,
            output,
        } => commands::simulate(&commands::SimulateArgs {
            scenario,
            material,
            steps,
            config,
            seed,
            until_settled,
            output,
        }),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
