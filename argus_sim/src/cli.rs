use clap::Parser;
use std::path::PathBuf;

/// Argus: a headless harness for the vision pose estimator.
///
/// Simulates the tag tracker and the object tracker against a scripted robot
/// trajectory and runs the periodic telemetry task on a fixed cadence.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the scenario TOML file to run.
    #[arg(short, long, default_value = "assets/scenarios/default.toml")]
    pub scenario: PathBuf,

    /// Number of control cycles to run. Defaults to the scenario's duration
    /// times its rate.
    #[arg(short, long)]
    pub cycles: Option<u64>,

    /// Log filter directives (same syntax as `RUST_LOG`). Takes precedence
    /// over the environment.
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Print the fully resolved scenario as TOML and exit.
    #[arg(long, default_value_t = false)]
    pub dump_config: bool,
}
