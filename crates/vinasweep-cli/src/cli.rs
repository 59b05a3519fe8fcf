use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "vinasweep - Blind docking sweeps with AutoDock Vina: tile a receptor-ligand complex into overlapping search boxes, dock each box, and collect the best binding modes.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one Vina job per grid box and run every job that has not finished yet.
    Sweep(SweepArgs),
    /// Collect binding modes below an energy threshold from finished jobs.
    Extract(ExtractArgs),
    /// Show how many jobs of a sweep have finished.
    Status(StatusArgs),
}

/// Arguments for the `sweep` subcommand.
#[derive(Args, Debug, Default)]
pub struct SweepArgs {
    // --- Core Arguments ---
    /// Path to the sweep configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the receptor structure (PDB/PDBQT).
    #[arg(short, long, value_name = "PATH")]
    pub receptor: Option<PathBuf>,

    /// Override the ligand structure (PDB/PDBQT).
    #[arg(short, long, value_name = "PATH")]
    pub ligand: Option<PathBuf>,

    /// Override the work directory that receives configs, logs and the job cache.
    #[arg(short, long, value_name = "PATH")]
    pub work_dir: Option<PathBuf>,

    // --- Grid and Engine Overrides ---
    /// Override the edge lengths of each search box, in Angstroms.
    #[arg(short, long, value_name = "X,Y,Z", value_delimiter = ',')]
    pub box_size: Option<Vec<f64>>,

    /// Override the number of CPUs passed to each Vina job.
    #[arg(long, value_name = "INT")]
    pub cpu: Option<usize>,

    /// Override the docking engine executable.
    #[arg(long, value_name = "PATH")]
    pub vina: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S options.exhaustiveness=16
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    /// Write the job files and job cache without launching the docking engine.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Path to the sweep configuration file; only its work directory is used.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the work directory to read the job cache from.
    #[arg(short, long, value_name = "PATH")]
    pub work_dir: Option<PathBuf>,

    /// Keep binding modes with an energy strictly below this value (kcal/mol).
    #[arg(short, long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub threshold: f64,

    /// Write the report to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `status` subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Path to the sweep configuration file; only its work directory is used.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the work directory to read the job cache from.
    #[arg(short, long, value_name = "PATH")]
    pub work_dir: Option<PathBuf>,

    /// List the names of unfinished jobs.
    #[arg(long)]
    pub list_pending: bool,
}
