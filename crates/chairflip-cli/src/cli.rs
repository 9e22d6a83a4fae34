use chairflip::core::models::substituent::{Anomer, Substituent};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "chairflip CLI - Chair-conformation strain analysis for substituted cyclohexanes and pyranose sugars.",
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
    /// Compare the two chair conformers of a substituted ring.
    Analyze(AnalyzeArgs),
    /// List the available sugar templates.
    Sugars,
    /// List known substituent groups and their strain constants (A-values).
    Substituents(SubstituentsArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    // --- Molecule ---
    /// Build the molecule from a sugar template (e.g., 'glucose').
    #[arg(long, value_name = "NAME", conflicts_with = "substituents")]
    pub sugar: Option<String>,

    /// Anomer to use with --sugar (alpha or beta).
    #[arg(long, value_name = "ANOMER", default_value = "beta")]
    pub anomer: Anomer,

    /// Add a substituent as CARBON:POSITION:GROUP (e.g., '0:axial:CH3').
    /// Can be used multiple times; later entries replace earlier ones on the same slot.
    #[arg(short = 'x', long = "substituent", value_name = "SPEC")]
    pub substituents: Vec<Substituent>,

    /// Analyze starting from the ring-flipped chair.
    #[arg(long)]
    pub flipped: bool,

    // --- Configuration ---
    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the strain table with a TOML or CSV file of custom constants.
    #[arg(long, value_name = "PATH")]
    pub strain_table: Option<PathBuf>,

    /// Print drawing coordinates for both conformers.
    #[arg(short, long)]
    pub geometry: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.precision=3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `substituents` subcommand.
#[derive(Args, Debug)]
pub struct SubstituentsArgs {
    /// Layer a TOML or CSV file of custom constants over the built-in table.
    #[arg(long, value_name = "PATH")]
    pub strain_table: Option<PathBuf>,
}
