use clap::{Args, Parser, Subcommand, ValueEnum};
use molscene::core::models::reference::ReferenceMolecule;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "molscene CLI - inspect, export and render molecular scene models.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the atom and bond tables of a model.
    Show(ShowArgs),
    /// Write a model as TOML, CSV record tables or raw interop records.
    Export(ExportArgs),
    /// Render a spinning sequence of frames and summarize each one.
    View(ViewArgs),
}

/// Where a command takes its model from. Exactly one source is required.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ModelSource {
    /// A built-in reference molecule (ethanol, simple, triad).
    #[arg(short, long, value_name = "NAME")]
    pub molecule: Option<ReferenceMolecule>,

    /// A TOML model file.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: ModelSource,

    /// Reject models in which two atoms share an id.
    #[arg(long)]
    pub strict: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// The TOML model format.
    Toml,
    /// Atom records, plus bond records in a sibling `*.bonds.csv` file.
    Csv,
    /// Raw `#[repr(C)]` atom records followed by raw bond records.
    Bin,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: ModelSource,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Toml)]
    pub format: ExportFormat,

    /// Path for the output file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments for the `view` subcommand.
#[derive(Args, Debug)]
pub struct ViewArgs {
    #[command(flatten)]
    pub source: ModelSource,

    /// Path to a scene configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of frames to render.
    #[arg(short = 'n', long, value_name = "INT")]
    pub frames: Option<u64>,

    /// Rotation about the vertical axis between frames, in radians.
    #[arg(long, value_name = "RADIANS", allow_negative_numbers = true)]
    pub spin: Option<f32>,

    /// Do not draw atom index labels.
    #[arg(long)]
    pub no_labels: bool,

    /// Do not draw translucent electron clouds.
    #[arg(long)]
    pub no_clouds: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S camera.distance=8
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
