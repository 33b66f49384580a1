use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "xyzbond",
    about = "Load XYZ atom lists and infer their bonds from covalent radii",
    version,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Detect bonds in an XYZ structure
    #[command(visible_alias = "b")]
    Bonds(BondsArgs),

    /// List the active element reference table
    #[command(visible_alias = "e")]
    Elements(ElementsArgs),
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Element reference data options.
#[derive(Args)]
#[command(next_help_heading = "Element Table")]
pub struct TableOptions {
    /// Reference dataset replacing the built-in table
    #[arg(long = "elements", value_name = "FILE")]
    pub elements: Option<PathBuf>,

    /// Let later lines override earlier ones for repeated symbols
    #[arg(long)]
    pub allow_duplicates: bool,
}

/// Bond detection options.
#[derive(Args)]
#[command(next_help_heading = "Bond Detection")]
pub struct DetectOptions {
    /// Distance threshold convention
    #[arg(long, value_name = "CONVENTION", default_value = "legacy")]
    pub threshold: Threshold,

    /// Pair enumeration strategy
    #[arg(long, value_name = "STRATEGY", default_value = "brute")]
    pub strategy: PairStrategy,
}

#[derive(Args)]
pub struct BondsArgs {
    /// Input XYZ file (stdin if omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub io: IoOptions,

    /// Report format
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: ReportFormat,

    /// Keep the origin-shifted frame instead of centering on the centroid
    #[arg(long)]
    pub no_center: bool,

    #[command(flatten)]
    pub table: TableOptions,

    #[command(flatten)]
    pub detect: DetectOptions,
}

#[derive(Args)]
pub struct ElementsArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub table: TableOptions,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum Threshold {
    /// Squared distance against the linear radius sum (d² < 2(rᵢ+rⱼ))
    #[default]
    Legacy,
    /// Squared distance against the squared radius sum (d < 2(rᵢ+rⱼ))
    Squared,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum PairStrategy {
    /// Evaluate every pair
    #[default]
    #[value(alias = "brute-force")]
    Brute,
    /// Compare atoms in neighboring grid cells only
    Grid,
    /// Evaluate every pair across all CPU cores
    Parallel,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Whitespace-separated bond table
    #[default]
    Text,
    /// Structure and bonds as a JSON document
    Json,
}

pub fn parse() -> Cli {
    Cli::parse()
}
