use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use dock_sift::OnMissing;

#[derive(Parser)]
#[command(
    name = "dsift",
    about = "DOCK mol2 post-processing toolkit",
    version,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Flag molecules with intramolecular steric clashes
    #[command(visible_alias = "c")]
    Clash(ClashArgs),

    /// Split a multi-molecule file into one file per molecule
    #[command(visible_alias = "s")]
    Split(SplitArgs),

    /// Extract descriptor headers into a CSV table and positions index
    #[command(visible_alias = "t")]
    Tables(TablesArgs),

    /// Filter a fragment library by sampling frequency
    #[command(visible_alias = "f")]
    Fraglib(FraglibArgs),

    /// Render ranked poses as a standalone HTML report
    #[command(visible_alias = "r")]
    Report(ReportArgs),
}

/// Options shared by all commands.
#[derive(Args)]
pub struct CommonOptions {
    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct ClashArgs {
    /// Multi-molecule mol2 file(s) to scan
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Scan every restart<N> file found in this directory instead
    #[arg(long = "restart-dir", value_name = "DIR")]
    pub restart_dir: Option<PathBuf>,

    /// Distance below which an atom pair counts as a clash (Å)
    #[arg(
        long,
        value_name = "Å",
        default_value_t = dock_sift::clash::DEFAULT_CUTOFF
    )]
    pub cutoff: f64,

    #[command(flatten)]
    pub common: CommonOptions,
}

#[derive(Args)]
pub struct SplitArgs {
    /// Input multi-molecule mol2 file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Directory for the per-molecule files (current dir if omitted)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonOptions,
}

#[derive(Args)]
pub struct TablesArgs {
    /// Input multi-molecule mol2 file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Descriptor labels to extract (TOML file, DOCK 6 set if omitted)
    #[arg(long, value_name = "FILE")]
    pub descriptors: Option<PathBuf>,

    /// Behavior when a molecule lacks a requested descriptor
    #[arg(long = "on-missing", value_name = "POLICY", default_value = "fail")]
    pub on_missing: MissingPolicy,

    /// CSV output path (input with a .csv extension if omitted)
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Positions index path (positions_<stem>.dat next to input if omitted)
    #[arg(long, value_name = "FILE")]
    pub positions: Option<PathBuf>,

    /// Descriptor column naming molecules in the positions index
    #[arg(
        long = "name-column",
        value_name = "LABEL",
        default_value = dock_sift::tables::DEFAULT_NAME_COLUMN
    )]
    pub name_column: String,

    #[command(flatten)]
    pub common: CommonOptions,
}

#[derive(Args)]
pub struct FraglibArgs {
    /// Fragment library mol2 file(s)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Keep only fragments sampled strictly more often than this
    #[arg(
        long,
        value_name = "N",
        default_value_t = dock_sift::fraglib::DEFAULT_CUTOFF
    )]
    pub cutoff: u64,

    /// Suffix appended to each input's stem for the filtered output
    #[arg(long, value_name = "TEXT", default_value = "_cutoff")]
    pub suffix: String,

    #[command(flatten)]
    pub common: CommonOptions,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Ranked poses mol2 file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Directory of per-rank images (<rank>.png) to embed by reference
    #[arg(long, value_name = "DIR")]
    pub images: Option<PathBuf>,

    /// HTML output path (input with an .html extension if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report title
    #[arg(long, value_name = "TEXT", default_value = "DOCK pose report")]
    pub title: String,

    #[command(flatten)]
    pub common: CommonOptions,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum MissingPolicy {
    /// Abort the run naming the label and the molecule
    #[default]
    Fail,
    /// Keep the row with an empty cell
    Blank,
    /// Omit the molecule's row entirely
    Drop,
}

impl From<MissingPolicy> for OnMissing {
    fn from(policy: MissingPolicy) -> Self {
        match policy {
            MissingPolicy::Fail => OnMissing::Fail,
            MissingPolicy::Blank => OnMissing::Blank,
            MissingPolicy::Drop => OnMissing::Drop,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
