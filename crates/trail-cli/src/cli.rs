//! CLI argument definitions for the save tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use trail_cli::assign::{Assignment, parse_assignment};

#[derive(Parser)]
#[command(
    name = "trail-save",
    version,
    about = "Inspect, create and edit The Oregon Trail for Windows save files",
    long_about = "Inspect, create and edit The Oregon Trail for Windows save files.\n\n\
                  Reserved regions and unknown codes are preserved byte-for-byte\n\
                  when a save is edited."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the fields of a save file.
    Show(ShowArgs),

    /// Create a new save file.
    New(NewArgs),

    /// Change fields of an existing save file.
    Edit(EditArgs),

    /// Print the save record layout.
    Layout,

    /// Print the lookup tables for coded fields.
    Tables,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Save file to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ShowFormatArg,

    /// Include reserved and unknown regions.
    #[arg(long = "reserved")]
    pub reserved: bool,
}

#[derive(Parser)]
pub struct NewArgs {
    /// Field assignment, e.g. `--set Leader=Ezra --set OccupationValue=Farmer`.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<Assignment>,

    /// Prompt for every field not given with --set.
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Cut over-long text to its field width instead of failing.
    #[arg(long = "truncate")]
    pub truncate: bool,

    /// Output file.
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = trail_gam::DEFAULT_SAVE_FILE)]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct EditArgs {
    /// Save file to edit.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field assignment, e.g. `--set Oxen=6`.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment, required = true)]
    pub set: Vec<Assignment>,

    /// Cut over-long text to its field width instead of failing.
    #[arg(long = "truncate")]
    pub truncate: bool,

    /// Write the result here instead of overwriting FILE.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShowFormatArg {
    Table,
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
