//! CLI argument definitions for the PO formatter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use po_model::Vendor;

#[derive(Parser)]
#[command(
    name = "po-formatter",
    version,
    about = "Convert purchase-order sheets into vendor import files",
    long_about = "Convert purchase-order spreadsheets (CSV, INV, XLSX, XLS) into the \
                  import formats of vendor ordering portals.\n\n\
                  Supports HorizonHobby/FastServe, Stephens, HRP, AMAIN and Traxxas."
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

    /// Allow SKUs and quantities to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert an order sheet into a vendor import file.
    Convert(ConvertArgs),

    /// Show how an order sheet would be read.
    Inspect(InspectArgs),

    /// List supported vendors and their output formats.
    Vendors,

    /// Show or clear the remembered folders.
    Settings(SettingsArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Order sheet to convert (.csv, .inv, .xlsx, .xlsm, .xls).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Target vendor (default: suggested from the sheet's columns).
    #[arg(long = "vendor", value_parser = parse_vendor)]
    pub vendor: Option<Vendor>,

    /// Output format for vendors that offer several (csv, tab, host,
    /// standard, inv, template).
    #[arg(long = "format", value_name = "FORMAT")]
    pub format: Option<String>,

    /// PO number (default: derived from the input file name).
    #[arg(long = "po", value_name = "PO")]
    pub po: Option<String>,

    /// Exact output file path.
    #[arg(long = "output", short = 'o', value_name = "PATH", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Folder for the output file (default: last used, else the input's folder).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Build the document and report without writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write the document to standard output instead of a file.
    #[arg(long = "stdout", conflicts_with_all = ["output", "output_dir"])]
    pub stdout: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Order sheet to inspect.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of rows to preview.
    #[arg(long = "rows", default_value_t = 10)]
    pub rows: usize,

    /// Print the inspection as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SettingsArgs {
    /// Forget the remembered folders.
    #[arg(long = "clear")]
    pub clear: bool,
}

fn parse_vendor(value: &str) -> Result<Vendor, String> {
    value.parse().map_err(|e: po_model::FormatError| e.to_string())
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
