//! CLI argument definitions for the assignment optimizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "asgn",
    version,
    about = "Task assignment optimizer - assign tasks to resources at minimum cost",
    long_about = "Assign every task to exactly one capable resource without \
                  exceeding any resource's available time, minimizing total \
                  assignment cost.\n\n\
                  Input is three tables (tasks, resources, task-resource \
                  compatibility) loaded from a CSV directory or a JSON file."
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

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate, formulate, and solve one assignment problem.
    Solve(SolveArgs),
}

#[derive(Parser)]
pub struct SolveArgs {
    /// Directory containing tasks.csv, resources.csv, and
    /// tasks_for_resource.csv (ignored when --json is given).
    #[arg(value_name = "DATA_DIR", required_unless_present = "json")]
    pub data_dir: Option<PathBuf>,

    /// Load the data set from a single JSON file instead of a CSV directory.
    #[arg(long = "json", value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Where to export the assembled model in LP format.
    #[arg(long = "lp-file", value_name = "PATH", default_value = "demo.lp")]
    pub lp_file: PathBuf,

    /// Skip the LP export side artifact.
    #[arg(long = "no-lp")]
    pub no_lp: bool,

    /// Solved values above this threshold count as assigned.
    #[arg(long = "tolerance", value_name = "F")]
    pub tolerance: Option<f64>,

    /// Abort the built-in solver after this many search nodes.
    #[arg(long = "node-limit", value_name = "N")]
    pub node_limit: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
