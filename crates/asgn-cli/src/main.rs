//! Task assignment optimizer CLI.

use clap::{ColorChoice, Parser};
use std::io::IsTerminal;

use asgn_cli::logging::{LogConfig, LogFormat, init_logging};
use asgn_cli::pipeline::{InputSource, load_input, run_solve};
use asgn_cli::summary::print_summary;
use asgn_model::SolveOptions;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, SolveArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let exit_code = match cli.command {
        Command::Solve(args) => match solve(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn solve(args: &SolveArgs) -> anyhow::Result<()> {
    let source = match (&args.json, &args.data_dir) {
        (Some(path), _) => InputSource::JsonFile(path.clone()),
        (None, Some(dir)) => InputSource::CsvDir(dir.clone()),
        (None, None) => anyhow::bail!("either DATA_DIR or --json must be given"),
    };
    let raw = load_input(&source)?;

    let mut options = SolveOptions::default().with_lp_path(args.lp_file.clone());
    if args.no_lp {
        options = options.without_lp_export();
    }
    if let Some(tolerance) = args.tolerance {
        options = options.with_assignment_tolerance(tolerance);
    }

    let solution = run_solve(&raw, &options, args.node_limit)?;
    print_summary(&solution);
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stderr().is_terminal(),
    };
    config
}
