//! Oregon Trail save tool CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use trail_cli::commands::{ShowFormat, run_edit, run_layout, run_new, run_show, run_tables};
use trail_cli::logging::{LogConfig, LogFormat, init_logging};
use trail_cli::prompt::Prompter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ShowFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli.command) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: &Command) -> Result<()> {
    match command {
        Command::Show(args) => {
            let format = match args.format {
                ShowFormatArg::Table => ShowFormat::Table,
                ShowFormatArg::Text => ShowFormat::Text,
                ShowFormatArg::Json => ShowFormat::Json,
            };
            let output = run_show(&args.file, format, args.reserved)?;
            println!("{}", output.trim_end());
        }
        Command::New(args) => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            let prompter = args.interactive.then_some(&mut prompter);
            let record = run_new(&args.set, prompter, args.truncate, &args.output)?;
            if args.interactive {
                println!("{}", trail_cli::render::render_text(&record, false).trim_end());
            }
            println!("Wrote save file to {}", args.output.display());
        }
        Command::Edit(args) => {
            run_edit(&args.file, &args.set, args.truncate, args.output.as_deref())?;
            let written = args.output.as_ref().unwrap_or(&args.file);
            println!("Wrote save file to {}", written.display());
        }
        Command::Layout => println!("{}", run_layout()),
        Command::Tables => println!("{}", run_tables()),
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
