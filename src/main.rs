use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use focusdesk::cli::args::{Cli, Commands};
use focusdesk::cli::commands;
use focusdesk::config::{Config, Paths};
use focusdesk::logging::{self, LogTarget};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::new()?;

    let target = match cli.command {
        None | Some(Commands::Tui) => LogTarget::File,
        Some(_) => LogTarget::Stderr,
    };
    logging::init(target, cli.verbose, &paths);

    let config = Config::load_from_path(&paths.config_file)
        .context("could not load configuration")?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        None | Some(Commands::Tui) => {
            focusdesk::tui::run(&config)?;
            String::new()
        }
        Some(Commands::Timer(args)) => commands::timer(args.command, &config, format)?,
        Some(Commands::Task(args)) => commands::task(args.command, &config, format)?,
        Some(Commands::Age { birth, on }) => commands::age(&birth, on.as_deref(), format)?,
        Some(Commands::Bmi { weight, height }) => commands::bmi(weight, height, format)?,
        Some(Commands::Config(args)) => commands::config(args.command, &paths, &config, format)?,
        Some(Commands::Completions { shell, install }) => commands::completions(shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
