use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::{info, warn};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use todolist::{Session, script};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use cli::render::render_list;
use config::{Config, LoadedConfig};

/// Log filter for this run: `--verbose` forces debug, otherwise the config level.
fn log_filter(config: &Config, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        config.log_level.clone().unwrap_or_else(|| "info".to_string())
    }
}

fn setup_logging(filter: &str) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todolist")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("todolist.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the config file and --verbose
    env_logger::Builder::new()
        .parse_filters(filter)
        .parse_env(env_logger::Env::default())
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized at '{}', writing to: {}", filter, log_file.display());
    Ok(())
}

fn report_config(loaded: &LoadedConfig) {
    for warning in &loaded.warnings {
        warn!("{}", warning);
        eprintln!("{} {}", "Warning:".yellow(), warning);
    }
    match &loaded.source {
        Some(path) => info!("Loaded config from: {}", path.display()),
        None => info!("No config file loaded, using defaults"),
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled (debug logging)".yellow());
    }

    match &cli.command {
        None | Some(Commands::Repl) => run_repl(config),
        Some(Commands::Run {
            script,
            json,
            keep_going,
        }) => run_script(script, *json, *keep_going, config),
    }
}

fn run_repl(config: &Config) -> Result<()> {
    info!("Starting repl on stdin");
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;

        match script::apply_line(&mut session, &line) {
            Ok(Some(_)) => {
                writeln!(stdout, "{}", render_list(session.list(), &config.display))?;
            }
            Ok(None) => continue,
            Err(e) => {
                warn!("Line '{}' rejected: {}", line, e);
                eprintln!("{} {}", "error:".red(), e);
            }
        }
        stdout.flush()?;
    }

    info!("Repl finished with {} items", session.list().len());
    Ok(())
}

fn run_script(path: &Path, json: bool, keep_going: bool, config: &Config) -> Result<()> {
    info!("Running script: {}", path.display());
    let content = fs::read_to_string(path).context(format!("Failed to read script {}", path.display()))?;

    let mut session = Session::new();
    let report = script::replay(&mut session, &content, keep_going);

    if report.stopped
        && let Some(failure) = report.failures.first()
    {
        return Err(eyre!("{}:{}: {}", path.display(), failure.line, failure.source));
    }

    for failure in &report.failures {
        eprintln!("{} {}:{}: {}", "error:".red(), path.display(), failure.line, failure.source);
    }

    if json {
        println!("{}", session.list().to_json()?);
    } else {
        println!("{}", render_list(session.list(), &config.display));
    }

    if !report.is_clean() {
        println!("{} {} line(s) rejected", "Warning:".yellow(), report.failures.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    if !loaded.config.display.color {
        colored::control::set_override(false);
    }

    setup_logging(&log_filter(&loaded.config, cli.is_verbose())).context("Failed to setup logging")?;
    report_config(&loaded);

    run_application(&cli, &loaded.config).context("Application failed")?;

    Ok(())
}
