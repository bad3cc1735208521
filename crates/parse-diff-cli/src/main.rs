//! parse-diff: summarize and compare unified diffs.
//!
//! Reads diff text from files or standard input, hands it to the
//! `parse-diff` library and prints the result.

mod cli;
mod logger;
mod render;

use anyhow::{Context, Result};
use cli::{Cli, Command, CompareArgs, ShowArgs};
use parse_diff::{FileEntry, parse_with_line_ending};
use parse_diff_config::{AppConfig, OutputFormat, resolve_line_ending};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

const EXIT_DIFFERENT: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let (mut config, ignored) = match &cli.config {
        Some(path) => {
            let config = AppConfig::from_path(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            (config, None)
        }
        None => AppConfig::load(),
    };

    if let Some(line_ending) = &cli.line_ending {
        config.line_ending = resolve_line_ending(line_ending);
    }

    // Needs the configured level, so config load problems are logged after it.
    logger::init(&config.log_level);
    if let Some(err) = ignored {
        log::warn!("{}", err);
    }
    log::debug!("Using config: {:?}", config);

    match cli.command {
        Command::Show(args) => show(&args, &config),
        Command::Compare(args) => compare(&args, &config),
    }
}

fn show(args: &ShowArgs, config: &AppConfig) -> Result<ExitCode> {
    let files = parse_input(args.file.as_deref(), config)?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output
    };

    match format {
        OutputFormat::Text => print!("{}", render::summary(&files)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&files).context("Failed to serialize diff")?;
            println!("{}", json);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn compare(args: &CompareArgs, config: &AppConfig) -> Result<ExitCode> {
    let left = parse_input(Some(args.left.as_path()), config)?;
    let right = parse_input(Some(args.right.as_path()), config)?;

    match render::difference(&left, &right) {
        None => {
            println!("equivalent");
            Ok(ExitCode::SUCCESS)
        }
        Some(reason) => {
            println!("different: {}", reason);
            Ok(ExitCode::from(EXIT_DIFFERENT))
        }
    }
}

fn parse_input(path: Option<&Path>, config: &AppConfig) -> Result<Vec<FileEntry>> {
    let text = read_input(path)?;
    let files = parse_with_line_ending(&text, &config.line_ending);
    log::info!(
        "Parsed {} file(s) from {}",
        files.len(),
        path.map_or("<stdin>".to_string(), |p| p.display().to_string())
    );
    Ok(files)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read diff from standard input")?;
            Ok(text)
        }
    }
}
