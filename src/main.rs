use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fileconv::cli::commands::{Cli, Command};
use fileconv::cli::output;
use fileconv::config::Config;
use fileconv::operations;
use fileconv::{Converter, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; stdout carries command output.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::fmt::Display>> {
    let config = get_config(cli.config.as_deref())?;

    match cli.command {
        Command::Convert {
            input_file,
            output_format,
            output_dir,
        } => cmd_convert(&config, &input_file, output_format, output_dir.as_deref()),
        Command::Supported => cmd_supported(&config),
        Command::Config => cmd_config(&config),
    }
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

fn get_config(explicit: Option<&Path>) -> Result<Config, Box<dyn std::fmt::Display>> {
    let cwd = std::env::current_dir().map_err(map_err)?;
    Config::load(explicit, &cwd).map_err(map_err)
}

fn absolute(path: &Path) -> Result<PathBuf, Box<dyn std::fmt::Display>> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir().map_err(map_err)?.join(path))
    }
}

fn cmd_convert(
    config: &Config,
    input: &Path,
    format: OutputFormat,
    output_dir: Option<&Path>,
) -> CmdResult {
    let input = absolute(input)?;
    println!("Processing {} to {format}...", input.display());

    // Conversion failures are reported, not propagated: the exit code stays 0
    let converter = Converter::new(&config.settings);
    let result = converter.convert_file(&input, format.extension(), output_dir);
    println!("{}", output::format_outcome(&input, &result));
    Ok(())
}

fn cmd_supported(config: &Config) -> CmdResult {
    let result = operations::list_supported(&config.settings);
    println!("{}", output::format_json(&result));
    Ok(())
}

fn cmd_config(config: &Config) -> CmdResult {
    if let Some(path) = &config.config_path {
        println!("# loaded from {}", path.display());
    }
    print!("{}", config.to_toml().map_err(map_err)?);
    Ok(())
}
