use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::models::OutputFormat;

#[derive(Parser)]
#[command(
    name = "fileconv",
    version,
    about = "Convert text, PDF, HTML and image files into JSON or CSV",
    after_help = "Supported inputs: .txt, .pdf, .html, .htm, .png, .jpg, .jpeg. \
                  Image inputs need an OCR engine (tesseract by default); \
                  run 'fileconv supported' to check that it is available."
)]
pub struct Cli {
    /// Config file (default: ./fileconv.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract the text of a file and write it as JSON or CSV.
    ///
    /// The output is written to <stem>.<format> next to the input file,
    /// or inside the output directory when one is given.
    Convert {
        /// Path to the input file
        input_file: PathBuf,
        /// Output format
        #[arg(value_enum)]
        output_format: OutputFormat,
        /// Directory for the output file (created if missing)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// List supported input types and output formats, and check the OCR engine
    Supported,

    /// Print the effective configuration as TOML
    Config,
}
