//! nrc - Name reference configuration CLI tool
//!
//! A command line tool for inspecting, validating, and merging name
//! reference configuration files. It plays the role of the external
//! configuration loader around the library: it reads documents, folds them
//! into a base configuration, and prints the merged result.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use name_reference_config::{default_name_references, ReferencePathConfigs};

#[derive(Debug, Parser)]
#[command(name = "nrc", version, about = "Name reference configuration tool")]
struct Cli {
    /// Output location. Use '-' for stdout.
    #[arg(short, long, default_value = "-")]
    output: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the built-in default name reference configuration.
    Defaults,
    /// Validate a name reference configuration file.
    Validate {
        /// Configuration file to check.
        file: PathBuf,
    },
    /// Merge name reference configuration files.
    Merge {
        /// Base configuration file. An empty base is used when omitted.
        #[arg(long)]
        base: Option<PathBuf>,

        /// Configuration file folded into the base.
        #[arg(long)]
        additional: PathBuf,

        /// Use the built-in defaults as the base.
        #[arg(long, conflicts_with = "base")]
        with_defaults: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::File::create(&cli.output)
                .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?,
        )
    };

    match cli.command {
        Command::Defaults => {
            write!(output, "{}", default_name_references().to_yaml()?)?;
        }
        Command::Validate { file } => {
            let configs = load_configs(&file)?;
            writeln!(
                output,
                "Valid name reference configuration ({} entries)",
                configs.len()
            )?;
            for config in configs.iter() {
                writeln!(
                    output,
                    "  - {} ({} paths)",
                    config.gvk(),
                    config.path_configs().len()
                )?;
            }
        }
        Command::Merge {
            base,
            additional,
            with_defaults,
        } => {
            let base = match base {
                Some(path) => load_configs(&path)?,
                None if with_defaults => default_name_references().clone(),
                None => ReferencePathConfigs::new(),
            };

            let merged = base.merge_all(load_configs(&additional)?);
            write!(output, "{}", merged.to_yaml()?)?;
        }
    }

    Ok(())
}

fn load_configs(path: &Path) -> Result<ReferencePathConfigs, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file {:?}: {}", path, e))?;
    ReferencePathConfigs::from_yaml(&content)
        .map_err(|e| format!("Failed to parse {:?}: {}", path, e).into())
}
