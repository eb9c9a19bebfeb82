//! Make test suites external compatible.
//!
//! Reads a suite YAML, disables the features that need control over the tested
//! process, and writes the result to stdout or a file.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use externalizer::check::{CheckOutcome, check_suite};
use externalizer::convert::{ConvertOutcome, OutputTarget, convert_suite};
use externalizer::core::warnings::TracingWarnings;
use externalizer::exit_codes;
use externalizer::io::config::{DEFAULT_CONFIG_FILE, ExternalizerConfig, load_config};
use externalizer::logging;

#[derive(Parser)]
#[command(
    name = "externalizer",
    version,
    about = "Make test suites runnable against an external system under test"
)]
struct Cli {
    /// Tool config (TOML). Defaults to `externalizer.toml` if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a suite to an external suite.
    Convert {
        /// Suite YAML to convert.
        suite: PathBuf,
        /// Write the converted suite here instead of stdout.
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,
        /// Overwrite the input suite.
        #[arg(long)]
        in_place: bool,
    },
    /// Report why a suite is not external compatible.
    Check {
        /// Suite YAML to check.
        suite: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => exit_code(code),
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code(exit_codes::INVALID)
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = load_cli_config(cli.config.as_deref())?;
    logging::init(&config.log_filter);

    match cli.command {
        Command::Convert {
            suite,
            output,
            in_place,
        } => cmd_convert(&suite, output, in_place, &config),
        Command::Check { suite } => cmd_check(&suite),
    }
}

fn load_cli_config(path: Option<&Path>) -> Result<ExternalizerConfig> {
    let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    load_config(path).context("load externalizer config")
}

fn cmd_convert(
    suite: &Path,
    output: Option<PathBuf>,
    in_place: bool,
    config: &ExternalizerConfig,
) -> Result<i32> {
    let target = match output {
        Some(path) => OutputTarget::File(path),
        None if in_place => OutputTarget::File(suite.to_path_buf()),
        None => OutputTarget::Stdout,
    };
    match convert_suite(suite, &target, config, &mut TracingWarnings)? {
        ConvertOutcome::Converted {
            rendered,
            written_to: None,
        } => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("write converted suite to stdout")?;
            Ok(exit_codes::OK)
        }
        ConvertOutcome::Converted { .. } => Ok(exit_codes::OK),
        ConvertOutcome::NotExternal(errors) => {
            eprintln!("{}: converted suite is not external compatible", suite.display());
            for error in errors {
                eprintln!("- {error}");
            }
            Ok(exit_codes::NOT_EXTERNAL)
        }
    }
}

fn cmd_check(suite: &Path) -> Result<i32> {
    match check_suite(suite)? {
        CheckOutcome::External => {
            println!("{}: external compatible", suite.display());
            Ok(exit_codes::OK)
        }
        CheckOutcome::Violations(errors) => {
            println!("{}: not external compatible", suite.display());
            for error in errors {
                println!("- {error}");
            }
            Ok(exit_codes::NOT_EXTERNAL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_convert_defaults_to_stdout() {
        let cli = Cli::parse_from(["externalizer", "convert", "suite.yml"]);
        assert!(matches!(
            cli.command,
            Command::Convert {
                output: None,
                in_place: false,
                ..
            }
        ));
    }

    #[test]
    fn parse_convert_in_place_with_global_config() {
        let cli = Cli::parse_from([
            "externalizer",
            "convert",
            "--in-place",
            "suite.yml",
            "--config",
            "tool.toml",
        ]);
        assert!(matches!(cli.command, Command::Convert { in_place: true, .. }));
        assert_eq!(cli.config, Some(PathBuf::from("tool.toml")));
    }

    #[test]
    fn output_conflicts_with_in_place() {
        let result = Cli::try_parse_from([
            "externalizer",
            "convert",
            "suite.yml",
            "--in-place",
            "--output",
            "out.yml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_check() {
        let cli = Cli::parse_from(["externalizer", "check", "suite.yml"]);
        assert!(matches!(cli.command, Command::Check { .. }));
    }
}
