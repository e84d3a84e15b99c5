//! Command line argument parsing for the Milozvuk CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Milozvuk - Rule-based Ukrainian у/в euphony corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "milozvuk")]
#[command(about = "Corrects the Ukrainian у/в alternation according to euphony rules")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MilozvukArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MilozvukArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct a text
    Correct(CorrectArgs),

    /// Work with the bundled example texts
    Examples(ExamplesArgs),
}

/// Arguments for correcting a text
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Text to correct; reads stdin when neither TEXT nor --input is given
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Emit the highlighted markup instead of the corrected plain text
    #[arg(long)]
    pub highlight: bool,

    /// Wrap the highlighted markup in a styled, self-contained HTML fragment
    #[arg(long)]
    pub styled: bool,
}

/// Arguments for the examples command
#[derive(Parser, Debug, Clone)]
pub struct ExamplesArgs {
    /// Fixture file with example texts (blank-line-delimited, titled blocks)
    #[arg(long, value_name = "FILE", default_value = "example_texts.txt")]
    pub file: PathBuf,

    /// Correct the example with the given number (1-based) instead of listing
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity() {
        let args = MilozvukArgs::parse_from(["milozvuk", "correct", "текст"]);
        assert_eq!(args.verbosity(), 1);

        let args = MilozvukArgs::parse_from(["milozvuk", "-vv", "correct", "текст"]);
        assert_eq!(args.verbosity(), 2);

        let args = MilozvukArgs::parse_from(["milozvuk", "--quiet", "correct", "текст"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_correct_args() {
        let args = MilozvukArgs::parse_from(["milozvuk", "correct", "--highlight", "в дім"]);
        match args.command {
            Command::Correct(correct) => {
                assert_eq!(correct.text.as_deref(), Some("в дім"));
                assert!(correct.highlight);
                assert!(!correct.styled);
            }
            _ => panic!("expected correct command"),
        }
    }

    #[test]
    fn test_examples_args() {
        let args = MilozvukArgs::parse_from(["milozvuk", "examples", "-n", "2"]);
        match args.command {
            Command::Examples(examples) => {
                assert_eq!(examples.number, Some(2));
                assert_eq!(examples.file.to_str(), Some("example_texts.txt"));
            }
            _ => panic!("expected examples command"),
        }
    }
}
