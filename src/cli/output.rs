//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{MilozvukArgs, OutputFormat};
use crate::error::Result;
use crate::euphony::corrector::Correction;
use crate::euphony::highlight::{HighlightStyle, styled_page};

/// A titled example text block from a fixture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleText {
    /// The title line of the block.
    pub title: String,
    /// The text body.
    pub body: String,
}

/// Summary row for listing example texts.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExampleSummary {
    pub number: usize,
    pub title: String,
}

/// Output a correction in the configured format.
pub fn output_correction(
    correction: &Correction,
    highlight: bool,
    styled: bool,
    args: &MilozvukArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(correction, args),
        OutputFormat::Human => {
            if styled {
                let style = HighlightStyle::default();
                println!("{}", styled_page(&correction.highlighted, &style));
            } else if highlight {
                println!("{}", correction.highlighted);
            } else {
                println!("{}", correction.corrected);
            }

            if args.verbosity() > 1 {
                println!();
                println!("{} mistake(s) found", correction.mistake_count());
                for mistake in &correction.mistakes {
                    println!(
                        "  token {}: {} -> {}",
                        mistake.position, mistake.found, mistake.expected
                    );
                }
            }
            Ok(())
        }
    }
}

/// Output the example list in the configured format.
pub fn output_example_list(examples: &[ExampleText], args: &MilozvukArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            let summaries: Vec<ExampleSummary> = examples
                .iter()
                .enumerate()
                .map(|(i, example)| ExampleSummary {
                    number: i + 1,
                    title: example.title.clone(),
                })
                .collect();
            output_json(&summaries, args)
        }
        OutputFormat::Human => {
            for (i, example) in examples.iter().enumerate() {
                println!("{}. {}", i + 1, example.title);
            }
            Ok(())
        }
    }
}

/// Output any serializable value as JSON, honoring `--pretty`.
pub fn output_json<T: Serialize>(value: &T, args: &MilozvukArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
