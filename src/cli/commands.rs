//! Command implementations for the Milozvuk CLI.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{MilozvukError, Result};
use crate::euphony::corrector::EuphonyCorrector;

/// Execute a CLI command.
pub fn execute_command(args: MilozvukArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_text(correct_args.clone(), &args),
        Command::Examples(example_args) => run_examples(example_args.clone(), &args),
    }
}

/// Correct a single text from the argument, a file, or stdin.
fn correct_text(args: CorrectArgs, cli_args: &MilozvukArgs) -> Result<()> {
    let text = read_input(&args)?;
    if text.trim().is_empty() {
        return Err(MilozvukError::invalid_operation(
            "No text to correct. Pass TEXT, use --input, or pipe stdin.",
        ));
    }

    let corrector = EuphonyCorrector::new()?;
    let correction = corrector.analyze(&text)?;

    output_correction(&correction, args.highlight, args.styled, cli_args)
}

/// List the bundled example texts, or correct a selected one.
fn run_examples(args: ExamplesArgs, cli_args: &MilozvukArgs) -> Result<()> {
    let examples = load_examples(&args.file)?;

    match args.number {
        None => output_example_list(&examples, cli_args),
        Some(number) => {
            let example = examples.get(number.wrapping_sub(1)).ok_or_else(|| {
                MilozvukError::invalid_operation(format!(
                    "No example {number}; the file holds {} example(s)",
                    examples.len()
                ))
            })?;

            if cli_args.verbosity() > 0 && cli_args.output_format == OutputFormat::Human {
                println!("{}", example.title);
                println!();
            }

            let corrector = EuphonyCorrector::new()?;
            let correction = corrector.analyze(&example.body)?;
            output_correction(&correction, true, false, cli_args)
        }
    }
}

fn read_input(args: &CorrectArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.input {
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Load a fixture file of example texts.
///
/// The format is the original trainer format: blocks separated by a blank
/// line, each block a title line followed by the text body.
pub fn load_examples(path: &Path) -> Result<Vec<ExampleText>> {
    if !path.exists() {
        return Err(MilozvukError::invalid_operation(format!(
            "Example file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let mut examples = Vec::new();

    for block in content.split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        match block.split_once('\n') {
            Some((title, body)) => examples.push(ExampleText {
                title: title.trim().to_string(),
                body: body.trim().to_string(),
            }),
            None => examples.push(ExampleText {
                title: String::new(),
                body: block.to_string(),
            }),
        }
    }

    Ok(examples)
}
