//! Normalize command implementation.

use anyhow::{Context, Result};
use cleaner_core::{CleanerKind, TextCleaner};
use text_cleaners::Normalizer;

/// Read the input argument: literal text, or `@path` for a file.
pub fn read_input(input: &str) -> Result<String> {
    match input.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {path}")),
        None => Ok(input.to_string()),
    }
}

/// Run the normalize command.
pub fn run(input: &str, cleaner: CleanerKind, json: bool) -> Result<()> {
    let text = read_input(input)?;

    let normalizer = Normalizer::new();
    let result = normalizer.clean(&text, cleaner)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Input:      {text}");
    println!("Normalized: {}", result.text);
    println!("Cleaner:    {} ({})", result.cleaner, result.cleaner.config_name());

    Ok(())
}
