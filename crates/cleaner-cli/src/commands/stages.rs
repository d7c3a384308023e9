//! Stages command implementation.

use cleaner_core::{CleanerKind, NormError, NormResult};
use text_cleaners::Normalizer;

/// Format one pipeline as `key (config_name): a -> b -> c`.
pub fn describe(normalizer: &Normalizer, kind: CleanerKind) -> NormResult<String> {
    let pipeline = normalizer
        .pipeline(kind)
        .ok_or_else(|| NormError::unknown_cleaner(kind.key()))?;
    Ok(format!(
        "{} ({}): {}",
        kind,
        kind.config_name(),
        pipeline.stage_names().join(" -> ")
    ))
}

/// Run the stages command.
pub fn run(cleaner: Option<CleanerKind>) -> NormResult<()> {
    let normalizer = Normalizer::new();
    match cleaner {
        Some(kind) => println!("{}", describe(&normalizer, kind)?),
        None => {
            for kind in CleanerKind::ALL {
                println!("{}", describe(&normalizer, kind)?);
            }
        }
    }
    Ok(())
}
