//! # text-cleaners
//!
//! Multi-language text normalization for a speech-synthesis front end.
//!
//! Raw text goes in together with a [`CleanerKind`]; the matching pipeline
//! lowercases, expands numerals, abbreviations and clock times, substitutes
//! symbols, filters foreign scripts and collapses whitespace, returning a
//! string ready for a grapheme or phoneme tokenizer.
//!
//! Anomalies inside the text never fail: out-of-range numerals become an
//! inline message, unknown characters are dropped, malformed times are left
//! alone.
//!
//! # Example
//!
//! ```
//! use cleaner_core::{CleanerKind, TextCleaner};
//! use text_cleaners::Normalizer;
//!
//! let normalizer = Normalizer::new();
//! let result = normalizer.clean("Ես ունեմ 25 գիրք!", CleanerKind::Armenian).unwrap();
//! assert_eq!(result.text, "ես ունեմ քսան հինգ գիրք!");
//! ```

pub mod abbreviations;
pub mod mandarin;
pub mod num2words;
pub mod numbers;
pub mod ops;
pub mod pipeline;
pub mod script;
pub mod stages;
pub mod time;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::instrument;

use cleaner_core::{CleanerKind, NormError, NormResult, NormText, TextCleaner};

pub use pipeline::Pipeline;
pub use stages::Stage;

/// Text cleaner holding one pipeline per cleaner kind.
#[derive(Debug)]
pub struct Normalizer {
    pipelines: HashMap<CleanerKind, Pipeline>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer with the standard pipeline for every cleaner.
    pub fn new() -> Self {
        let pipelines = CleanerKind::ALL
            .into_iter()
            .map(|kind| (kind, Pipeline::for_kind(kind)))
            .collect();
        Self { pipelines }
    }

    /// Replace the pipeline used for `pipeline.kind()`.
    pub fn insert_pipeline(&mut self, pipeline: Pipeline) {
        self.pipelines.insert(pipeline.kind(), pipeline);
    }

    /// The pipeline used for a cleaner.
    pub fn pipeline(&self, cleaner: CleanerKind) -> Option<&Pipeline> {
        self.pipelines.get(&cleaner)
    }
}

impl TextCleaner for Normalizer {
    #[instrument(skip(self), fields(input_len = input.len()))]
    fn clean(&self, input: &str, cleaner: CleanerKind) -> NormResult<NormText> {
        let pipeline = self
            .pipeline(cleaner)
            .ok_or_else(|| NormError::unknown_cleaner(cleaner.key()))?;
        Ok(NormText::new(pipeline.run(input)?, cleaner))
    }
}

static DEFAULT_NORMALIZER: Lazy<Normalizer> = Lazy::new(Normalizer::new);

/// Clean `text` with the standard pipeline for `cleaner`.
pub fn normalize(text: &str, cleaner: CleanerKind) -> NormResult<String> {
    DEFAULT_NORMALIZER
        .clean(text, cleaner)
        .map(|result| result.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizer_creation() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.pipelines.len(), CleanerKind::ALL.len());
    }

    #[test]
    fn test_missing_pipeline_is_unknown_cleaner() {
        let normalizer = Normalizer {
            pipelines: HashMap::new(),
        };
        let err = normalizer.clean("text", CleanerKind::English).unwrap_err();
        assert!(matches!(err, NormError::UnknownCleaner(ref k) if k == "english"));
        assert!(normalizer.pipeline(CleanerKind::English).is_none());
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        for kind in CleanerKind::ALL {
            assert_eq!(normalize("", kind).unwrap(), "");
        }
    }

    #[test]
    fn test_result_carries_cleaner() {
        let normalizer = Normalizer::new();
        let result = normalizer.clean("Hello", CleanerKind::Basic).unwrap();
        assert_eq!(result.cleaner, CleanerKind::Basic);
        assert_eq!(result.text, "hello");
    }

    #[test]
    fn test_insert_pipeline() {
        let mut normalizer = Normalizer::new();
        normalizer.insert_pipeline(Pipeline::with_stages(CleanerKind::Basic, Vec::new()));
        let result = normalizer.clean(" As Is ", CleanerKind::Basic).unwrap();
        assert_eq!(result.text, " As Is ");
    }

    #[test]
    fn test_shared_across_threads() {
        let normalizer = Normalizer::new();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let result = normalizer.clean("A  B", CleanerKind::Basic).unwrap();
                    assert_eq!(result.text, "a b");
                });
            }
        });
    }
}
