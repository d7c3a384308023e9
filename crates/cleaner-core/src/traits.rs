//! Trait definitions for text cleaning components.

use crate::error::NormResult;
use crate::types::{CleanerKind, NormText};

/// Text cleaning trait.
///
/// Implementations convert raw input text into the canonical surface form a
/// grapheme/phoneme tokenizer expects, using the pipeline named by `cleaner`.
pub trait TextCleaner: Send + Sync {
    /// Clean the input text.
    ///
    /// # Arguments
    /// * `input` - Raw input text
    /// * `cleaner` - Pipeline to apply
    ///
    /// # Returns
    /// Cleaned text tagged with the pipeline that produced it.
    fn clean(&self, input: &str, cleaner: CleanerKind) -> NormResult<NormText>;
}
