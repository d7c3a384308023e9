//! Pipeline stages.
//!
//! A stage wraps one text operation behind the [`Stage`] trait so pipelines
//! can be assembled, inspected and extended at runtime. Language-dependent
//! stages carry their language as a field.

use cleaner_core::{Lang, NormError, NormResult};

use crate::abbreviations::expand_abbreviations;
use crate::numbers::{normalize_numbers_en, normalize_numbers_hy, normalize_numbers_zh};
use crate::ops;
use crate::script::{self, ScriptAllowlist};
use crate::time::expand_time_english;

/// One step of a cleaner pipeline.
pub trait Stage: Send + Sync + std::fmt::Debug {
    /// Get the stage name.
    fn name(&self) -> &str;

    /// Apply the stage to the output of the previous one.
    fn apply(&self, input: &str) -> NormResult<String>;
}

/// Unicode lowercase.
#[derive(Debug)]
pub struct Lowercase;

impl Stage for Lowercase {
    fn name(&self) -> &str {
        "lowercase"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        Ok(ops::lowercase(input))
    }
}

/// Collapse whitespace runs and trim.
#[derive(Debug)]
pub struct CollapseWhitespace;

impl Stage for CollapseWhitespace {
    fn name(&self) -> &str {
        "collapse_whitespace"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        Ok(ops::collapse_whitespace(input))
    }
}

/// Lossy transliteration to ASCII.
#[derive(Debug)]
pub struct ConvertToAscii;

impl Stage for ConvertToAscii {
    fn name(&self) -> &str {
        "convert_to_ascii"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        Ok(ops::convert_to_ascii(input))
    }
}

/// Delete brackets and double quotes.
#[derive(Debug)]
pub struct RemoveAuxSymbols;

impl Stage for RemoveAuxSymbols {
    fn name(&self) -> &str {
        "remove_aux_symbols"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        Ok(ops::remove_aux_symbols(input))
    }
}

/// Punctuation and `&` substitution.
#[derive(Debug)]
pub struct ReplaceSymbols {
    pub lang: Option<Lang>,
}

impl Stage for ReplaceSymbols {
    fn name(&self) -> &str {
        "replace_symbols"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        Ok(ops::replace_symbols(input, self.lang))
    }
}

/// Abbreviation expansion with the table of one language.
#[derive(Debug)]
pub struct ExpandAbbreviations {
    pub lang: Lang,
}

impl Stage for ExpandAbbreviations {
    fn name(&self) -> &str {
        "expand_abbreviations"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        expand_abbreviations(input, self.lang)
    }
}

/// English clock times.
#[derive(Debug)]
pub struct ExpandTime;

impl Stage for ExpandTime {
    fn name(&self) -> &str {
        "expand_time"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        Ok(expand_time_english(input))
    }
}

/// Numerals to words.
#[derive(Debug)]
pub struct NormalizeNumbers {
    pub lang: Lang,
}

impl Stage for NormalizeNumbers {
    fn name(&self) -> &str {
        "normalize_numbers"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        match self.lang {
            Lang::En => Ok(normalize_numbers_en(input)),
            Lang::Hy => Ok(normalize_numbers_hy(input)),
            Lang::Zh => Ok(normalize_numbers_zh(input)),
            lang @ (Lang::Fr | Lang::Pt | Lang::De | Lang::Tr | Lang::Ca) => {
                Err(NormError::unsupported_language("normalize_numbers", lang))
            }
        }
    }
}

/// Turkish `I` to dotless `ı`.
#[derive(Debug)]
pub struct TurkishCapitalI;

impl Stage for TurkishCapitalI {
    fn name(&self) -> &str {
        "turkish_capital_i"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        Ok(ops::replace_turkish_capital_i(input))
    }
}

/// Keep only the characters of one script.
#[derive(Debug)]
pub struct ScriptFilter {
    allowlist: &'static ScriptAllowlist,
}

impl ScriptFilter {
    /// Filter with a process-wide allowlist.
    pub fn new(allowlist: &'static ScriptAllowlist) -> Self {
        Self { allowlist }
    }

    /// Filter keeping Armenian.
    pub fn armenian() -> Self {
        Self::new(&script::ARMENIAN)
    }
}

impl Stage for ScriptFilter {
    fn name(&self) -> &str {
        "script_filter"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        Ok(script::remove_non_target_script(input, self.allowlist))
    }
}

/// Armenian punctuation to Latin.
#[derive(Debug)]
pub struct NormalizePunctuation;

impl Stage for NormalizePunctuation {
    fn name(&self) -> &str {
        "normalize_punctuation"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        Ok(script::normalize_punctuation(input))
    }
}

/// Delete newlines and nothing else.
#[derive(Debug)]
pub struct StripNewlines;

impl Stage for StripNewlines {
    fn name(&self) -> &str {
        "strip_newlines"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        Ok(ops::strip_newlines(input))
    }
}
