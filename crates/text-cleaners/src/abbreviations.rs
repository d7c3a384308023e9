//! Abbreviation rule tables.
//!
//! A table is an ordered list of `(pattern, replacement)` rules. Rules run in
//! order and each sees the output of the previous one, so a broad rule placed
//! early (French `av.`) shadows a narrower one placed later (`av. J.-C.`).

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use cleaner_core::{Lang, NormError, NormResult};

/// A compiled, ordered abbreviation table.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<(Regex, &'static str)>,
}

impl RuleTable {
    /// Compile `\b<abbrev>\.` rules, case-insensitive.
    fn dotted(entries: &[(&str, &'static str)]) -> Self {
        Self::compile(entries, |abbrev| {
            format!(r"(?i)\b{}\.", regex::escape(abbrev))
        })
    }

    /// Compile `\b<abbrev>` rules, case-sensitive, no trailing period.
    fn bare(entries: &[(&str, &'static str)]) -> Self {
        Self::compile(entries, |abbrev| format!(r"\b{}", regex::escape(abbrev)))
    }

    fn compile(entries: &[(&str, &'static str)], pattern: impl Fn(&str) -> String) -> Self {
        let rules = entries
            .iter()
            .map(|&(abbrev, replacement)| {
                let re = Regex::new(&pattern(abbrev)).unwrap();
                (re, replacement)
            })
            .collect();
        Self { rules }
    }

    fn chain(mut self, other: RuleTable) -> Self {
        self.rules.extend(other.rules);
        self
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order.
    pub fn apply(&self, text: &str) -> String {
        let mut text = text.to_string();
        for (re, replacement) in &self.rules {
            if re.is_match(&text) {
                trace!(pattern = re.as_str(), replacement, "abbreviation rule matched");
                text = re
                    .replace_all(&text, regex::NoExpand(replacement))
                    .into_owned();
            }
        }
        text
    }
}

const EN_ABBREVIATIONS: &[(&str, &str)] = &[
    ("mrs", "misess"),
    ("mr", "mister"),
    ("dr", "doctor"),
    ("st", "saint"),
    ("co", "company"),
    ("jr", "junior"),
    ("maj", "major"),
    ("gen", "general"),
    ("drs", "doctors"),
    ("rev", "reverend"),
    ("lt", "lieutenant"),
    ("hon", "honorable"),
    ("sgt", "sergeant"),
    ("capt", "captain"),
    ("esq", "esquire"),
    ("ltd", "limited"),
    ("col", "colonel"),
    ("ft", "fort"),
];

const FR_ABBREVIATIONS: &[(&str, &str)] = &[
    ("M", "monsieur"),
    ("Mlle", "mademoiselle"),
    ("Mlles", "mesdemoiselles"),
    ("Mme", "Madame"),
    ("Mmes", "Mesdames"),
    ("N.B", "nota bene"),
    ("p.c.q", "parce que"),
    ("Pr", "professeur"),
    ("qqch", "quelque chose"),
    ("rdv", "rendez-vous"),
    ("max", "maximum"),
    ("min", "minimum"),
    ("no", "numéro"),
    ("adr", "adresse"),
    ("dr", "docteur"),
    ("st", "saint"),
    ("co", "companie"),
    ("jr", "junior"),
    ("sgt", "sergent"),
    ("capt", "capitain"),
    ("col", "colonel"),
    ("av", "avenue"),
    ("av. J.-C", "avant Jésus-Christ"),
    ("apr. J.-C", "après Jésus-Christ"),
    ("art", "article"),
    ("boul", "boulevard"),
    ("c.-à-d", "c’est-à-dire"),
    ("etc", "et cetera"),
    ("ex", "exemple"),
    ("excl", "exclusivement"),
];

const FR_BARE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Mlle", "mademoiselle"),
    ("Mlles", "mesdemoiselles"),
    ("Mme", "Madame"),
    ("Mmes", "Mesdames"),
];

static EN_TABLE: Lazy<RuleTable> = Lazy::new(|| RuleTable::dotted(EN_ABBREVIATIONS));

static FR_TABLE: Lazy<RuleTable> = Lazy::new(|| {
    RuleTable::dotted(FR_ABBREVIATIONS).chain(RuleTable::bare(FR_BARE_ABBREVIATIONS))
});

/// Look up the abbreviation table for a language.
pub fn table_for(lang: Lang) -> NormResult<&'static RuleTable> {
    match lang {
        Lang::En => Ok(&*EN_TABLE),
        Lang::Fr => Ok(&*FR_TABLE),
        Lang::Pt | Lang::De | Lang::Tr | Lang::Ca | Lang::Hy | Lang::Zh => {
            Err(NormError::unsupported_language("expand_abbreviations", lang))
        }
    }
}

/// Expand abbreviations using the table for `lang`.
///
/// Only English and French have tables; other languages are a caller error.
pub fn expand_abbreviations(text: &str, lang: Lang) -> NormResult<String> {
    Ok(table_for(lang)?.apply(text))
}
