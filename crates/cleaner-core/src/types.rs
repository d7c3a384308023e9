//! Core data types shared by the cleaners and their callers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{NormError, NormResult};

/// Languages that carry language-specific tables somewhere in the pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English.
    En,
    /// French.
    Fr,
    /// Portuguese.
    Pt,
    /// German.
    De,
    /// Turkish.
    Tr,
    /// Catalan.
    Ca,
    /// Armenian.
    Hy,
    /// Mandarin Chinese.
    Zh,
}

impl Lang {
    /// ISO 639-1 tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
            Lang::Pt => "pt",
            Lang::De => "de",
            Lang::Tr => "tr",
            Lang::Ca => "ca",
            Lang::Hy => "hy",
            Lang::Zh => "zh",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = NormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Lang::En),
            "fr" | "french" => Ok(Lang::Fr),
            "pt" | "portuguese" => Ok(Lang::Pt),
            "de" | "german" => Ok(Lang::De),
            "tr" | "turkish" => Ok(Lang::Tr),
            "ca" | "catalan" => Ok(Lang::Ca),
            "hy" | "armenian" => Ok(Lang::Hy),
            "zh" | "zh-cn" | "mandarin" | "chinese" => Ok(Lang::Zh),
            _ => Err(NormError::unknown_language(s)),
        }
    }
}

/// Named cleaner pipelines, one per language or mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanerKind {
    /// Lowercase and collapse whitespace.
    #[serde(alias = "basic_cleaners")]
    Basic,
    /// Same as basic; the ASCII stage exists but is left out of the list.
    #[serde(alias = "transliteration_cleaners")]
    Transliteration,
    /// Basic German.
    #[serde(alias = "basic_german_cleaners", alias = "de")]
    German,
    /// Basic Turkish with dotless-i handling.
    #[serde(alias = "basic_turkish_cleaners", alias = "tr")]
    Turkish,
    /// English with time, number, and abbreviation expansion.
    #[serde(alias = "english_cleaners", alias = "en")]
    English,
    /// English expansion without lowercasing, for phoneme input.
    #[serde(alias = "phoneme_cleaners", alias = "phonemes")]
    Phoneme,
    /// French.
    #[serde(alias = "french_cleaners", alias = "fr")]
    French,
    /// Portuguese.
    #[serde(alias = "portuguese_cleaners", alias = "pt")]
    Portuguese,
    /// Language-neutral symbol cleanup.
    #[serde(alias = "multilingual_cleaners")]
    Multilingual,
    /// Mandarin numerals to ideographs.
    #[serde(alias = "chinese_mandarin_cleaners", alias = "chinese", alias = "zh")]
    Mandarin,
    /// Armenian.
    #[default]
    #[serde(alias = "armenian_cleaners", alias = "hy")]
    Armenian,
    /// Strip newlines only.
    #[serde(alias = "no_cleaners", alias = "noop", alias = "none")]
    NoOp,
}

impl CleanerKind {
    /// Every known pipeline, in display order.
    pub const ALL: [CleanerKind; 12] = [
        CleanerKind::Basic,
        CleanerKind::Transliteration,
        CleanerKind::German,
        CleanerKind::Turkish,
        CleanerKind::English,
        CleanerKind::Phoneme,
        CleanerKind::French,
        CleanerKind::Portuguese,
        CleanerKind::Multilingual,
        CleanerKind::Mandarin,
        CleanerKind::Armenian,
        CleanerKind::NoOp,
    ];

    /// Short key used on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            CleanerKind::Basic => "basic",
            CleanerKind::Transliteration => "transliteration",
            CleanerKind::German => "german",
            CleanerKind::Turkish => "turkish",
            CleanerKind::English => "english",
            CleanerKind::Phoneme => "phoneme",
            CleanerKind::French => "french",
            CleanerKind::Portuguese => "portuguese",
            CleanerKind::Multilingual => "multilingual",
            CleanerKind::Mandarin => "mandarin",
            CleanerKind::Armenian => "armenian",
            CleanerKind::NoOp => "no_op",
        }
    }

    /// Conventional cleaner name as written in synthesis model configs.
    pub fn config_name(&self) -> &'static str {
        match self {
            CleanerKind::Basic => "basic_cleaners",
            CleanerKind::Transliteration => "transliteration_cleaners",
            CleanerKind::German => "basic_german_cleaners",
            CleanerKind::Turkish => "basic_turkish_cleaners",
            CleanerKind::English => "english_cleaners",
            CleanerKind::Phoneme => "phoneme_cleaners",
            CleanerKind::French => "french_cleaners",
            CleanerKind::Portuguese => "portuguese_cleaners",
            CleanerKind::Multilingual => "multilingual_cleaners",
            CleanerKind::Mandarin => "chinese_mandarin_cleaners",
            CleanerKind::Armenian => "armenian_cleaners",
            CleanerKind::NoOp => "no_cleaners",
        }
    }

    /// Language the pipeline is built for, if any.
    pub fn lang(&self) -> Option<Lang> {
        match self {
            CleanerKind::German => Some(Lang::De),
            CleanerKind::Turkish => Some(Lang::Tr),
            CleanerKind::English | CleanerKind::Phoneme => Some(Lang::En),
            CleanerKind::French => Some(Lang::Fr),
            CleanerKind::Portuguese => Some(Lang::Pt),
            CleanerKind::Mandarin => Some(Lang::Zh),
            CleanerKind::Armenian => Some(Lang::Hy),
            CleanerKind::Basic
            | CleanerKind::Transliteration
            | CleanerKind::Multilingual
            | CleanerKind::NoOp => None,
        }
    }

    /// Standard pipeline for a language. Catalan only has abbreviation
    /// tables and no pipeline of its own.
    pub fn for_lang(lang: Lang) -> NormResult<CleanerKind> {
        match lang {
            Lang::En => Ok(CleanerKind::English),
            Lang::Fr => Ok(CleanerKind::French),
            Lang::Pt => Ok(CleanerKind::Portuguese),
            Lang::De => Ok(CleanerKind::German),
            Lang::Tr => Ok(CleanerKind::Turkish),
            Lang::Hy => Ok(CleanerKind::Armenian),
            Lang::Zh => Ok(CleanerKind::Mandarin),
            Lang::Ca => Err(NormError::unsupported_language("for_lang", lang)),
        }
    }
}

impl std::fmt::Display for CleanerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CleanerKind {
    type Err = NormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        let kind = match key.as_str() {
            "basic" => CleanerKind::Basic,
            "transliteration" => CleanerKind::Transliteration,
            "german" | "de" => CleanerKind::German,
            "turkish" | "tr" => CleanerKind::Turkish,
            "english" | "en" => CleanerKind::English,
            "phoneme" | "phonemes" => CleanerKind::Phoneme,
            "french" | "fr" => CleanerKind::French,
            "portuguese" | "pt" => CleanerKind::Portuguese,
            "multilingual" => CleanerKind::Multilingual,
            "mandarin" | "chinese" | "zh" => CleanerKind::Mandarin,
            "armenian" | "hy" => CleanerKind::Armenian,
            "no_op" | "noop" | "none" => CleanerKind::NoOp,
            other => CleanerKind::ALL
                .into_iter()
                .find(|kind| kind.config_name() == other)
                .ok_or_else(|| NormError::unknown_cleaner(s))?,
        };
        Ok(kind)
    }
}

/// Normalized text with the pipeline that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormText {
    /// The normalized text content.
    pub text: String,
    /// Cleaner pipeline applied.
    pub cleaner: CleanerKind,
}

impl NormText {
    /// Create a new NormText.
    pub fn new(text: impl Into<String>, cleaner: CleanerKind) -> Self {
        Self {
            text: text.into(),
            cleaner,
        }
    }

    /// Language of the pipeline that produced this text.
    pub fn lang(&self) -> Option<Lang> {
        self.cleaner.lang()
    }
}
