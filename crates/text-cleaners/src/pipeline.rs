//! Cleaner pipelines - ordered stage lists, one per cleaner.
//!
//! Each pipeline feeds the output of one stage straight into the next.
//! Language-specific behavior lives in stage parameters, so two pipelines
//! that share a stage differ only in what it was built with.

use tracing::{debug, trace};

use cleaner_core::{CleanerKind, Lang, NormResult};

use crate::stages::{
    CollapseWhitespace, ExpandAbbreviations, ExpandTime, Lowercase, NormalizeNumbers,
    NormalizePunctuation, RemoveAuxSymbols, ReplaceSymbols, ScriptFilter, Stage, StripNewlines,
    TurkishCapitalI,
};

/// An ordered list of stages run by one cleaner.
#[derive(Debug)]
pub struct Pipeline {
    kind: CleanerKind,
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Build the standard pipeline for a cleaner.
    pub fn for_kind(kind: CleanerKind) -> Self {
        Self::with_stages(kind, default_stages(kind))
    }

    /// Build a pipeline from custom stages.
    pub fn with_stages(kind: CleanerKind, stages: Vec<Box<dyn Stage>>) -> Self {
        Self { kind, stages }
    }

    /// Append a stage.
    pub fn add_stage(&mut self, stage: Box<dyn Stage>) {
        self.stages.push(stage);
    }

    /// The cleaner this pipeline implements.
    pub fn kind(&self) -> CleanerKind {
        self.kind
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage in order.
    pub fn run(&self, input: &str) -> NormResult<String> {
        let mut text = input.to_string();

        for stage in &self.stages {
            text = stage.apply(&text)?;
            trace!(
                cleaner = %self.kind,
                stage = stage.name(),
                output = %text,
                "stage applied"
            );
        }

        debug!(
            cleaner = %self.kind,
            stages = self.stages.len(),
            output_len = text.len(),
            "pipeline finished"
        );
        Ok(text)
    }
}

/// Tail shared by the Latin-script cleaners.
fn symbol_tail(lang: Option<Lang>) -> Vec<Box<dyn Stage>> {
    vec![
        Box::new(ReplaceSymbols { lang }),
        Box::new(RemoveAuxSymbols),
        Box::new(CollapseWhitespace),
    ]
}

fn default_stages(kind: CleanerKind) -> Vec<Box<dyn Stage>> {
    match kind {
        // The ASCII conversion stage exists but these cleaners leave it out.
        CleanerKind::Basic | CleanerKind::Transliteration | CleanerKind::German => {
            vec![Box::new(Lowercase), Box::new(CollapseWhitespace)]
        }
        CleanerKind::Turkish => vec![
            Box::new(TurkishCapitalI),
            Box::new(Lowercase),
            Box::new(CollapseWhitespace),
        ],
        CleanerKind::English => {
            let mut stages: Vec<Box<dyn Stage>> = vec![
                Box::new(Lowercase),
                Box::new(ExpandTime),
                Box::new(NormalizeNumbers { lang: Lang::En }),
                Box::new(ExpandAbbreviations { lang: Lang::En }),
            ];
            stages.extend(symbol_tail(Some(Lang::En)));
            stages
        }
        CleanerKind::Phoneme => {
            let mut stages: Vec<Box<dyn Stage>> = vec![
                Box::new(NormalizeNumbers { lang: Lang::En }),
                Box::new(ExpandAbbreviations { lang: Lang::En }),
            ];
            stages.extend(symbol_tail(Some(Lang::En)));
            stages
        }
        CleanerKind::French => {
            let mut stages: Vec<Box<dyn Stage>> = vec![
                Box::new(ExpandAbbreviations { lang: Lang::Fr }),
                Box::new(Lowercase),
            ];
            stages.extend(symbol_tail(Some(Lang::Fr)));
            stages
        }
        CleanerKind::Portuguese => {
            let mut stages: Vec<Box<dyn Stage>> = vec![Box::new(Lowercase)];
            stages.extend(symbol_tail(Some(Lang::Pt)));
            stages
        }
        CleanerKind::Multilingual => {
            let mut stages: Vec<Box<dyn Stage>> = vec![Box::new(Lowercase)];
            stages.extend(symbol_tail(None));
            stages
        }
        CleanerKind::Mandarin => vec![Box::new(NormalizeNumbers { lang: Lang::Zh })],
        CleanerKind::Armenian => vec![
            Box::new(Lowercase),
            Box::new(NormalizeNumbers { lang: Lang::Hy }),
            Box::new(ScriptFilter::armenian()),
            Box::new(NormalizePunctuation),
            Box::new(CollapseWhitespace),
        ],
        CleanerKind::NoOp => vec![Box::new(StripNewlines)],
    }
}
