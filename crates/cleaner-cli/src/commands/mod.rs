//! CLI command implementations.

pub mod info;
pub mod normalize;
pub mod stages;

use anyhow::{Context, Result};
use cleaner_core::{CleanerConfig, CleanerKind, Lang};

/// Pick the cleaner named on the command line, or the configured default.
pub fn resolve_cleaner(key: Option<&str>, config: &CleanerConfig) -> Result<CleanerKind> {
    match key {
        Some(key) => key
            .parse()
            .with_context(|| format!("invalid --cleaner value '{key}'")),
        None => Ok(config.cleaner),
    }
}

/// Pick the standard cleaner for a language tag such as `hy` or `english`.
pub fn cleaner_for_lang(tag: &str) -> Result<CleanerKind> {
    let lang: Lang = tag
        .parse()
        .with_context(|| format!("invalid --lang value '{tag}'"))?;
    Ok(CleanerKind::for_lang(lang)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cleaner_prefers_flag() {
        let config = CleanerConfig::default();
        assert_eq!(
            resolve_cleaner(Some("english_cleaners"), &config).unwrap(),
            CleanerKind::English
        );
        assert_eq!(resolve_cleaner(None, &config).unwrap(), CleanerKind::Armenian);
    }

    #[test]
    fn test_cleaner_for_lang() {
        assert_eq!(cleaner_for_lang("hy").unwrap(), CleanerKind::Armenian);
        assert_eq!(cleaner_for_lang("Chinese").unwrap(), CleanerKind::Mandarin);

        let err = cleaner_for_lang("xx").unwrap_err();
        assert!(format!("{err:#}").contains("unknown language: xx"));

        let err = cleaner_for_lang("ca").unwrap_err();
        assert!(format!("{err:#}").contains("does not support language 'ca'"));
    }

    #[test]
    fn test_resolve_cleaner_unknown() {
        let config = CleanerConfig::default();
        let err = resolve_cleaner(Some("klingon"), &config).unwrap_err();
        assert!(format!("{err:#}").contains("unknown cleaner: klingon"));
    }
}
