//! Property tests for the cleaner building blocks.

use cleaner_core::{CleanerKind, TextCleaner};
use proptest::prelude::*;
use text_cleaners::Normalizer;
use text_cleaners::mandarin::digits_to_chinese;
use text_cleaners::num2words::{HY_MAX, HY_OUT_OF_RANGE, num_to_words_hy};
use text_cleaners::ops::collapse_whitespace;
use text_cleaners::script::{ARMENIAN, remove_non_target_script};

fn any_cleaner() -> impl Strategy<Value = CleanerKind> {
    proptest::sample::select(CleanerKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn collapse_whitespace_is_idempotent(text in "(\\PC|\\s)*") {
        let once = collapse_whitespace(&text);
        prop_assert_eq!(collapse_whitespace(&once), once.clone());
        prop_assert!(!once.contains("  "));
        prop_assert_eq!(once.trim(), once.as_str());
    }

    #[test]
    fn script_filter_output_is_allowed(text in "(\\PC|\\s)*") {
        let filtered = remove_non_target_script(&text, &ARMENIAN);
        prop_assert!(filtered.chars().all(|c| ARMENIAN.allows(c)));
    }

    #[test]
    fn script_filter_is_idempotent(text in "[ա-ֆԱ-Ֆa-z0-9 ,.!?։՝]*") {
        let once = remove_non_target_script(&text, &ARMENIAN);
        prop_assert_eq!(remove_non_target_script(&once, &ARMENIAN), once);
    }

    #[test]
    fn pipelines_are_deterministic(text in "\\PC{0,64}", cleaner in any_cleaner()) {
        let normalizer = Normalizer::new();
        let first = normalizer.clean(&text, cleaner).unwrap();
        let second = normalizer.clean(&text, cleaner).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn builtin_pipelines_never_fail(text in "(\\PC|\\s){0,64}", cleaner in any_cleaner()) {
        prop_assert!(Normalizer::new().clean(&text, cleaner).is_ok());
    }

    #[test]
    fn armenian_numerals_in_range_are_spelled(n in 0i64..=HY_MAX) {
        let words = num_to_words_hy(n);
        prop_assert_ne!(words.as_str(), HY_OUT_OF_RANGE);
        prop_assert!(!words.is_empty());
        prop_assert!(!words.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn mandarin_output_has_no_ascii_digits(digits in "[0-9]{1,60}") {
        let text = digits_to_chinese(&digits);
        prop_assert!(!text.is_empty());
        prop_assert!(!text.chars().any(|c| c.is_ascii_digit()));
        prop_assert!(!text.starts_with('零') || text == "零");
    }
}
