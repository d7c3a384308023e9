//! Script allowlists.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Characters of one writing system plus the punctuation kept with it.
///
/// Whitespace is always kept and never needs to be listed.
#[derive(Debug, Clone)]
pub struct ScriptAllowlist {
    alphabet: HashSet<char>,
    punctuation: HashSet<char>,
}

impl ScriptAllowlist {
    /// Build an allowlist from the letters and punctuation it accepts.
    pub fn new(alphabet: &str, punctuation: &str) -> Self {
        Self {
            alphabet: alphabet.chars().collect(),
            punctuation: punctuation.chars().collect(),
        }
    }

    /// Whether `c` survives the filter.
    pub fn allows(&self, c: char) -> bool {
        c.is_whitespace() || self.alphabet.contains(&c) || self.punctuation.contains(&c)
    }
}

const ARMENIAN_LOWER: &str = "աբգդեզէըթժիլխծկհձղճմյնշոչպջռսվտրցւփքօֆև";
const ARMENIAN_UPPER: &str = "ԱԲԳԴԵԶԷԸԹԺԻԼԽԾԿՀՁՂՃՄՅՆՇՈՉՊՋՌՍՎՏՐՑՒՓՔՕՖ";
const ARMENIAN_PUNCTUATION: &str = "։՝՜՞:,.!?";

/// Armenian letters, both cases, with Armenian and Latin sentence punctuation.
pub static ARMENIAN: Lazy<ScriptAllowlist> = Lazy::new(|| {
    ScriptAllowlist::new(
        &format!("{ARMENIAN_LOWER}{ARMENIAN_UPPER}"),
        ARMENIAN_PUNCTUATION,
    )
});

/// Drop every character the allowlist does not accept.
pub fn remove_non_target_script(text: &str, allowlist: &ScriptAllowlist) -> String {
    text.chars().filter(|&c| allowlist.allows(c)).collect()
}

/// Map Armenian punctuation to the Latin marks the tokenizer knows.
pub fn normalize_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '՝' => ',',
            '։' => ':',
            '—' => '-',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armenian_alphabet_size() {
        // 38 letters plus the ligature և
        assert_eq!(ARMENIAN_LOWER.chars().count(), 39);
        assert_eq!(ARMENIAN_UPPER.chars().count(), 38);
    }

    #[test]
    fn test_keeps_armenian_and_punctuation() {
        assert_eq!(
            remove_non_target_script("Բարև, աշխարհ!", &ARMENIAN),
            "Բարև, աշխարհ!"
        );
        assert_eq!(remove_non_target_script("հարց՞", &ARMENIAN), "հարց՞");
    }

    #[test]
    fn test_drops_other_scripts() {
        assert_eq!(
            remove_non_target_script("բարև hello 123 мир", &ARMENIAN),
            "բարև   "
        );
        assert_eq!(remove_non_target_script("(ա) [բ]", &ARMENIAN), "ա բ");
    }

    #[test]
    fn test_whitespace_always_kept() {
        assert_eq!(remove_non_target_script("x\ty\nz", &ARMENIAN), "\t\n");
    }

    #[test]
    fn test_normalize_punctuation() {
        assert_eq!(normalize_punctuation("այո՝ ոչ։"), "այո, ոչ:");
        assert_eq!(normalize_punctuation("ա—բ"), "ա-բ");
    }
}
