//! Primitive text operations.
//!
//! Every function here is a pure `&str -> String` transform with no
//! language tables beyond the small `&` and hyphen substitutions in
//! [`replace_symbols`].

use any_ascii::any_ascii;
use once_cell::sync::Lazy;
use regex::Regex;

use cleaner_core::Lang;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static AUX_SYMBOLS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[<>()\[\]"]+"#).unwrap());

/// Unicode-aware lowercase.
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Collapse every run of whitespace into a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Best-effort lossy transliteration to ASCII.
///
/// Every script is romanized (`日本` becomes `RiBen`, `Привет` becomes
/// `Privet`); diacritics and typographic punctuation fold to their plain
/// ASCII forms.
pub fn convert_to_ascii(text: &str) -> String {
    any_ascii(text)
}

/// Delete `< > ( ) [ ] "` wherever they occur.
pub fn remove_aux_symbols(text: &str) -> String {
    AUX_SYMBOLS_RE.replace_all(text, "").into_owned()
}

/// Replace punctuation that confuses the synthesizer.
///
/// `;` and `:` become commas and `-` becomes a space (Catalan deletes it).
/// Then `&` is spelled in the target language and, for Catalan,
/// apostrophes are dropped. With no language, or a language without an
/// `&` word, only the first three substitutions apply.
pub fn replace_symbols(text: &str, lang: Option<Lang>) -> String {
    let hyphen = if lang == Some(Lang::Ca) { "" } else { " " };
    let text = text.replace(';', ",").replace('-', hyphen).replace(':', ",");

    match lang {
        Some(Lang::En) => text.replace('&', " and "),
        Some(Lang::Fr) => text.replace('&', " et "),
        Some(Lang::Pt) => text.replace('&', " e "),
        Some(Lang::Ca) => text.replace('&', " i ").replace('\'', ""),
        Some(Lang::De | Lang::Tr | Lang::Hy | Lang::Zh) | None => text,
    }
}

/// Delete newline characters.
pub fn strip_newlines(text: &str) -> String {
    text.replace('\n', "")
}

/// Map capital `I` to dotless `ı` so lowercasing keeps Turkish spelling.
pub fn replace_turkish_capital_i(text: &str) -> String {
    text.replace('I', "ı")
}
