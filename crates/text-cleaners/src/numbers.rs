//! Numeral expansion inside running text.
//!
//! Each `normalize_numbers_*` function finds numeral substrings and replaces
//! them with spelled-out words, leaving everything else untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::mandarin::digits_to_chinese;
use crate::num2words::{
    HY_OUT_OF_RANGE, digits_to_words_en, num_to_words_en, num_to_words_hy, ordinal_to_words_en,
    year_to_words_en,
};

static COMMA_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9][0-9,]+[0-9]").unwrap());
static CURRENCY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([$€£¥])([0-9,.]*[0-9]+)").unwrap());
static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\.([0-9]+)").unwrap());
static ORDINAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)(st|nd|rd|th)").unwrap());
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?[0-9]+").unwrap());
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());
static DECIMAL_DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
static DECIMAL_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d$").unwrap());

// ============================================================================
// English
// ============================================================================

/// Singular and plural unit names for one currency.
struct Currency {
    unit: &'static str,
    units: &'static str,
    subunit: &'static str,
    subunits: &'static str,
}

fn currency_for(symbol: &str) -> Option<Currency> {
    let currency = match symbol {
        "$" => Currency {
            unit: "dollar",
            units: "dollars",
            subunit: "cent",
            subunits: "cents",
        },
        "€" => Currency {
            unit: "euro",
            units: "euros",
            subunit: "cent",
            subunits: "cents",
        },
        "£" => Currency {
            unit: "pound sterling",
            units: "pounds sterling",
            subunit: "penny",
            subunits: "pence",
        },
        "¥" => Currency {
            unit: "yen",
            units: "yen",
            subunit: "sen",
            subunits: "sen",
        },
        _ => return None,
    };
    Some(currency)
}

/// Rewrite `$12.50` as `12 dollars 50 cents`; digits are spelled later.
fn expand_currency(symbol: &str, amount: &str) -> String {
    let Some(currency) = currency_for(symbol) else {
        return format!("{symbol}{amount}");
    };

    let amount = amount.replace(',', "");
    let parts: Vec<&str> = amount.split('.').collect();
    if parts.len() > 2 {
        return format!("{amount} {}", currency.units);
    }

    let mut words = Vec::new();

    let whole = parts[0];
    match whole.parse::<u64>() {
        Ok(0) => {}
        Ok(1) => words.push(format!("1 {}", currency.unit)),
        Ok(n) => words.push(format!("{n} {}", currency.units)),
        Err(_) if whole.is_empty() => {}
        Err(_) => words.push(format!("{whole} {}", currency.units)),
    }

    if let Some(fraction) = parts.get(1).filter(|f| !f.is_empty()) {
        // Read the fraction as hundredths: ".5" is fifty cents.
        let cents: String = fraction
            .chars()
            .chain(std::iter::repeat('0'))
            .take(2)
            .collect();
        match cents.parse::<u32>() {
            Ok(0) | Err(_) => {}
            Ok(1) => words.push(format!("1 {}", currency.subunit)),
            Ok(n) => words.push(format!("{n} {}", currency.subunits)),
        }
    }

    if words.is_empty() {
        return format!("zero {}", currency.units);
    }
    words.join(" ")
}

fn expand_cardinal(raw: &str) -> String {
    match raw.parse::<i64>() {
        Ok(n) if 1000 < n && n < 3000 => year_to_words_en(n),
        Ok(n) => num_to_words_en(n),
        Err(_) => match raw.strip_prefix('-') {
            Some(digits) => format!("minus {}", digits_to_words_en(digits)),
            None => digits_to_words_en(raw),
        },
    }
}

/// Spell out English numerals: separators, currency, decimals, ordinals,
/// then plain cardinals.
pub fn normalize_numbers_en(text: &str) -> String {
    let text = COMMA_NUMBER_RE.replace_all(text, |caps: &Captures| caps[0].replace(',', ""));
    let text = CURRENCY_RE.replace_all(&text, |caps: &Captures| {
        expand_currency(&caps[1], &caps[2])
    });
    let text = DECIMAL_RE.replace_all(&text, "$1 point $2");
    let text = ORDINAL_RE.replace_all(&text, |caps: &Captures| match caps[1].parse::<i64>() {
        Ok(n) => ordinal_to_words_en(n),
        Err(_) => caps[0].to_string(),
    });
    let text = NUMBER_RE.replace_all(&text, |caps: &Captures| expand_cardinal(&caps[0]));
    text.into_owned()
}

// ============================================================================
// Armenian
// ============================================================================

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// Value of a Unicode decimal digit (`Nd`), in any script.
///
/// Decimal digits are encoded as contiguous runs that start at zero, so the
/// value is the distance back to the start of the run, modulo ten.
fn decimal_digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut offset = 0u32;
    let mut code = u32::from(c);
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }
    Some(offset % 10)
}

/// Parse a run of decimal digits from any script; `None` on overflow.
fn parse_decimal_run(run: &str) -> Option<i64> {
    run.chars().try_fold(0i64, |acc, c| {
        let digit = decimal_digit_value(c)?;
        acc.checked_mul(10)?.checked_add(i64::from(digit))
    })
}

/// Spell out every run of decimal digits in Armenian.
///
/// Digits from any script count (`٢٥` and `２５` read like `25`). Runs too
/// large to represent are replaced with the out-of-range message, like any
/// other value above the converter's limit.
pub fn normalize_numbers_hy(text: &str) -> String {
    DECIMAL_DIGITS_RE
        .replace_all(text, |caps: &Captures| match parse_decimal_run(&caps[0]) {
            Some(n) => num_to_words_hy(n),
            None => HY_OUT_OF_RANGE.to_string(),
        })
        .into_owned()
}

// ============================================================================
// Mandarin
// ============================================================================

/// Replace every run of digits with Mandarin numerals.
pub fn normalize_numbers_zh(text: &str) -> String {
    DIGITS_RE
        .replace_all(text, |caps: &Captures| digits_to_chinese(&caps[0]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_cardinals_in_context() {
        assert_eq!(
            normalize_numbers_en("there were 42 events"),
            "there were forty-two events"
        );
        assert_eq!(normalize_numbers_en("no digits"), "no digits");
        assert_eq!(normalize_numbers_en("-7 degrees"), "minus seven degrees");
    }

    #[test]
    fn test_english_years() {
        assert_eq!(normalize_numbers_en("in 1984"), "in nineteen eighty-four");
        assert_eq!(normalize_numbers_en("in 2024"), "in twenty twenty-four");
        assert_eq!(normalize_numbers_en("1000 ships"), "one thousand ships");
    }

    #[test]
    fn test_english_thousands_separators() {
        assert_eq!(
            normalize_numbers_en("1,234,567 people"),
            "one million two hundred thirty-four thousand five hundred sixty-seven people"
        );
    }

    #[test]
    fn test_english_currency() {
        assert_eq!(normalize_numbers_en("$1"), "one dollar");
        assert_eq!(normalize_numbers_en("$100"), "one hundred dollars");
        assert_eq!(
            normalize_numbers_en("$25.50"),
            "twenty-five dollars fifty cents"
        );
        assert_eq!(normalize_numbers_en("$0.01"), "one cent");
        assert_eq!(normalize_numbers_en("$.5"), "fifty cents");
        assert_eq!(normalize_numbers_en("$1.5"), "one dollar fifty cents");
        assert_eq!(normalize_numbers_en("$0"), "zero dollars");
        assert_eq!(normalize_numbers_en("£3"), "three pounds sterling");
        assert_eq!(normalize_numbers_en("€1.01"), "one euro one cent");
        assert_eq!(normalize_numbers_en("¥500"), "five hundred yen");
    }

    #[test]
    fn test_english_decimals_and_ordinals() {
        assert_eq!(normalize_numbers_en("3.14"), "three point fourteen");
        assert_eq!(normalize_numbers_en("the 1st and 22nd"), "the first and twenty-second");
        assert_eq!(normalize_numbers_en("the 13th floor"), "the thirteenth floor");
    }

    #[test]
    fn test_english_huge_number_reads_digits() {
        assert_eq!(
            normalize_numbers_en("99999999999999999999"),
            "nine nine nine nine nine nine nine nine nine nine \
             nine nine nine nine nine nine nine nine nine nine"
        );
    }

    #[test]
    fn test_armenian_numbers_in_context() {
        assert_eq!(
            normalize_numbers_hy("ես ունեմ 25 գիրք"),
            "ես ունեմ քսան հինգ գիրք"
        );
        assert_eq!(normalize_numbers_hy("0 և 15"), "զրո և տասնհինգ");
    }

    #[test]
    fn test_armenian_multiple_numbers_left_to_right() {
        assert_eq!(normalize_numbers_hy("1 2 3"), "մեկ երկու երեք");
    }

    #[test]
    fn test_armenian_non_ascii_digits() {
        assert_eq!(
            normalize_numbers_hy("ես ունեմ ٢٥ գիրք"),
            "ես ունեմ քսան հինգ գիրք"
        );
        assert_eq!(normalize_numbers_hy("２５"), "քսան հինգ");
        assert_eq!(normalize_numbers_hy("१०"), "տաս");
        assert_eq!(normalize_numbers_hy("٠"), "զրո");
    }

    #[test]
    fn test_decimal_digit_values() {
        assert_eq!(decimal_digit_value('7'), Some(7));
        assert_eq!(decimal_digit_value('٩'), Some(9));
        assert_eq!(decimal_digit_value('０'), Some(0));
        // Mathematical digits are several zero-to-nine runs back to back.
        assert_eq!(decimal_digit_value('\u{1D7D8}'), Some(0));
        assert_eq!(decimal_digit_value('\u{1D7E1}'), Some(9));
        assert_eq!(decimal_digit_value('a'), None);
        assert_eq!(parse_decimal_run("٢5"), Some(25));
    }

    #[test]
    fn test_armenian_out_of_range_inline() {
        assert_eq!(
            normalize_numbers_hy("թիվ 1000000000000"),
            format!("թիվ {HY_OUT_OF_RANGE}")
        );
        assert_eq!(
            normalize_numbers_hy("99999999999999999999999"),
            HY_OUT_OF_RANGE
        );
    }

    #[test]
    fn test_mandarin_numbers_in_context() {
        assert_eq!(normalize_numbers_zh("我有3本书"), "我有三本书");
        assert_eq!(normalize_numbers_zh("2024年"), "二千零二十四年");
        assert_eq!(normalize_numbers_zh("没有数字"), "没有数字");
    }
}
