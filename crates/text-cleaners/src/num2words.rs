//! Number to words conversion for English and Armenian.

use tracing::warn;

// ============================================================================
// English number conversion
// ============================================================================

const EN_ONES: [&str; 20] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const EN_TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const EN_SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

const EN_DIGITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Convert 1..=99 to English words (`forty-five`).
fn tens_to_words_en(n: usize) -> String {
    if n < 20 {
        return EN_ONES[n].to_string();
    }
    let tens = n / 10;
    let ones = n % 10;
    if ones > 0 {
        format!("{}-{}", EN_TENS[tens], EN_ONES[ones])
    } else {
        EN_TENS[tens].to_string()
    }
}

/// Convert hundreds part (0-999) to English words.
fn hundreds_to_words_en(n: usize) -> String {
    if n == 0 {
        return String::new();
    }

    let mut parts = Vec::new();

    let h = n / 100;
    if h > 0 {
        parts.push(format!("{} hundred", EN_ONES[h]));
    }

    let remainder = n % 100;
    if remainder > 0 {
        parts.push(tens_to_words_en(remainder));
    }

    parts.join(" ")
}

/// Convert a number to English words, without "and".
pub fn num_to_words_en(num: i64) -> String {
    if num == 0 {
        return "zero".to_string();
    }

    let mut groups = Vec::new();
    let mut n = num.unsigned_abs();
    while n > 0 {
        groups.push((n % 1000) as usize);
        n /= 1000;
    }

    let mut parts = Vec::new();
    if num < 0 {
        parts.push("minus".to_string());
    }

    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        parts.push(hundreds_to_words_en(group));
        if scale > 0 {
            parts.push(EN_SCALES[scale].to_string());
        }
    }

    parts.join(" ")
}

/// Read a number the way years are read: `1984` is "nineteen eighty-four".
///
/// Only meaningful for four-digit values; the number normalizer calls it for
/// 1001..=2999.
pub fn year_to_words_en(num: i64) -> String {
    if num == 2000 {
        return "two thousand".to_string();
    }
    if (2001..2010).contains(&num) {
        return format!("two thousand {}", num_to_words_en(num % 100));
    }
    if num % 100 == 0 {
        return format!("{} hundred", num_to_words_en(num / 100));
    }

    let high = num_to_words_en(num / 100);
    let low = num % 100;
    if low < 10 {
        format!("{high} oh {}", EN_DIGITS[low as usize])
    } else {
        format!("{high} {}", tens_to_words_en(low as usize))
    }
}

/// Read a digit string one digit at a time.
pub fn digits_to_words_en(digits: &str) -> String {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| EN_DIGITS[d as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

/// English ordinal conversion.
pub fn ordinal_to_words_en(num: i64) -> String {
    let base = num_to_words_en(num);

    let split = base.rfind([' ', '-']).map(|i| i + 1).unwrap_or(0);
    let (prefix, last) = base.split_at(split);

    let ordinal = match last {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        w if w.ends_with('y') => format!("{}ieth", &w[..w.len() - 1]),
        w => format!("{w}th"),
    };

    format!("{prefix}{ordinal}")
}

// ============================================================================
// Armenian number conversion
// ============================================================================

/// Largest value the Armenian converter spells out.
pub const HY_MAX: i64 = 999_999_999_999;

/// Inline replacement for numbers outside `0..=HY_MAX`.
pub const HY_OUT_OF_RANGE: &str = "Number out of range (0-999,999,999,999)";

const HY_ZERO: &str = "զրո";
const HY_HUNDRED: &str = "հարյուր";

const HY_UNITS: [&str; 10] = [
    "", "մեկ", "երկու", "երեք", "չորս", "հինգ", "վեց", "յոթ", "ութ", "ինը",
];

const HY_TEENS: [&str; 10] = [
    "տաս",
    "տասնմեկ",
    "տասներկու",
    "տասներեք",
    "տասնչորս",
    "տասնհինգ",
    "տասնվեց",
    "տասնյոթ",
    "տասնութ",
    "տասնինը",
];

const HY_TENS: [&str; 10] = [
    "",
    "",
    "քսան",
    "երեսուն",
    "քառասուն",
    "հիսուն",
    "վաթսուն",
    "յոթանասուն",
    "ութսուն",
    "իննսուն",
];

const HY_SCALES: [&str; 4] = ["", "հազար", "միլիոն", "միլիարդ"];

/// Render one base-1000 group, with its scale word when `scale > 0`.
fn group_to_words_hy(group: usize, scale: usize) -> String {
    let mut parts = Vec::new();
    let mut n = group;

    if n >= 100 {
        parts.push(HY_UNITS[n / 100]);
        parts.push(HY_HUNDRED);
        n %= 100;
    }

    if n >= 20 {
        parts.push(HY_TENS[n / 10]);
        if n % 10 != 0 {
            parts.push(HY_UNITS[n % 10]);
        }
    } else if n >= 10 {
        parts.push(HY_TEENS[n - 10]);
    } else if n > 0 {
        parts.push(HY_UNITS[n]);
    }

    if scale > 0 && !parts.is_empty() {
        parts.push(HY_SCALES[scale]);
    }

    parts.join(" ")
}

/// Convert a number to Armenian words.
///
/// Values outside `0..=999_999_999_999` produce [`HY_OUT_OF_RANGE`]
/// instead of failing.
pub fn num_to_words_hy(num: i64) -> String {
    if !(0..=HY_MAX).contains(&num) {
        warn!(num, "armenian numeral out of range");
        return HY_OUT_OF_RANGE.to_string();
    }
    if num == 0 {
        return HY_ZERO.to_string();
    }

    let mut n = num as u64;
    let mut groups = Vec::with_capacity(HY_SCALES.len());
    for _ in 0..HY_SCALES.len() {
        groups.push((n % 1000) as usize);
        n /= 1000;
    }

    groups
        .iter()
        .enumerate()
        .rev()
        .filter(|&(_, &group)| group != 0)
        .map(|(scale, &group)| group_to_words_hy(group, scale))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_basic() {
        assert_eq!(num_to_words_en(0), "zero");
        assert_eq!(num_to_words_en(1), "one");
        assert_eq!(num_to_words_en(10), "ten");
        assert_eq!(num_to_words_en(11), "eleven");
        assert_eq!(num_to_words_en(20), "twenty");
        assert_eq!(num_to_words_en(21), "twenty-one");
        assert_eq!(num_to_words_en(100), "one hundred");
        assert_eq!(num_to_words_en(101), "one hundred one");
        assert_eq!(num_to_words_en(111), "one hundred eleven");
    }

    #[test]
    fn test_english_thousands() {
        assert_eq!(num_to_words_en(1000), "one thousand");
        assert_eq!(num_to_words_en(2000), "two thousand");
        assert_eq!(num_to_words_en(1001), "one thousand one");
        assert_eq!(
            num_to_words_en(2345),
            "two thousand three hundred forty-five"
        );
        assert_eq!(
            num_to_words_en(12345),
            "twelve thousand three hundred forty-five"
        );
    }

    #[test]
    fn test_english_large_and_negative() {
        assert_eq!(num_to_words_en(1_000_000), "one million");
        assert_eq!(
            num_to_words_en(2_500_000),
            "two million five hundred thousand"
        );
        assert_eq!(num_to_words_en(3_000_000_007), "three billion seven");
        assert_eq!(num_to_words_en(-15), "minus fifteen");
        assert!(num_to_words_en(i64::MIN).starts_with("minus nine quintillion"));
    }

    #[test]
    fn test_english_years() {
        assert_eq!(year_to_words_en(1984), "nineteen eighty-four");
        assert_eq!(year_to_words_en(1905), "nineteen oh five");
        assert_eq!(year_to_words_en(1900), "nineteen hundred");
        assert_eq!(year_to_words_en(2000), "two thousand");
        assert_eq!(year_to_words_en(2007), "two thousand seven");
        assert_eq!(year_to_words_en(2024), "twenty twenty-four");
    }

    #[test]
    fn test_english_ordinals() {
        assert_eq!(ordinal_to_words_en(1), "first");
        assert_eq!(ordinal_to_words_en(2), "second");
        assert_eq!(ordinal_to_words_en(3), "third");
        assert_eq!(ordinal_to_words_en(4), "fourth");
        assert_eq!(ordinal_to_words_en(5), "fifth");
        assert_eq!(ordinal_to_words_en(12), "twelfth");
        assert_eq!(ordinal_to_words_en(20), "twentieth");
        assert_eq!(ordinal_to_words_en(21), "twenty-first");
        assert_eq!(ordinal_to_words_en(100), "one hundredth");
        assert_eq!(ordinal_to_words_en(103), "one hundred third");
    }

    #[test]
    fn test_digits_to_words() {
        assert_eq!(digits_to_words_en("907"), "nine zero seven");
    }

    #[test]
    fn test_armenian_basic() {
        assert_eq!(num_to_words_hy(0), "զրո");
        assert_eq!(num_to_words_hy(7), "յոթ");
        assert_eq!(num_to_words_hy(10), "տաս");
        assert_eq!(num_to_words_hy(15), "տասնհինգ");
        assert_eq!(num_to_words_hy(25), "քսան հինգ");
        assert_eq!(num_to_words_hy(40), "քառասուն");
        assert_eq!(num_to_words_hy(100), "մեկ հարյուր");
        assert_eq!(num_to_words_hy(312), "երեք հարյուր տասներկու");
    }

    #[test]
    fn test_armenian_scales() {
        assert_eq!(num_to_words_hy(1000), "մեկ հազար");
        assert_eq!(num_to_words_hy(2024), "երկու հազար քսան չորս");
        assert_eq!(num_to_words_hy(1_000_001), "մեկ միլիոն մեկ");
        assert_eq!(
            num_to_words_hy(5_000_300_000),
            "հինգ միլիարդ երեք հարյուր հազար"
        );
        assert_eq!(
            num_to_words_hy(HY_MAX),
            "ինը հարյուր իննսուն ինը միլիարդ ինը հարյուր իննսուն ինը միլիոն \
             ինը հարյուր իննսուն ինը հազար ինը հարյուր իննսուն ինը"
        );
    }

    #[test]
    fn test_armenian_out_of_range() {
        assert_eq!(num_to_words_hy(1_000_000_000_000), HY_OUT_OF_RANGE);
        assert_eq!(num_to_words_hy(-1), HY_OUT_OF_RANGE);
    }
}
