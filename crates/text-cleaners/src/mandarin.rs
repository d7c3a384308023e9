//! Arabic digits to Mandarin numerals.
//!
//! Works on the digit string directly, so runs of any length are handled
//! without integer overflow: up to 48 digits are read with myriad scale
//! characters, longer runs are read digit by digit.

const DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Place units inside a four-digit group: tens, hundreds, thousands.
const GROUP_UNITS: [char; 3] = ['十', '百', '千'];

/// Myriad scales: 10^4, 10^8, 10^12, ...
const MYRIAD_UNITS: [char; 11] = ['万', '亿', '兆', '京', '垓', '秭', '穰', '沟', '涧', '正', '载'];

const ZERO: char = '零';

/// Convert a run of ASCII digits to Mandarin numerals.
///
/// Non-digit characters yield an empty string.
pub fn digits_to_chinese(digits: &str) -> String {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return ZERO.to_string();
    }

    let groups = split_groups(significant);
    if groups.len() > MYRIAD_UNITS.len() + 1 {
        return significant
            .bytes()
            .map(|b| DIGITS[(b - b'0') as usize])
            .collect();
    }

    // Rendered groups, least significant first.
    let mut rendered: Vec<String> = Vec::with_capacity(groups.len());
    for (index, group) in groups.iter().enumerate() {
        if group.iter().all(|&d| d == 0) {
            rendered.push(ZERO.to_string());
            continue;
        }
        // A bare 2 above the units group is read without a leading zero.
        if index > 0 && *group == [0, 0, 0, 2] {
            rendered.push(format!("{}{}", DIGITS[2], MYRIAD_UNITS[index - 1]));
            continue;
        }

        let mut text = render_group(group);
        if index > 0 {
            text.push(MYRIAD_UNITS[index - 1]);
        }
        rendered.push(text);
    }

    let joined: String = rendered.into_iter().rev().collect();
    collapse_zeros(&joined).trim_matches(ZERO).to_string()
}

/// Split into four-digit groups, least significant first, left-padded.
fn split_groups(digits: &str) -> Vec<[u8; 4]> {
    let bytes = digits.as_bytes();
    let mut groups = Vec::with_capacity(bytes.len().div_ceil(4));
    let mut end = bytes.len();

    while end > 0 {
        let start = end.saturating_sub(4);
        let mut group = [0u8; 4];
        let width = end - start;
        for (slot, &b) in group[4 - width..].iter_mut().zip(&bytes[start..end]) {
            *slot = b - b'0';
        }
        groups.push(group);
        end = start;
    }

    groups
}

/// Render a four-digit group (most significant digit first).
fn render_group(group: &[u8; 4]) -> String {
    // Built from the units digit upward, then reversed.
    let mut pieces: Vec<String> = Vec::with_capacity(4);

    for (place, &digit) in group.iter().rev().enumerate() {
        let piece = match (place, digit) {
            (_, 0) => {
                if pieces.is_empty() {
                    continue;
                }
                ZERO.to_string()
            }
            (0, d) => DIGITS[d as usize].to_string(),
            // 10..=19 reads 十X rather than 一十X when the hundreds digit is zero
            (1, 1) if group[1] == 0 => GROUP_UNITS[0].to_string(),
            (p, d) => format!("{}{}", DIGITS[d as usize], GROUP_UNITS[p - 1]),
        };
        pieces.push(piece);
    }

    let text: String = pieces.into_iter().rev().collect();
    collapse_zeros(&text)
}

/// Collapse runs of `零` into one.
fn collapse_zeros(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_zero = false;

    for c in text.chars() {
        let is_zero = c == ZERO;
        if !(is_zero && previous_zero) {
            out.push(c);
        }
        previous_zero = is_zero;
    }

    out
}
