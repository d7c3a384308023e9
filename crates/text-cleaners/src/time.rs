//! Clock times in English text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::num2words::num_to_words_en;

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([01]?[0-9]|2[0-3]):([0-5][0-9])(?:\s*(a\.m\.|am|pm|p\.m\.|a\.m|p\.m))?\b")
        .unwrap()
});

fn spell_time(caps: &Captures) -> String {
    let Ok(hour) = caps[1].parse::<u32>() else {
        return caps[0].to_string();
    };
    let Ok(minute) = caps[2].parse::<u32>() else {
        return caps[0].to_string();
    };

    let (hour, past_noon) = match hour {
        0 => (12, false),
        12 => (12, true),
        h if h > 12 => (h - 12, true),
        h => (h, false),
    };

    let mut words = vec![num_to_words_en(i64::from(hour))];
    if minute > 0 {
        if minute < 10 {
            words.push("oh".to_string());
        }
        words.push(num_to_words_en(i64::from(minute)));
    }

    match caps.get(3) {
        Some(suffix) => words.extend(
            suffix
                .as_str()
                .chars()
                .filter(|c| *c != '.')
                .map(|c| c.to_ascii_lowercase().to_string()),
        ),
        None if past_noon => words.push("p m".to_string()),
        None => words.push("a m".to_string()),
    }

    words.join(" ")
}

/// Spell out `H:MM` times, with an optional `am`/`pm` suffix.
///
/// Hours run 0 to 23 and minutes 00 to 59; anything else is left as is.
pub fn expand_time_english(text: &str) -> String {
    TIME_RE.replace_all(text, spell_time).into_owned()
}
