use std::sync::LazyLock;

use regex::Regex;

const MAX_VISIBLE_CHARS: usize = 100;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static LONG_DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d[\d\s.-]{6,}\d").unwrap());

/// Shortened, single-line view of document text for debug logs.
///
/// Email addresses and phone-like digit runs are masked since uploads
/// routinely carry contact details.
pub fn preview_for_log(text: &str) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if flattened.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = flattened.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let cut: String = flattened.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{cut}... ({total_chars} chars total)")
    } else {
        flattened
    };

    let masked = EMAIL.replace_all(&visible, "[EMAIL]");
    LONG_DIGIT_RUN.replace_all(&masked, "[NUMBER]").into_owned()
}
