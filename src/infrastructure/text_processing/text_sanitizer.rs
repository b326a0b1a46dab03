use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>[a-z])").unwrap());

/// NFKC-normalizes extracted text and rejoins words hyphenated across lines.
///
/// Spacing inside a line is left alone: column layouts separated by runs of
/// spaces must survive for table detection. Trailing whitespace is dropped.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let de_hyphenated = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");

    de_hyphenated
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
