//! Text normalization helpers: slugs for filenames and title casing for
//! headings.

use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("valid slug regex"));

/// Convert text into a filename/URL-safe slug.
///
/// The text is lowercased, then every maximal run of characters outside
/// `[a-zA-Z0-9]` collapses to a single `-`, and leading/trailing `-` are
/// stripped. Empty input yields an empty slug.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Title-case text word by word.
///
/// A word starts at any cased character (one with an upper or lower case
/// form) that does not directly follow another cased character; its first
/// letter is uppercased and the rest lowercased. Uncased characters, CJK
/// ideographs included, pass through untouched and end the current word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
