// SPDX-FileCopyrightText: 2026 apstyle contributors
// SPDX-License-Identifier: MIT
//! AP style title casing.
//!
//! The transformer splits a string into word and separator tokens,
//! decides a casing for every word (first/last word, stop word, word
//! after forcing punctuation), and reassembles the string. Separators
//! keep their exact original text, so the output differs from the input
//! only in letter casing inside words.

mod capitalize;
mod terms;

#[cfg(test)]
mod tests;

pub use capitalize::capitalize_word;

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

/// Function words that stay lowercase mid-title.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "in", "nor", "of", "on", "or", "so", "the",
    "to", "up", "yet",
];

/// Word boundary: a whitespace run or a single separator character
/// (hyphen, non-breaking hyphen, em dash, comma, colon, semicolon, slash,
/// `!`, `?`, parentheses, double quote).
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+|[‑—,:;/!?()"-]"#).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Separator(&'a str),
}

/// Splits the input into alternating word and separator tokens, keeping
/// every separator (including repeated whitespace) byte-exact.
fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in SEPARATOR.find_iter(input) {
        if m.start() > last {
            tokens.push(Token::Word(&input[last..m.start()]));
        }
        tokens.push(Token::Separator(m.as_str()));
        last = m.end();
    }
    if last < input.len() {
        tokens.push(Token::Word(&input[last..]));
    }
    tokens
}

fn is_stop_word(word_lower: &str, extra: &[String]) -> bool {
    DEFAULT_STOP_WORDS.contains(&word_lower)
        || extra.iter().any(|word| word.to_lowercase() == word_lower)
}

/// Converts a string to AP style title case.
///
/// The first and last words are always capitalized, stop words are
/// lowercased elsewhere, and the word after `:` `/` `-` `?` `!` or after
/// a word containing an apostrophe is capitalized regardless. Whitespace
/// and punctuation pass through unchanged.
///
/// `extra_stop_words` is unioned with the built-in stop-word set
/// (case-insensitively); `extra_special_terms` overrides the built-in
/// special-term table on key collision.
///
/// An empty input yields an empty string; the function never fails.
pub fn title_case(
    input: &str,
    extra_stop_words: &[String],
    extra_special_terms: &IndexMap<String, String>,
) -> String {
    if input.is_empty() {
        return String::new();
    }

    let tokens = tokenize(input);
    let total_words = tokens
        .iter()
        .filter(|token| matches!(token, Token::Word(_)))
        .count();

    let mut output = String::with_capacity(input.len());
    let mut word_index = 0;
    let mut force_capitalize = false;

    for token in &tokens {
        match token {
            Token::Separator(sep) => {
                output.push_str(sep);
                if matches!(*sep, ":" | "/" | "-" | "?" | "!") {
                    force_capitalize = true;
                }
            }
            Token::Word(word) => {
                let lower = word.to_lowercase();
                if word_index == 0 || word_index + 1 == total_words || force_capitalize {
                    output.push_str(&capitalize_word(word, extra_special_terms));
                    force_capitalize = false;
                } else if is_stop_word(&lower, extra_stop_words) {
                    output.push_str(&lower);
                } else if lower == "to" {
                    // A bare "to" outside first/last/forced position ends the
                    // whole pass. Unreachable while "to" is in the default
                    // stop-word set, but the branch order is load-bearing:
                    // it must stay after the stop-word check.
                    return "To".to_string();
                } else {
                    output.push_str(&capitalize_word(word, extra_special_terms));
                }

                // A possessive or contraction forces the next word, e.g.
                // "What's Up".
                if word.contains('\'') {
                    force_capitalize = true;
                }
                word_index += 1;
            }
        }
    }

    output
}
