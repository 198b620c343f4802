// SPDX-FileCopyrightText: 2026 apstyle contributors
// SPDX-License-Identifier: MIT
//! Single-word capitalization.

use indexmap::IndexMap;

use super::terms::DEFAULT_SPECIAL_TERMS;

/// Capitalizes a single word.
///
/// The word is first looked up (lowercased) in the special-term table;
/// caller-supplied terms win over the built-in ones, and a hit is returned
/// verbatim. Hyphenated words are capitalized segment by segment, so each
/// segment gets its own table lookup. In words with an apostrophe,
/// everything after the first apostrophe is lowercased ("don't" becomes
/// "Don't", "IBM's" keeps the acronym). Otherwise the first character is
/// uppercased and the rest lowercased.
pub fn capitalize_word(word: &str, extra_special_terms: &IndexMap<String, String>) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();
    if let Some(term) = extra_special_terms.get(&lower) {
        return term.clone();
    }
    if let Some((_, term)) = DEFAULT_SPECIAL_TERMS.iter().find(|(key, _)| *key == lower) {
        return (*term).to_string();
    }

    if word.contains('-') {
        return word
            .split('-')
            .map(|segment| capitalize_word(segment, extra_special_terms))
            .collect::<Vec<_>>()
            .join("-");
    }

    if let Some((head, tail)) = word.split_once('\'') {
        let mut result = capitalize_word(head, extra_special_terms);
        result.push('\'');
        result.push_str(&tail.to_lowercase());
        return result;
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result: String = first.to_uppercase().collect();
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}
