// SPDX-FileCopyrightText: 2026 apstyle contributors
// SPDX-License-Identifier: MIT
//! apstyle checks Markdown link text and link titles against AP style
//! title case and can rewrite deviations in place.
//!
//! # Example
//!
//! ```
//! use apstyle::{check, fix, Options};
//!
//! let input = "[the quick brown fox](http://example.com)";
//! let options = Options::default();
//!
//! let violations = check(input, &options);
//! assert_eq!(violations.len(), 1);
//! assert_eq!(
//!     violations[0].message,
//!     "Link text should follow AP style: \"The Quick Brown Fox\""
//! );
//!
//! assert_eq!(fix(input, &options), "[The Quick Brown Fox](http://example.com)");
//! ```

mod checker;
pub mod config;
mod style;

pub use checker::Violation;
pub use style::{capitalize_word, title_case};

use indexmap::IndexMap;

/// Checking options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Extra words to lowercase mid-title, unioned with the built-in
    /// stop-word set.
    pub stop_words: Vec<String>,

    /// Extra special terms (lowercased word to exact casing). Entries here
    /// override the built-in table on key collision.
    pub special_terms: IndexMap<String, String>,

    /// Check link display text (default: true).
    pub check_link_text: bool,

    /// Check link titles and link definition titles (default: true).
    pub check_link_title: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            stop_words: Vec::new(),
            special_terms: IndexMap::new(),
            check_link_text: true,
            check_link_title: true,
        }
    }
}

/// Checks a Markdown document and returns every AP style deviation found
/// in link text and link titles, in document order.
///
/// Checking is advisory and never fails: empty input and constructs whose
/// source cannot be recovered simply produce no violations.
pub fn check(input: &str, options: &Options) -> Vec<Violation> {
    checker::run(input, options).0
}

/// Returns the document with every detected deviation rewritten to its AP
/// style form. A document that needs no fixes comes back unchanged.
pub fn fix(input: &str, options: &Options) -> String {
    let (_, replacements) = checker::run(input, options);
    checker::apply(input, replacements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_empty_input() {
        assert!(check("", &Options::default()).is_empty());
    }

    #[test]
    fn test_fix_empty_input() {
        assert_eq!(fix("", &Options::default()), "");
    }

    #[test]
    fn test_fix_clean_document_unchanged() {
        let input = "See [The Quick Brown Fox](http://example.com) for details.\n";
        assert_eq!(fix(input, &Options::default()), input);
    }
}
