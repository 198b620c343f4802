// SPDX-FileCopyrightText: 2026 apstyle contributors
// SPDX-License-Identifier: MIT
use indexmap::IndexMap;

use super::{capitalize_word, title_case};

fn tc(input: &str) -> String {
    title_case(input, &[], &IndexMap::new())
}

fn terms(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ========== Basic transformer tests ==========

#[test]
fn test_empty_input() {
    assert_eq!(tc(""), "");
}

#[test]
fn test_single_word() {
    assert_eq!(tc("documentation"), "Documentation");
}

#[test]
fn test_all_lowercase() {
    assert_eq!(tc("the quick brown fox"), "The Quick Brown Fox");
}

#[test]
fn test_all_uppercase() {
    assert_eq!(tc("THE QUICK BROWN FOX"), "The Quick Brown Fox");
}

#[test]
fn test_mixed_case_normalized() {
    assert_eq!(tc("tHe QuIcK bRoWn FoX"), "The Quick Brown Fox");
}

// ========== Stop-word tests ==========

#[test]
fn test_stop_word_first_and_last_capitalized() {
    assert_eq!(tc("a day in the life"), "A Day in the Life");
}

#[test]
fn test_stop_words_lowercased_mid_title() {
    assert_eq!(
        tc("The Day In The Life Of A Developer"),
        "The Day in the Life of a Developer"
    );
}

#[test]
fn test_to_lowercased_mid_title() {
    assert_eq!(tc("How TO Write GOOD Code"), "How to Write Good Code");
}

#[test]
fn test_trailing_stop_word_capitalized() {
    assert_eq!(tc("what dreams are made of"), "What Dreams Are Made Of");
}

#[test]
fn test_extra_stop_words() {
    let extra = vec!["quick".to_string()];
    assert_eq!(
        title_case("the quick brown fox", &extra, &IndexMap::new()),
        "The quick Brown Fox"
    );
}

#[test]
fn test_extra_stop_words_case_insensitive() {
    let extra = vec!["QUICK".to_string()];
    assert_eq!(
        title_case("the Quick brown fox", &extra, &IndexMap::new()),
        "The quick Brown Fox"
    );
}

// ========== Separator and whitespace tests ==========

#[test]
fn test_whitespace_runs_preserved() {
    assert_eq!(tc("the   quick  brown   fox"), "The   Quick  Brown   Fox");
}

#[test]
fn test_forced_capitalization_after_colon() {
    assert_eq!(
        tc("hello, world: a new beginning"),
        "Hello, World: A New Beginning"
    );
}

#[test]
fn test_forced_capitalization_after_slash() {
    assert_eq!(tc("tips/tricks for beginners"), "Tips/Tricks for Beginners");
}

#[test]
fn test_forced_capitalization_after_question_mark() {
    assert_eq!(
        tc("what's up ? a look at modern slang"),
        "What's Up ? A Look at Modern Slang"
    );
}

#[test]
fn test_em_dash_does_not_force_capitalization() {
    assert_eq!(
        tc("the year 2023—a new era begins"),
        "The Year 2023—a New Era Begins"
    );
}

#[test]
fn test_em_dash_before_non_stop_word() {
    assert_eq!(
        tc("technology—the future is now"),
        "Technology—the Future Is Now"
    );
}

#[test]
fn test_comma_does_not_force_capitalization() {
    assert_eq!(tc("war, peace, and the rest"), "War, Peace, and the Rest");
}

#[test]
fn test_parentheses_preserved() {
    assert_eq!(
        tc("javascript (and typescript) for beginners"),
        "JavaScript (and TypeScript) for Beginners"
    );
}

#[test]
fn test_quotes_preserved() {
    assert_eq!(tc("\"the quick brown fox\""), "\"The Quick Brown Fox\"");
}

// ========== Hyphen and apostrophe tests ==========

#[test]
fn test_hyphen_segments_capitalized_independently() {
    assert_eq!(tc("self-driving Cars are here"), "Self-Driving Cars Are Here");
}

#[test]
fn test_hyphenated_word_mid_title() {
    assert_eq!(tc("the cost-benefit ANALYSIS"), "The Cost-Benefit Analysis");
}

#[test]
fn test_possessive_forces_next_word() {
    assert_eq!(tc("einstein's greatest work"), "Einstein's Greatest Work");
}

#[test]
fn test_possessive_with_special_term() {
    assert_eq!(tc("ibm's guide to leadership"), "IBM's Guide to Leadership");
}

// ========== Special-term tests ==========

#[test]
fn test_special_term_exact_casing() {
    assert_eq!(tc("iphone apps and apis"), "iPhone Apps and APIs");
}

#[test]
fn test_special_term_first_word() {
    assert_eq!(
        tc("nasa and the future of space travel"),
        "NASA and the Future of Space Travel"
    );
}

#[test]
fn test_extra_special_terms() {
    let extra = terms(&[("rustc", "rustc")]);
    assert_eq!(
        title_case("understanding rustc internals", &[], &extra),
        "Understanding rustc Internals"
    );
}

#[test]
fn test_extra_special_terms_override_defaults() {
    let extra = terms(&[("api", "Api")]);
    assert_eq!(
        title_case("the api reference", &[], &extra),
        "The Api Reference"
    );
}

#[test]
fn test_numbers_untouched() {
    assert_eq!(
        tc("the 7 habits OF highly effective people"),
        "The 7 Habits of Highly Effective People"
    );
}

// ========== Idempotence ==========

#[test]
fn test_idempotent() {
    let inputs = [
        "the quick brown fox",
        "a day in the life",
        "hello, world: a new beginning",
        "self-driving Cars are here",
        "the year 2023—a new era begins",
        "einstein's greatest work",
        "javascript (and typescript) for beginners",
        "what's up ? a look at modern slang",
        "the   quick  brown   fox",
        "How TO Write GOOD Code",
    ];
    for input in inputs {
        let once = tc(input);
        let twice = tc(&once);
        assert_eq!(once, twice, "title_case should be idempotent for {input:?}");
    }
}

// ========== Word capitalizer tests ==========

#[test]
fn test_capitalize_empty_word() {
    assert_eq!(capitalize_word("", &IndexMap::new()), "");
}

#[test]
fn test_capitalize_generic_word() {
    assert_eq!(capitalize_word("hello", &IndexMap::new()), "Hello");
    assert_eq!(capitalize_word("HELLO", &IndexMap::new()), "Hello");
}

#[test]
fn test_capitalize_special_term() {
    assert_eq!(capitalize_word("graphql", &IndexMap::new()), "GraphQL");
    assert_eq!(capitalize_word("GRAPHQL", &IndexMap::new()), "GraphQL");
}

#[test]
fn test_capitalize_hyphenated_word() {
    assert_eq!(
        capitalize_word("self-driving", &IndexMap::new()),
        "Self-Driving"
    );
}

#[test]
fn test_capitalize_hyphenated_word_with_special_segment() {
    assert_eq!(capitalize_word("api-first", &IndexMap::new()), "API-First");
}

#[test]
fn test_capitalize_contraction() {
    assert_eq!(capitalize_word("don't", &IndexMap::new()), "Don't");
}

#[test]
fn test_capitalize_possessive_acronym() {
    assert_eq!(capitalize_word("ibm's", &IndexMap::new()), "IBM's");
}

#[test]
fn test_capitalize_double_apostrophe() {
    // Everything after the first apostrophe stays lowercase, later
    // apostrophes included.
    assert_eq!(
        capitalize_word("rock'N'Roll", &IndexMap::new()),
        "Rock'n'roll"
    );
}

#[test]
fn test_capitalize_extra_term_wins() {
    let extra = terms(&[("iphone", "IPHONE")]);
    assert_eq!(capitalize_word("iphone", &extra), "IPHONE");
}
