// SPDX-FileCopyrightText: 2026 apstyle contributors
// SPDX-License-Identifier: MIT
//! Link node checking: display text, link titles, and their fixes.

use std::sync::LazyLock;

use comrak::nodes::{AstNode, NodeValue};
use regex::Regex;

use super::{Checker, Replacement};
use crate::style::title_case;

/// A bare autolink such as `<https://example.com>` has no separate label
/// and is exempt from display-text checking.
static AUTOLINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<https?://[^\s>]+>$").unwrap());

/// The bracketed display text at the start of a link's source span.
static BRACKETED_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());

impl<'a> Checker<'a> {
    pub(super) fn check_link<'b>(&mut self, node: &'b AstNode<'b>, url: &str, title: &str) {
        let Some(range) = self.node_range(node) else {
            return;
        };
        let Some(raw) = self.source.get(range.clone()) else {
            return;
        };

        if AUTOLINK.is_match(raw) {
            return;
        }
        // Autolink whose span came back without the angle brackets: the
        // display text is just the URL itself.
        if title.is_empty() && !raw.starts_with('[') && self.collect_display_text(node) == url {
            return;
        }
        // Badge-style links ([![alt](img)](url)) carry no checkable text.
        let starts_with_image = node.children().next().is_some_and(|child| {
            matches!(&child.data.borrow().value, NodeValue::Image(_))
        });
        if starts_with_image {
            return;
        }

        let is_reference = is_reference_style(raw);
        let mut fixed = raw.to_string();
        let mut text_message = None;
        let mut title_message = None;
        // Offset of the reported text within the raw span; defaults to the
        // span start.
        let mut report_offset = 0;

        if self.options.check_link_text {
            let display_text = self.collect_display_text(node);
            let corrected = title_case(
                &display_text,
                &self.options.stop_words,
                &self.options.special_terms,
            );
            if display_text != corrected
                && let Some(captures) = BRACKETED_TEXT.captures(raw)
                && let Some(original) = captures.get(1)
            {
                let label = if is_reference {
                    "Link reference text"
                } else {
                    "Link text"
                };
                text_message = Some(format!(
                    "{} should follow AP style: \"{}\"",
                    label, corrected
                ));
                report_offset = original.start();
                fixed = fixed.replacen(
                    &format!("[{}]", original.as_str()),
                    &format!("[{}]", corrected),
                    1,
                );
            }
        }

        // Reference-style links get their title from the definition, which
        // is checked separately; only inline titles belong to this span.
        if self.options.check_link_title && !is_reference && !title.is_empty() {
            let corrected = title_case(
                title,
                &self.options.stop_words,
                &self.options.special_terms,
            );
            if title != corrected {
                title_message = Some(format!(
                    "Link title should follow AP style: \"{}\"",
                    corrected
                ));
                if text_message.is_none() {
                    report_offset = raw
                        .find(&format!("\"{}\"", title))
                        .map(|index| index + 1)
                        .unwrap_or(0);
                }
                fixed = fixed.replacen(
                    &format!("\"{}\"", title),
                    &format!("\"{}\"", corrected),
                    1,
                );
            }
        }

        let message = match (text_message, title_message) {
            (Some(text), Some(title)) => format!("{}, and {}", text, title),
            (Some(text), None) => text,
            (None, Some(title)) => title,
            (None, None) => return,
        };

        let replacement = (fixed != raw).then(|| Replacement {
            range: range.clone(),
            text: fixed,
        });
        self.report(range.start + report_offset, message, replacement);
    }

    /// Plain display text of a link: text nodes verbatim, other inline
    /// children through their original source span.
    fn collect_display_text<'b>(&self, node: &'b AstNode<'b>) -> String {
        let mut text = String::new();
        for child in node.children() {
            match &child.data.borrow().value {
                NodeValue::Text(value) => text.push_str(value),
                NodeValue::SoftBreak => text.push(' '),
                _ => {
                    if let Some(source) = self.extract_source(child) {
                        text.push_str(source);
                    }
                }
            }
        }
        text
    }
}

/// Whether a link's source span is reference style (`[text][label]`,
/// `[text][]`, or `[text]`) rather than inline (`[text](url)`).
fn is_reference_style(raw: &str) -> bool {
    let mut depth = 0;
    let mut after_text = None;
    for (index, ch) in raw.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    after_text = Some(&raw[index + 1..]);
                    break;
                }
            }
            _ => {}
        }
    }
    match after_text {
        Some(rest) => !rest.starts_with('('),
        None => false,
    }
}
