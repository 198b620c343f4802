// SPDX-FileCopyrightText: 2026 apstyle contributors
// SPDX-License-Identifier: MIT
//! Link reference definition titles.
//!
//! comrak resolves `[label]: url "title"` definitions into the links that
//! use them and drops the definition lines from the AST, so titles are
//! checked directly against the source. Only lines not covered by any
//! leaf block node are scanned: a definition leaves no node behind, while
//! look-alike text inside paragraphs or code blocks is covered by one.
//! Container nodes (block quotes, lists) are descended into instead of
//! counted as cover, and their `>` markers are stripped before matching,
//! so definitions nested inside them are checked too.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use comrak::nodes::{AstNode, NodeValue};
use regex::Regex;

use super::{Checker, Replacement};
use crate::style::title_case;

/// A single-line link reference definition with a double-quoted title,
/// after leading indentation and block quote markers have been stripped.
/// Definitions without a title, or with the title on a separate line, are
/// left alone.
static DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\[[^\]]+\]:\s*\S+\s+"([^"]+)"\s*$"#).unwrap());

impl<'a> Checker<'a> {
    pub(super) fn check_definitions<'b>(&mut self, root: &'b AstNode<'b>) {
        if !self.options.check_link_title {
            return;
        }

        let covered = covered_line_ranges(root);
        for index in 0..self.source_lines.len() {
            let line = self.source_lines[index];
            let line_number = index + 1;
            if covered.iter().any(|range| range.contains(&line_number)) {
                continue;
            }
            let (marker_len, content) = strip_container_markers(line);
            let Some(captures) = DEFINITION.captures(content) else {
                continue;
            };
            let Some(title) = captures.get(1) else {
                continue;
            };

            let corrected = title_case(
                title.as_str(),
                &self.options.stop_words,
                &self.options.special_terms,
            );
            if corrected == title.as_str() {
                continue;
            }

            let message = format!(
                "Link definition title should follow AP style: \"{}\"",
                corrected
            );
            let start = self.line_offsets[index] + marker_len + title.start();
            let end = self.line_offsets[index] + marker_len + title.end();
            self.report(
                start,
                message,
                Some(Replacement {
                    range: start..end,
                    text: corrected,
                }),
            );
        }
    }
}

/// 1-based line ranges occupied by the document's leaf block nodes.
/// Block quotes and lists contribute their children, not themselves, so
/// a definition swallowed inside one still shows up as uncovered lines.
fn covered_line_ranges<'b>(root: &'b AstNode<'b>) -> Vec<RangeInclusive<usize>> {
    let mut ranges = Vec::new();
    collect_leaf_ranges(root, &mut ranges);
    ranges
}

fn collect_leaf_ranges<'b>(node: &'b AstNode<'b>, ranges: &mut Vec<RangeInclusive<usize>>) {
    for child in node.children() {
        let is_container = matches!(
            child.data.borrow().value,
            NodeValue::BlockQuote | NodeValue::List(_) | NodeValue::Item(_)
        );
        if is_container {
            collect_leaf_ranges(child, ranges);
        } else {
            let sourcepos = child.data.borrow().sourcepos;
            if sourcepos.start.line > 0 {
                ranges.push(sourcepos.start.line..=sourcepos.end.line);
            }
        }
    }
}

/// Strips leading spaces and `>` block quote markers, returning the byte
/// length of the stripped prefix and the remaining content. Lines indented
/// deep enough to form a code block are covered by that block's node and
/// never reach the definition scan.
fn strip_container_markers(line: &str) -> (usize, &str) {
    let mut rest = line;
    loop {
        let trimmed = rest.trim_start_matches(' ');
        match trimmed.strip_prefix('>') {
            Some(after_marker) => rest = after_marker,
            None => {
                rest = trimmed;
                break;
            }
        }
    }
    (line.len() - rest.len(), rest)
}
