// SPDX-FileCopyrightText: 2026 apstyle contributors
// SPDX-License-Identifier: MIT
//! Document checking over the comrak AST.
//!
//! The checker walks a parsed Markdown document, runs the title-case
//! transformer against link display text and link titles, and records a
//! violation plus a source edit for every deviation. Each construct is
//! handled in isolation: a node whose source span cannot be recovered
//! simply produces no violation.

mod definition;
mod link;


use std::ops::Range;

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options as ComrakOptions, parse_document};

use crate::Options;

/// A single AP style deviation found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// 1-based line of the offending text.
    pub line: usize,
    /// 1-based column of the offending text.
    pub column: usize,
    /// Message of the form `<Label> should follow AP style: "<corrected>"`.
    pub message: String,
}

/// A pending edit: replace `range` bytes of the document with `text`.
#[derive(Debug, Clone)]
pub(crate) struct Replacement {
    pub range: Range<usize>,
    pub text: String,
}

pub(crate) struct Checker<'a> {
    options: &'a Options,
    source: &'a str,
    source_lines: Vec<&'a str>,
    /// Byte offset of the start of each source line.
    line_offsets: Vec<usize>,
    /// Violations paired with the edit that would fix them, when one
    /// could be computed.
    findings: Vec<(Violation, Option<Replacement>)>,
}

/// Checks a document and returns the violations found together with the
/// edits that would fix them.
pub(crate) fn run(input: &str, options: &Options) -> (Vec<Violation>, Vec<Replacement>) {
    if input.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let arena = Arena::new();
    let comrak_options = ComrakOptions::default();
    let root = parse_document(&arena, input, &comrak_options);

    let mut checker = Checker::new(input, options);
    checker.walk(root);
    checker.check_definitions(root);

    let mut findings = checker.findings;
    findings.sort_by_key(|(violation, _)| (violation.line, violation.column));

    let mut violations = Vec::with_capacity(findings.len());
    let mut replacements = Vec::new();
    for (violation, replacement) in findings {
        violations.push(violation);
        if let Some(replacement) = replacement {
            replacements.push(replacement);
        }
    }
    (violations, replacements)
}

/// Applies edits to the input, skipping any that overlap an earlier one.
pub(crate) fn apply(input: &str, mut replacements: Vec<Replacement>) -> String {
    replacements.sort_by_key(|replacement| replacement.range.start);

    let mut output = String::with_capacity(input.len());
    let mut cursor = 0;
    for replacement in replacements {
        if replacement.range.start < cursor || replacement.range.end > input.len() {
            continue;
        }
        output.push_str(&input[cursor..replacement.range.start]);
        output.push_str(&replacement.text);
        cursor = replacement.range.end;
    }
    output.push_str(&input[cursor..]);
    output
}

impl<'a> Checker<'a> {
    fn new(source: &'a str, options: &'a Options) -> Self {
        let mut line_offsets = vec![0];
        for (index, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_offsets.push(index + 1);
            }
        }
        Self {
            options,
            source,
            source_lines: source.lines().collect(),
            line_offsets,
            findings: Vec::new(),
        }
    }

    fn walk<'b>(&mut self, node: &'b AstNode<'b>) {
        let link = match &node.data.borrow().value {
            NodeValue::Link(link) => Some((link.url.clone(), link.title.clone())),
            _ => None,
        };
        if let Some((url, title)) = link {
            self.check_link(node, &url, &title);
            return;
        }
        for child in node.children() {
            self.walk(child);
        }
    }

    /// Byte range of a node in the source, derived from its sourcepos.
    /// Lines and columns are 1-based; columns count bytes.
    fn node_range<'b>(&self, node: &'b AstNode<'b>) -> Option<Range<usize>> {
        let sourcepos = node.data.borrow().sourcepos;
        if sourcepos.start.line == 0 || sourcepos.end.line == 0 {
            return None;
        }
        let start_line = sourcepos.start.line - 1;
        let end_line = sourcepos.end.line - 1;
        if end_line >= self.source_lines.len() {
            return None;
        }

        let start = self.line_offsets[start_line] + sourcepos.start.column.saturating_sub(1);
        let end_column = sourcepos.end.column.min(self.source_lines[end_line].len());
        let end = self.line_offsets[end_line] + end_column;
        if start > end || end > self.source.len() {
            return None;
        }
        Some(start..end)
    }

    /// Original source text for a node; `None` if the span cannot be
    /// recovered (e.g. falls outside a character boundary).
    fn extract_source<'b>(&self, node: &'b AstNode<'b>) -> Option<&'a str> {
        let range = self.node_range(node)?;
        self.source.get(range)
    }

    /// 1-based (line, column) for a byte offset into the source.
    fn position(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_offsets.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index - 1,
        };
        (line + 1, offset - self.line_offsets[line] + 1)
    }

    fn report(&mut self, offset: usize, message: String, replacement: Option<Replacement>) {
        let (line, column) = self.position(offset);
        self.findings.push((
            Violation {
                line,
                column,
                message,
            },
            replacement,
        ));
    }
}
