//! Line tokenizer
//!
//! Partitions one line of text into typed spans. Rules are applied in
//! grammar order; a rule's match is accepted only when none of its bytes
//! were claimed by an earlier rule, otherwise it is dropped whole. Text no
//! rule claimed comes out as `Plain` spans, so the spans of a line always
//! concatenate back to the line.

use super::grammar::Grammar;
use super::tokens::TokenKind;

/// A typed slice of one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Exact text of the slice
    pub text: String,
    /// Token kind
    pub kind: TokenKind,
    /// Byte offset of the slice within the line
    pub start: usize,
}

impl Span {
    /// Create a new span
    pub fn new(text: &str, kind: TokenKind, start: usize) -> Self {
        Self {
            text: text.to_string(),
            kind,
            start,
        }
    }

    /// Byte offset just past the end of this span
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Tokenize a single line with a grammar.
///
/// The line must not contain line breaks; patterns only ever see one
/// physical line. An empty line yields no spans.
pub fn tokenize(line: &str, grammar: &Grammar) -> Vec<Span> {
    if line.is_empty() {
        return Vec::new();
    }

    let mut claimed = vec![false; line.len()];
    let mut accepted: Vec<(usize, usize, TokenKind)> = Vec::new();

    for rule in grammar.rules() {
        for (start, end) in rule.find_all(line) {
            if claimed[start..end].iter().any(|&c| c) {
                continue;
            }
            claimed[start..end].fill(true);
            accepted.push((start, end, rule.kind));
        }
    }

    accepted.sort_unstable_by_key(|&(start, _, _)| start);

    let mut spans = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut pos = 0;
    for (start, end, kind) in accepted {
        if start > pos {
            spans.push(Span::new(&line[pos..start], TokenKind::Plain, pos));
        }
        spans.push(Span::new(&line[start..end], kind, start));
        pos = end;
    }
    if pos < line.len() {
        spans.push(Span::new(&line[pos..], TokenKind::Plain, pos));
    }

    spans
}
