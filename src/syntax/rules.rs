//! Pattern rules for syntax highlighting
//!
//! A rule pairs a token kind with a compiled regex. Matches are reported
//! left to right and never overlap each other; zero-width matches are
//! dropped so every accepted match makes forward progress.

use regex::Regex;

use super::tokens::TokenKind;
use crate::error::{CodesnapError, Result};

/// Name of the capture group that narrows the claimed range of a match
pub const TOKEN_GROUP: &str = "token";

/// A single-line pattern rule
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Token kind assigned to matches
    pub kind: TokenKind,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Whether the pattern has a `token` capture group
    narrowed: bool,
}

impl PatternRule {
    /// Compile a rule from a regex source
    pub fn new(kind: TokenKind, pattern: &str) -> Result<Self> {
        if !kind.is_declarable() {
            return Err(CodesnapError::Message(format!(
                "{kind} spans cannot be declared by a rule"
            )));
        }
        let regex = Regex::new(pattern).map_err(|source| CodesnapError::InvalidPattern {
            kind: kind.name().to_string(),
            source,
        })?;
        Ok(Self::from_regex(kind, regex))
    }

    /// Wrap an already compiled regex
    pub fn from_regex(kind: TokenKind, pattern: Regex) -> Self {
        let narrowed = pattern.capture_names().any(|name| name == Some(TOKEN_GROUP));
        Self {
            kind,
            pattern,
            narrowed,
        }
    }

    /// All non-empty, non-overlapping matches in `text` as byte ranges.
    ///
    /// With a `token` group, the reported range is the group's, while the
    /// scan still resumes after the whole match.
    pub fn find_all(&self, text: &str) -> Vec<(usize, usize)> {
        if !self.narrowed {
            return self
                .pattern
                .find_iter(text)
                .map(|m| (m.start(), m.end()))
                .filter(|(start, end)| start < end)
                .collect();
        }

        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.name(TOKEN_GROUP))
            .map(|m| (m.start(), m.end()))
            .filter(|(start, end)| start < end)
            .collect()
    }
}
