//! Token kinds for syntax highlighting
//!
//! The set is closed: grammars declare rules for every kind except
//! `Plain`, which the tokenizer produces for text no rule claimed.

use std::fmt;

/// Lexical category a span belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Language keywords (const, def, return, ...)
    Keyword,
    /// Quoted string literals
    String,
    /// Line comments
    Comment,
    /// Identifiers in call position
    Function,
    /// Numeric literals
    Number,
    /// Runs of operator characters
    Operator,
    /// Brackets, separators, terminators
    Punctuation,
    /// Unclaimed text
    Plain,
}

impl TokenKind {
    /// Every kind
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Keyword,
        TokenKind::String,
        TokenKind::Comment,
        TokenKind::Function,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Plain,
    ];

    /// Lowercase name, as used in themes and config files
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Function => "function",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Plain => "plain",
        }
    }

    /// Parse a kind from its name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "keyword" => Some(TokenKind::Keyword),
            "string" => Some(TokenKind::String),
            "comment" => Some(TokenKind::Comment),
            "function" => Some(TokenKind::Function),
            "number" => Some(TokenKind::Number),
            "operator" => Some(TokenKind::Operator),
            "punctuation" => Some(TokenKind::Punctuation),
            "plain" => Some(TokenKind::Plain),
            _ => None,
        }
    }

    /// Whether a grammar may declare a rule for this kind
    pub fn is_declarable(&self) -> bool {
        *self != TokenKind::Plain
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
