//! Syntax highlighting
//!
//! Leaf first: token kinds and pattern rules, grammars and themes with
//! their registries, the line tokenizer, and the highlighter that ties
//! them together.

mod style;
mod tokens;
mod rules;
mod grammar;
mod tokenizer;
mod manager;
pub mod builtin;

pub use style::{display_name, ColorId, Theme, ThemeRegistry};
pub use tokens::TokenKind;
pub use rules::{PatternRule, TOKEN_GROUP};
pub use grammar::{Grammar, GrammarRegistry};
pub use tokenizer::{tokenize, Span};
pub use manager::{highlight_with, split_lines, Document, Highlighter, Line, StyledSpan};
