//! codesnap - syntax highlighting for code snapshots
//!
//! Splits source text into lines and partitions every line into typed,
//! colored spans using a precedence-ordered grammar of regex rules and a
//! theme. Rendering those spans is left to the caller.
//!
//! ```
//! use codesnap::{Highlighter, TokenKind};
//!
//! let highlighter = Highlighter::with_builtins();
//! let doc = highlighter.highlight("const x = 1; // hi", "javascript", "monokai")?;
//! assert_eq!(doc.lines[0].spans[0].kind, TokenKind::Keyword);
//! # Ok::<(), codesnap::CodesnapError>(())
//! ```

pub mod config;
pub mod error;
pub mod syntax;
pub mod terminal;

pub use config::Config;
pub use error::{CodesnapError, Result};
pub use syntax::{
    tokenize, ColorId, Document, Grammar, GrammarRegistry, Highlighter, Line, PatternRule, Span,
    StyledSpan, Theme, ThemeRegistry, TokenKind,
};
