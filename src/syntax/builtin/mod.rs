//! Built-in grammars and themes
//!
//! The grammars share one precedence order: string, comment, keyword,
//! function, number, operator, punctuation. Strings and comments come
//! first so keywords inside them cannot break them up.

mod javascript;
mod python;
mod themes;

use tracing::warn;

use super::grammar::Grammar;
use super::rules::PatternRule;
use super::style::Theme;
use super::tokens::TokenKind;

pub use javascript::javascript;
pub use python::python;

/// Double, single and backtick quoted strings with backslash escapes
pub(crate) const QUOTED_STRING: &str =
    r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`(?:[^`\\]|\\.)*`"#;

/// Identifier directly followed by an opening paren
pub(crate) const CALLED_FUNCTION: &str = r"\b(?P<token>\w+)\s*\(";

pub(crate) const NUMBER: &str = r"\b\d+\b";

/// Maximal runs of operator characters, so `===` stays one token
pub(crate) const OPERATOR: &str = r"[+\-*/%=<>!&|^~?:]+";

pub(crate) const PUNCTUATION: &str = r"[{}\[\]();,]";

/// Get all built-in grammars
pub fn all_grammars() -> Vec<Grammar> {
    vec![javascript(), python()]
}

/// Get all built-in themes
pub fn all_themes() -> Vec<Theme> {
    vec![themes::monokai(), themes::github_light(), themes::nord()]
}

/// Compile a built-in rule, logging and skipping it if the regex is bad
fn push_rule(rules: &mut Vec<PatternRule>, kind: TokenKind, pattern: &str) {
    match PatternRule::new(kind, pattern) {
        Ok(rule) => rules.push(rule),
        Err(err) => warn!(%kind, error = %err, "skipping built-in rule"),
    }
}
