//! JavaScript grammar

use super::{push_rule, CALLED_FUNCTION, NUMBER, OPERATOR, PUNCTUATION, QUOTED_STRING};
use crate::syntax::grammar::Grammar;
use crate::syntax::tokens::TokenKind;

const KEYWORDS: &str = r"\b(const|let|var|function|return|if|else|for|while|do|class|extends|import|export|default|null|undefined|true|false)\b";

/// Create the JavaScript grammar
pub fn javascript() -> Grammar {
    let mut rules = Vec::new();
    push_rule(&mut rules, TokenKind::String, QUOTED_STRING);
    push_rule(&mut rules, TokenKind::Comment, r"//.*$");
    push_rule(&mut rules, TokenKind::Keyword, KEYWORDS);
    push_rule(&mut rules, TokenKind::Function, CALLED_FUNCTION);
    push_rule(&mut rules, TokenKind::Number, NUMBER);
    push_rule(&mut rules, TokenKind::Operator, OPERATOR);
    push_rule(&mut rules, TokenKind::Punctuation, PUNCTUATION);

    let mut grammar = Grammar::new("javascript", rules).with_file_name("script.js");
    for ext in ["js", "mjs", "cjs", "jsx"] {
        grammar.add_extension(ext);
    }
    grammar
}
