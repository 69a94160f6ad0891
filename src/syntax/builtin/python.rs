//! Python grammar

use super::{push_rule, CALLED_FUNCTION, NUMBER, OPERATOR, PUNCTUATION, QUOTED_STRING};
use crate::syntax::grammar::Grammar;
use crate::syntax::tokens::TokenKind;

const KEYWORDS: &str =
    r"\b(def|class|if|else|elif|for|while|try|except|import|from|as|return|True|False|None)\b";

/// Create the Python grammar
pub fn python() -> Grammar {
    let mut rules = Vec::new();
    push_rule(&mut rules, TokenKind::String, QUOTED_STRING);
    push_rule(&mut rules, TokenKind::Comment, r"#.*$");
    push_rule(&mut rules, TokenKind::Keyword, KEYWORDS);
    push_rule(&mut rules, TokenKind::Function, CALLED_FUNCTION);
    push_rule(&mut rules, TokenKind::Number, NUMBER);
    push_rule(&mut rules, TokenKind::Operator, OPERATOR);
    push_rule(&mut rules, TokenKind::Punctuation, PUNCTUATION);

    let mut grammar = Grammar::new("python", rules).with_file_name("main.py");
    for ext in ["py", "pyw", "pyi"] {
        grammar.add_extension(ext);
    }
    grammar
}
