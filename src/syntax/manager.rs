//! Highlighter
//!
//! Owns the grammar and theme registries and turns a whole source text
//! into a document of colored spans. Nothing is cached between calls:
//! every `highlight` recomputes every line from scratch.

use std::collections::HashMap;

use tracing::debug;

use super::grammar::{Grammar, GrammarRegistry};
use super::rules::PatternRule;
use super::style::{ColorId, Theme, ThemeRegistry};
use super::tokenizer::Span;
use super::tokens::TokenKind;
use crate::error::Result;

/// A span with its resolved theme color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    /// Exact text of the span
    pub text: String,
    /// Token kind
    pub kind: TokenKind,
    /// Byte offset within the line
    pub start: usize,
    /// Resolved color
    pub color: ColorId,
}

impl StyledSpan {
    fn from_span(span: Span, theme: &Theme) -> Self {
        Self {
            color: theme.color(span.kind).clone(),
            text: span.text,
            kind: span.kind,
            start: span.start,
        }
    }
}

/// One highlighted line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<StyledSpan>,
}

impl Line {
    /// Reassemble the line's text
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Check if the line has no spans
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// A highlighted source text, one entry per source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<Line>,
}

impl Document {
    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split source text into physical lines.
///
/// Splits on `\n` exactly as `str::split` does, so a trailing newline
/// leaves a final empty line and empty input gives one empty line. A `\r`
/// just before a `\n` is part of the line break; any other `\r` is text.
pub fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(source);
    std::iter::from_fn(move || {
        let text = rest?;
        match text.split_once('\n') {
            Some((line, tail)) => {
                rest = Some(tail);
                Some(line.strip_suffix('\r').unwrap_or(line))
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}

/// Main syntax highlighting entry point
#[derive(Debug, Default)]
pub struct Highlighter {
    grammars: GrammarRegistry,
    themes: ThemeRegistry,
}

impl Highlighter {
    /// Create a highlighter with no grammars or themes
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a highlighter with the built-in grammars and themes
    pub fn with_builtins() -> Self {
        Self {
            grammars: GrammarRegistry::with_builtins(),
            themes: ThemeRegistry::with_builtins(),
        }
    }

    /// Register a grammar, replacing any earlier one of the same name
    pub fn register_grammar(&mut self, name: &str, rules: Vec<PatternRule>) {
        self.grammars.register(name, rules);
    }

    /// Register a theme, replacing any earlier one of the same name
    pub fn register_theme(&mut self, name: &str, colors: HashMap<TokenKind, ColorId>, fallback: ColorId) {
        self.themes.register(name, colors, fallback);
    }

    /// The grammar registry
    pub fn grammars(&self) -> &GrammarRegistry {
        &self.grammars
    }

    /// Mutable access to the grammar registry
    pub fn grammars_mut(&mut self) -> &mut GrammarRegistry {
        &mut self.grammars
    }

    /// The theme registry
    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    /// Mutable access to the theme registry
    pub fn themes_mut(&mut self) -> &mut ThemeRegistry {
        &mut self.themes
    }

    /// Highlight a source text with a named grammar and theme
    pub fn highlight(&self, source: &str, grammar: &str, theme: &str) -> Result<Document> {
        let grammar = self.grammars.get(grammar)?;
        let theme = self.themes.get(theme)?;
        let document = highlight_with(source, grammar, theme);
        debug!(
            grammar = %grammar.name,
            theme = %theme.name,
            lines = document.len(),
            "highlighted source"
        );
        Ok(document)
    }
}

/// Highlight a source text with an already resolved grammar and theme
pub fn highlight_with(source: &str, grammar: &Grammar, theme: &Theme) -> Document {
    let lines = split_lines(source)
        .map(|text| Line {
            spans: grammar
                .tokenize(text)
                .into_iter()
                .map(|span| StyledSpan::from_span(span, theme))
                .collect(),
        })
        .collect();
    Document { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodesnapError;

    const SAMPLE: &str = "function helloWorld() {\n  console.log(\"Hello, CodeSnap!\");\n}";

    #[test]
    fn test_highlight_sample() {
        let highlighter = Highlighter::with_builtins();
        let doc = highlighter.highlight(SAMPLE, "javascript", "monokai").unwrap();

        assert_eq!(doc.len(), 3);
        let first = &doc.lines[0].spans[0];
        assert_eq!(first.text, "function");
        assert_eq!(first.kind, TokenKind::Keyword);
        assert_eq!(first.color.as_str(), "text-purple-400");

        let texts: Vec<String> = doc.lines.iter().map(Line::text).collect();
        assert_eq!(texts.join("\n"), SAMPLE);
    }

    #[test]
    fn test_plain_uses_fallback() {
        let highlighter = Highlighter::with_builtins();
        let doc = highlighter.highlight("x", "python", "github-light").unwrap();
        let span = &doc.lines[0].spans[0];
        assert_eq!(span.kind, TokenKind::Plain);
        assert_eq!(span.color.as_str(), "text-gray-900");
    }

    #[test]
    fn test_unmapped_kind_uses_fallback() {
        let mut highlighter = Highlighter::with_builtins();
        let mut colors = HashMap::new();
        colors.insert(TokenKind::Keyword, ColorId::from("red"));
        highlighter.register_theme("sparse", colors, ColorId::from("grey"));

        let doc = highlighter.highlight("return 42", "javascript", "sparse").unwrap();
        let colors: Vec<&str> = doc.lines[0].spans.iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors, vec!["red", "grey", "grey"]);
    }

    #[test]
    fn test_empty_source() {
        let highlighter = Highlighter::with_builtins();
        let doc = highlighter.highlight("", "javascript", "nord").unwrap();
        assert_eq!(doc.len(), 1);
        assert!(doc.lines[0].is_empty());
    }

    #[test]
    fn test_line_splitting() {
        assert_eq!(split_lines("a\nb").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(split_lines("a\n").collect::<Vec<_>>(), vec!["a", ""]);
        assert_eq!(split_lines("a\r\nb\r\n").collect::<Vec<_>>(), vec!["a", "b", ""]);
        assert_eq!(split_lines("\n\n").collect::<Vec<_>>(), vec!["", "", ""]);
        assert_eq!(split_lines("a\r").collect::<Vec<_>>(), vec!["a\r"]);
        assert_eq!(split_lines("a\rb\r\nc\r").collect::<Vec<_>>(), vec!["a\rb", "c\r"]);
        assert_eq!(split_lines("").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_trailing_carriage_return_kept() {
        let highlighter = Highlighter::with_builtins();
        let doc = highlighter.highlight("x\r", "javascript", "monokai").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.lines[0].text(), "x\r");
    }

    #[test]
    fn test_highlight_is_repeatable() {
        let highlighter = Highlighter::with_builtins();
        let first = highlighter.highlight(SAMPLE, "javascript", "nord").unwrap();
        let second = highlighter.highlight(SAMPLE, "javascript", "nord").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_grammar_leaves_registry_intact() {
        let highlighter = Highlighter::with_builtins();
        let err = highlighter.highlight(SAMPLE, "fortran", "monokai").unwrap_err();
        assert!(matches!(err, CodesnapError::UnknownGrammar(ref name) if name == "fortran"));

        assert!(highlighter.grammars().get("python").is_ok());
        assert!(highlighter.highlight("x = 1", "python", "monokai").is_ok());
    }

    #[test]
    fn test_unknown_theme() {
        let highlighter = Highlighter::with_builtins();
        let err = highlighter.highlight(SAMPLE, "javascript", "dracula").unwrap_err();
        assert!(matches!(err, CodesnapError::UnknownTheme(ref name) if name == "dracula"));
    }

    #[test]
    fn test_register_grammar() {
        let mut highlighter = Highlighter::new();
        highlighter.register_grammar(
            "ini",
            vec![
                PatternRule::new(TokenKind::Comment, r";.*$").unwrap(),
                PatternRule::new(TokenKind::Punctuation, r"[\[\]=]").unwrap(),
            ],
        );
        highlighter.register_theme("mono", HashMap::new(), ColorId::from("ink"));

        let doc = highlighter.highlight("[core]\nkey=1 ; note", "ini", "mono").unwrap();
        assert_eq!(doc.lines[0].spans.len(), 3);
        assert_eq!(doc.lines[1].spans.last().map(|s| s.kind), Some(TokenKind::Comment));
        assert!(doc.lines.iter().flat_map(|l| &l.spans).all(|s| s.color.as_str() == "ink"));
    }
}
