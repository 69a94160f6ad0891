//! Grammars and the grammar registry
//!
//! A grammar is a named, precedence-ordered list of pattern rules. The
//! registry owns every grammar for the life of the process and also maps
//! file extensions back to grammar names.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::rules::PatternRule;
use super::tokenizer::{self, Span};
use super::tokens::TokenKind;
use crate::error::{CodesnapError, Result};

/// A named, precedence-ordered set of pattern rules
#[derive(Debug, Clone)]
pub struct Grammar {
    /// Grammar name (e.g., "javascript", "python")
    pub name: String,
    /// File extensions (e.g., ["js", "mjs"])
    pub extensions: Vec<String>,
    /// Sample file name shown in a snapshot's title bar
    pub file_name: Option<String>,
    /// Rules in precedence order (earliest claims first)
    rules: Vec<PatternRule>,
}

impl Grammar {
    /// Create a grammar from rules in precedence order
    pub fn new(name: &str, rules: Vec<PatternRule>) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            file_name: None,
            rules,
        }
    }

    /// Compile a grammar from `(kind, regex)` pairs in precedence order
    pub fn from_patterns(name: &str, patterns: &[(TokenKind, &str)]) -> Result<Self> {
        let rules = patterns
            .iter()
            .map(|&(kind, pattern)| PatternRule::new(kind, pattern))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(name, rules))
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_string());
    }

    /// Builder: set the sample file name
    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = Some(file_name.to_string());
        self
    }

    /// Rules in precedence order
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Tokenize a single line with this grammar
    pub fn tokenize(&self, line: &str) -> Vec<Span> {
        tokenizer::tokenize(line, self)
    }
}

/// Registry of named grammars
#[derive(Debug, Default)]
pub struct GrammarRegistry {
    grammars: HashMap<String, Grammar>,
    /// Extension to grammar name mapping
    extension_map: HashMap<String, String>,
}

impl GrammarRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in grammars
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for grammar in super::builtin::all_grammars() {
            registry.add(grammar);
        }
        registry
    }

    /// Register `rules` under `name`, replacing any earlier grammar
    pub fn register(&mut self, name: &str, rules: Vec<PatternRule>) {
        self.add(Grammar::new(name, rules));
    }

    /// Register a fully built grammar, replacing any earlier one of the same name
    pub fn add(&mut self, grammar: Grammar) {
        if let Some(previous) = self.grammars.remove(&grammar.name) {
            self.extension_map.retain(|_, name| *name != previous.name);
        }
        for ext in &grammar.extensions {
            self.extension_map.insert(ext.to_lowercase(), grammar.name.clone());
        }
        debug!(grammar = %grammar.name, rules = grammar.rules.len(), "registered grammar");
        self.grammars.insert(grammar.name.clone(), grammar);
    }

    /// Look up a grammar by name
    pub fn get(&self, name: &str) -> Result<&Grammar> {
        self.grammars
            .get(name)
            .ok_or_else(|| CodesnapError::UnknownGrammar(name.to_string()))
    }

    /// Detect a grammar name from a file path's extension
    pub fn detect(&self, path: &Path) -> Option<&str> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|s| s.as_str())
    }

    /// Registered grammar names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.grammars.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}
