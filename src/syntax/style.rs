//! Themes and the theme registry
//!
//! A theme maps token kinds to opaque color identifiers. Kinds the theme
//! leaves out, and `Plain` always, resolve to the theme's fallback color.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use super::tokens::TokenKind;
use crate::error::{CodesnapError, Result};

/// Opaque color identifier handed to renderers (e.g. "text-purple-400")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorId(String);

impl ColorId {
    /// Create a color identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A named color scheme for token kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name (e.g., "monokai")
    pub name: String,
    /// Per-kind colors
    colors: HashMap<TokenKind, ColorId>,
    /// Color for unmapped kinds and plain text
    pub fallback: ColorId,
    /// Snapshot background, for renderers that draw one
    pub background: Option<ColorId>,
}

impl Theme {
    /// Create a theme from a kind-to-color map and a fallback
    pub fn new(name: &str, colors: HashMap<TokenKind, ColorId>, fallback: ColorId) -> Self {
        Self {
            name: name.to_string(),
            colors,
            fallback,
            background: None,
        }
    }

    /// Builder: set the background color
    pub fn with_background(mut self, background: ColorId) -> Self {
        self.background = Some(background);
        self
    }

    /// Resolve the color for a token kind
    pub fn color(&self, kind: TokenKind) -> &ColorId {
        if kind == TokenKind::Plain {
            return &self.fallback;
        }
        self.colors.get(&kind).unwrap_or(&self.fallback)
    }
}

/// Registry of named themes
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
}

impl ThemeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in themes
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for theme in super::builtin::all_themes() {
            registry.add(theme);
        }
        registry
    }

    /// Register a theme under `name`, replacing any earlier one
    pub fn register(&mut self, name: &str, colors: HashMap<TokenKind, ColorId>, fallback: ColorId) {
        self.add(Theme::new(name, colors, fallback));
    }

    /// Register a fully built theme
    pub fn add(&mut self, theme: Theme) {
        debug!(theme = %theme.name, "registered theme");
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Look up a theme by name
    pub fn get(&self, name: &str) -> Result<&Theme> {
        self.themes
            .get(name)
            .ok_or_else(|| CodesnapError::UnknownTheme(name.to_string()))
    }

    /// Registered theme names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

/// Picker label for a registry name ("github-light" -> "Github Light")
pub fn display_name(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
