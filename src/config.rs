//! Configuration file support
//!
//! Loads settings from ~/.codesnap.toml (or %USERPROFILE%\.codesnap.toml on
//! Windows). A missing file means defaults; a malformed one is an error.
//!
//! Example:
//! ```text
//! grammar = "python"
//! theme = "nord"
//!
//! [themes.paper]
//! fallback = "text-black"
//! background = "bg-stone-100"
//! keyword = "text-red-700"
//! comment = "text-stone-400"
//!
//! [grammars.ini]
//! extensions = ["ini", "cfg"]
//! rules = [
//!     ["comment", ";.*$"],
//!     ["punctuation", "[\\[\\]=]"],
//! ]
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::{debug, info};

use crate::error::{CodesnapError, Result};
use crate::syntax::{ColorId, Grammar, Highlighter, PatternRule, Theme, TokenKind};

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Grammar used when none is given or detected
    pub grammar: String,
    /// Theme used when none is given
    pub theme: String,
    /// User-defined themes
    pub themes: Vec<Theme>,
    /// User-defined grammars
    pub grammars: Vec<Grammar>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grammar: "javascript".to_string(),
            theme: "monokai".to_string(),
            themes: Vec::new(),
            grammars: Vec::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".codesnap.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".codesnap.toml"))
        }
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents, path)?;
        info!(
            path = %path.display(),
            grammars = config.grammars.len(),
            themes = config.themes.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Parse config file contents
    fn parse(contents: &str, path: &Path) -> Result<Self> {
        let table = contents.parse::<Table>().map_err(|source| CodesnapError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Config::default();

        if let Some(name) = table.get("grammar").and_then(Value::as_str) {
            config.grammar = name.to_string();
        }
        if let Some(name) = table.get("theme").and_then(Value::as_str) {
            config.theme = name.to_string();
        }

        if let Some(themes) = table.get("themes").and_then(Value::as_table) {
            for (name, value) in themes {
                config.themes.push(parse_theme(name, value)?);
            }
        }

        if let Some(grammars) = table.get("grammars").and_then(Value::as_table) {
            for (name, value) in grammars {
                config.grammars.push(parse_grammar(name, value)?);
            }
        }

        Ok(config)
    }

    /// Register the user-defined grammars and themes
    pub fn apply(&self, highlighter: &mut Highlighter) {
        for grammar in &self.grammars {
            highlighter.grammars_mut().add(grammar.clone());
        }
        for theme in &self.themes {
            highlighter.themes_mut().add(theme.clone());
        }
    }
}

fn invalid(section: &str, name: &str, detail: &str) -> CodesnapError {
    CodesnapError::Message(format!("[{section}.{name}]: {detail}"))
}

fn parse_theme(name: &str, value: &Value) -> Result<Theme> {
    let entries = value
        .as_table()
        .ok_or_else(|| invalid("themes", name, "expected a table"))?;

    let mut fallback = None;
    let mut background = None;
    let mut colors = HashMap::new();

    for (key, value) in entries {
        let color = value
            .as_str()
            .map(ColorId::from)
            .ok_or_else(|| invalid("themes", name, &format!("{key} must be a string")))?;
        match key.as_str() {
            "fallback" => fallback = Some(color),
            "background" => background = Some(color),
            "plain" => {
                return Err(invalid(
                    "themes",
                    name,
                    "plain text always uses the fallback color",
                ));
            }
            other => {
                let kind = TokenKind::from_name(other)
                    .ok_or_else(|| CodesnapError::UnknownTokenKind(other.to_string()))?;
                colors.insert(kind, color);
            }
        }
    }

    let fallback = fallback.ok_or_else(|| invalid("themes", name, "missing fallback"))?;
    let mut theme = Theme::new(name, colors, fallback);
    if let Some(background) = background {
        theme = theme.with_background(background);
    }
    debug!(theme = name, "parsed theme from config");
    Ok(theme)
}

fn parse_grammar(name: &str, value: &Value) -> Result<Grammar> {
    let entries = value
        .as_table()
        .ok_or_else(|| invalid("grammars", name, "expected a table"))?;

    let rules = entries
        .get("rules")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("grammars", name, "missing rules array"))?
        .iter()
        .map(|rule| parse_rule(name, rule))
        .collect::<Result<Vec<_>>>()?;

    let mut grammar = Grammar::new(name, rules);

    if let Some(extensions) = entries.get("extensions") {
        let extensions = extensions
            .as_array()
            .ok_or_else(|| invalid("grammars", name, "extensions must be an array"))?;
        for ext in extensions {
            let ext = ext
                .as_str()
                .ok_or_else(|| invalid("grammars", name, "extensions must be strings"))?;
            grammar.add_extension(ext);
        }
    }
    if let Some(file_name) = entries.get("file-name").and_then(Value::as_str) {
        grammar = grammar.with_file_name(file_name);
    }

    debug!(grammar = name, rules = grammar.rules().len(), "parsed grammar from config");
    Ok(grammar)
}

/// A rule is a `[kind, regex]` pair
fn parse_rule(grammar: &str, value: &Value) -> Result<PatternRule> {
    let pair = value
        .as_array()
        .filter(|pair| pair.len() == 2)
        .ok_or_else(|| invalid("grammars", grammar, "rules must be [kind, regex] pairs"))?;

    let (kind, pattern) = match (pair[0].as_str(), pair[1].as_str()) {
        (Some(kind), Some(pattern)) => (kind, pattern),
        _ => return Err(invalid("grammars", grammar, "rules must be [kind, regex] pairs")),
    };

    let kind =
        TokenKind::from_name(kind).ok_or_else(|| CodesnapError::UnknownTokenKind(kind.to_string()))?;
    PatternRule::new(kind, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<Config> {
        Config::parse(contents, Path::new("test.toml"))
    }

    #[test]
    fn test_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.grammar, "javascript");
        assert_eq!(config.theme, "monokai");
        assert!(config.themes.is_empty());
        assert!(config.grammars.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let contents = r#"
grammar = "ini"
theme = "paper"

[themes.paper]
fallback = "text-black"
background = "bg-stone-100"
comment = "text-stone-400"

[grammars.ini]
extensions = ["ini", "cfg"]
file-name = "setup.cfg"
rules = [
    ["comment", ";.*$"],
    ["punctuation", "[\\[\\]=]"],
]
        "#;

        let config = parse(contents).unwrap();
        assert_eq!(config.grammar, "ini");
        assert_eq!(config.theme, "paper");

        let theme = &config.themes[0];
        assert_eq!(theme.color(TokenKind::Comment).as_str(), "text-stone-400");
        assert_eq!(theme.color(TokenKind::Keyword).as_str(), "text-black");
        assert_eq!(theme.background.as_ref().map(ColorId::as_str), Some("bg-stone-100"));

        let grammar = &config.grammars[0];
        assert_eq!(grammar.rules().len(), 2);
        assert_eq!(grammar.extensions, vec!["ini", "cfg"]);
        assert_eq!(grammar.file_name.as_deref(), Some("setup.cfg"));
    }

    #[test]
    fn test_apply_registers_definitions() {
        let contents = r#"
[themes.mono]
fallback = "ink"

[grammars.ini]
extensions = ["ini"]
rules = [["comment", ";.*$"]]
        "#;
        let config = parse(contents).unwrap();
        let mut highlighter = Highlighter::with_builtins();
        config.apply(&mut highlighter);

        assert_eq!(highlighter.grammars().detect(Path::new("a.ini")), Some("ini"));
        let doc = highlighter.highlight("x ; y", "ini", "mono").unwrap();
        assert_eq!(doc.lines[0].spans[1].kind, TokenKind::Comment);
        assert!(highlighter.themes().get("monokai").is_ok());
    }

    #[test]
    fn test_malformed_toml() {
        let err = parse("theme = ").unwrap_err();
        assert!(matches!(err, CodesnapError::Config { .. }));
    }

    #[test]
    fn test_theme_without_fallback() {
        assert!(parse("[themes.bad]\nkeyword = \"red\"").is_err());
    }

    #[test]
    fn test_unknown_kind() {
        let err = parse("[themes.bad]\nfallback = \"x\"\nvariable = \"red\"").unwrap_err();
        assert!(matches!(err, CodesnapError::UnknownTokenKind(ref kind) if kind == "variable"));

        let err = parse("[grammars.bad]\nrules = [[\"plain\", \"x\"]]").unwrap_err();
        assert!(matches!(err, CodesnapError::Message(_)));
    }

    #[test]
    fn test_plain_theme_key_rejected() {
        let err = parse("[themes.bad]\nfallback = \"x\"\nplain = \"red\"").unwrap_err();
        assert!(matches!(err, CodesnapError::Message(ref msg) if msg.contains("plain")));
    }

    #[test]
    fn test_bad_extensions() {
        let rules = "rules = [[\"comment\", \";.*$\"]]";
        assert!(parse(&format!("[grammars.bad]\n{rules}\nextensions = [\"ini\", 3]")).is_err());
        assert!(parse(&format!("[grammars.bad]\n{rules}\nextensions = \"ini\"")).is_err());
        assert!(parse(&format!("[grammars.ok]\n{rules}\nextensions = [\"ini\"]")).is_ok());
    }

    #[test]
    fn test_bad_rule_shape() {
        assert!(parse("[grammars.bad]\nrules = [[\"comment\"]]").is_err());
        assert!(parse("[grammars.bad]\nrules = [[\"comment\", \"(\"]]").is_err());
        assert!(parse("[grammars.bad]\nextensions = []").is_err());
    }
}
