//! codesnap - highlight a source file in the terminal

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use codesnap::syntax::display_name;
use codesnap::terminal::Terminal;
use codesnap::{CodesnapError, Config, Highlighter, Result};

/// Command-line options
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    language: Option<String>,
    theme: Option<String>,
    config: Option<PathBuf>,
    file: Option<PathBuf>,
    list: bool,
    dump: bool,
    help: bool,
    version: bool,
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CODESNAP_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    if options.help {
        print_usage();
        return Ok(());
    }
    if options.version {
        print_version();
        return Ok(());
    }

    let config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut highlighter = Highlighter::with_builtins();
    config.apply(&mut highlighter);

    let mut term = Terminal::new(io::stdout().lock());

    if options.list {
        return list(&highlighter, &mut term);
    }

    let source = match &options.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let grammar = resolve_grammar(&highlighter, &options, &config);
    let theme = options.theme.as_deref().unwrap_or(&config.theme);
    debug!(grammar = %grammar, theme = %theme, "highlighting");

    let document = highlighter.highlight(&source, &grammar, theme)?;
    if options.dump {
        term.write_dump(&document)
    } else {
        term.write_document(&document)
    }
}

/// Explicit language, then the file's extension, then the configured default
fn resolve_grammar(highlighter: &Highlighter, options: &Options, config: &Config) -> String {
    if let Some(language) = &options.language {
        return language.clone();
    }
    if let Some(path) = &options.file {
        match highlighter.grammars().detect(path) {
            Some(name) => return name.to_string(),
            None => warn!(path = %path.display(), "no grammar for file, using default"),
        }
    }
    config.grammar.clone()
}

fn list<W: io::Write>(highlighter: &Highlighter, term: &mut Terminal<W>) -> Result<()> {
    term.write_line("Grammars:")?;
    for name in highlighter.grammars().names() {
        let grammar = highlighter.grammars().get(name)?;
        let sample = grammar.file_name.as_deref().unwrap_or("-");
        term.write_line(&format!("  {:<14} {:<16} {}", name, display_name(name), sample))?;
    }
    term.write_line("Themes:")?;
    for name in highlighter.themes().names() {
        term.write_line(&format!("  {:<14} {}", name, display_name(name)))?;
    }
    term.flush()
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => options.help = true,
            "--version" | "-V" => options.version = true,
            "--list" => options.list = true,
            "--dump" => options.dump = true,
            "--language" | "-l" => options.language = Some(value(arg, iter.next())?),
            "--theme" | "-t" => options.theme = Some(value(arg, iter.next())?),
            "--config" | "-c" => options.config = Some(PathBuf::from(value(arg, iter.next())?)),
            other if other.starts_with('-') && other != "-" => {
                return Err(CodesnapError::Message(format!("unknown option: {other}")));
            }
            "-" => options.file = None,
            path => options.file = Some(Path::new(path).to_path_buf()),
        }
    }

    Ok(options)
}

fn value(flag: &str, next: Option<&String>) -> Result<String> {
    next.cloned()
        .ok_or_else(|| CodesnapError::Message(format!("{flag} requires a value")))
}

fn print_usage() {
    println!("codesnap {} - syntax highlighting for code snapshots", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: codesnap [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE, or standard input when FILE is omitted or '-'.");
    println!();
    println!("Options:");
    println!("  -l, --language NAME  Grammar to use (default: detect from FILE)");
    println!("  -t, --theme NAME     Theme to use (default: monokai)");
    println!("  -c, --config PATH    Config file (default: ~/.codesnap.toml)");
    println!("      --dump           Print one row per span instead of colors");
    println!("      --list           List grammars and themes");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Set CODESNAP_LOG=debug for diagnostic output on stderr.");
}

fn print_version() {
    println!("codesnap {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(&args(&["-l", "python", "--theme", "nord", "--dump", "main.py"])).unwrap();
        assert_eq!(options.language.as_deref(), Some("python"));
        assert_eq!(options.theme.as_deref(), Some("nord"));
        assert!(options.dump);
        assert_eq!(options.file, Some(PathBuf::from("main.py")));
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--theme"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert_eq!(parse_args(&args(&["-"])).unwrap().file, None);
    }

    #[test]
    fn test_resolve_grammar() {
        let highlighter = Highlighter::with_builtins();
        let config = Config::default();

        let detected = Options {
            file: Some(PathBuf::from("main.py")),
            ..Default::default()
        };
        assert_eq!(resolve_grammar(&highlighter, &detected, &config), "python");

        let explicit = Options {
            language: Some("javascript".to_string()),
            file: Some(PathBuf::from("main.py")),
            ..Default::default()
        };
        assert_eq!(resolve_grammar(&highlighter, &explicit, &config), "javascript");

        let unknown = Options {
            file: Some(PathBuf::from("notes.txt")),
            ..Default::default()
        };
        assert_eq!(resolve_grammar(&highlighter, &unknown, &config), "javascript");
    }
}
