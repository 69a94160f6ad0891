//! Terminal output using crossterm
//!
//! Renders a highlighted document to any writer: either colored through
//! crossterm, or as a plain per-span listing for scripts and diffs.

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::{ColorId, Document, TokenKind};

/// Writer wrapper for highlighted output
pub struct Terminal<W: Write> {
    out: W,
}

impl<W: Write> Terminal<W> {
    /// Wrap a writer (usually stdout)
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the wrapper, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a document with terminal colors
    pub fn write_document(&mut self, document: &Document) -> Result<()> {
        for line in &document.lines {
            for span in &line.spans {
                if span.kind == TokenKind::Comment {
                    queue!(self.out, SetAttribute(Attribute::Italic))?;
                }
                match terminal_color(&span.color) {
                    Some(color) => queue!(self.out, SetForegroundColor(color), Print(&span.text))?,
                    None => queue!(self.out, Print(&span.text))?,
                }
                queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
            }
            queue!(self.out, Print('\n'))?;
        }
        self.flush()
    }

    /// Write one row per span: `line:offset kind color text`
    pub fn write_dump(&mut self, document: &Document) -> Result<()> {
        for (idx, line) in document.lines.iter().enumerate() {
            for span in &line.spans {
                writeln!(
                    self.out,
                    "{}:{}\t{}\t{}\t{:?}",
                    idx + 1,
                    span.start,
                    span.kind,
                    span.color,
                    span.text
                )?;
            }
        }
        self.flush()
    }

    /// Write a line of text as-is
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Flush output buffer
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Map a color id to a terminal color.
///
/// Accepts `#rrggbb` and Tailwind-style ids (`text-purple-400`,
/// `bg-slate-900`); shades of 500 and up use the dark variant.
pub fn terminal_color(id: &ColorId) -> Option<Color> {
    let id = id.as_str();
    if let Some(hex) = id.strip_prefix('#') {
        return parse_hex(hex);
    }

    let mut parts = id.split('-');
    let mut family = parts.next()?;
    if family == "text" || family == "bg" {
        family = parts.next()?;
    }
    let dark = parts
        .next()
        .and_then(|shade| shade.parse::<u16>().ok())
        .is_some_and(|shade| shade >= 500);
    let pick = |light: Color, dark_variant: Color| if dark { dark_variant } else { light };

    let color = match family {
        "black" => Color::Black,
        "white" => Color::White,
        "gray" | "slate" | "zinc" | "neutral" | "stone" => pick(Color::White, Color::DarkGrey),
        "red" | "rose" => pick(Color::Red, Color::DarkRed),
        "orange" | "amber" => Color::DarkYellow,
        "yellow" => pick(Color::Yellow, Color::DarkYellow),
        "green" | "emerald" | "lime" => pick(Color::Green, Color::DarkGreen),
        "cyan" | "teal" => pick(Color::Cyan, Color::DarkCyan),
        "blue" | "sky" | "indigo" => pick(Color::Blue, Color::DarkBlue),
        "purple" | "violet" | "fuchsia" | "pink" => pick(Color::Magenta, Color::DarkMagenta),
        _ => return None,
    };
    Some(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Highlighter;

    #[test]
    fn test_terminal_color() {
        assert_eq!(terminal_color(&"text-purple-400".into()), Some(Color::Magenta));
        assert_eq!(terminal_color(&"text-gray-500".into()), Some(Color::DarkGrey));
        assert_eq!(terminal_color(&"bg-white".into()), Some(Color::White));
        assert_eq!(terminal_color(&"green".into()), Some(Color::Green));
        assert_eq!(
            terminal_color(&"#ff8000".into()),
            Some(Color::Rgb { r: 255, g: 128, b: 0 })
        );
        assert_eq!(terminal_color(&"#ff80".into()), None);
        assert_eq!(terminal_color(&"text-chartreuse-400".into()), None);
    }

    #[test]
    fn test_write_dump() {
        let highlighter = Highlighter::with_builtins();
        let doc = highlighter.highlight("x = 1\n", "python", "monokai").unwrap();

        let mut term = Terminal::new(Vec::new());
        term.write_dump(&doc).unwrap();
        let out = String::from_utf8(term.into_inner()).unwrap();

        assert_eq!(
            out,
            "1:0\tplain\ttext-gray-50\t\"x \"\n\
             1:2\toperator\ttext-yellow-400\t\"=\"\n\
             1:3\tplain\ttext-gray-50\t\" \"\n\
             1:4\tnumber\ttext-orange-400\t\"1\"\n"
        );
    }

    #[test]
    fn test_write_document_keeps_text() {
        let highlighter = Highlighter::with_builtins();
        let doc = highlighter.highlight("let a = 'b';\n// c", "javascript", "nord").unwrap();

        let mut term = Terminal::new(Vec::new());
        term.write_document(&doc).unwrap();
        let out = String::from_utf8(term.into_inner()).unwrap();

        assert!(out.contains("let"));
        assert!(out.contains("'b'"));
        assert!(out.contains("// c"));
        assert_eq!(out.matches('\n').count(), 2);
        assert!(out.contains('\x1b'));
    }
}
