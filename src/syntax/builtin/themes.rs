//! Built-in themes
//!
//! Color ids are Tailwind utility classes, as the snapshot web view
//! consumes them; terminal renderers map them by color family.

use std::collections::HashMap;

use crate::syntax::style::{ColorId, Theme};
use crate::syntax::tokens::TokenKind;

struct Palette {
    background: &'static str,
    text: &'static str,
    keyword: &'static str,
    string: &'static str,
    comment: &'static str,
    function: &'static str,
    number: &'static str,
    operator: &'static str,
    punctuation: &'static str,
}

impl Palette {
    fn into_theme(self, name: &str) -> Theme {
        let colors: HashMap<TokenKind, ColorId> = [
            (TokenKind::Keyword, self.keyword),
            (TokenKind::String, self.string),
            (TokenKind::Comment, self.comment),
            (TokenKind::Function, self.function),
            (TokenKind::Number, self.number),
            (TokenKind::Operator, self.operator),
            (TokenKind::Punctuation, self.punctuation),
        ]
        .into_iter()
        .map(|(kind, id)| (kind, ColorId::from(id)))
        .collect();

        Theme::new(name, colors, ColorId::from(self.text))
            .with_background(ColorId::from(self.background))
    }
}

pub fn monokai() -> Theme {
    Palette {
        background: "bg-gray-900",
        text: "text-gray-50",
        keyword: "text-purple-400",
        string: "text-green-400",
        comment: "text-gray-500",
        function: "text-blue-400",
        number: "text-orange-400",
        operator: "text-yellow-400",
        punctuation: "text-gray-400",
    }
    .into_theme("monokai")
}

pub fn github_light() -> Theme {
    Palette {
        background: "bg-white",
        text: "text-gray-900",
        keyword: "text-purple-600",
        string: "text-green-600",
        comment: "text-gray-500",
        function: "text-blue-600",
        number: "text-orange-600",
        operator: "text-yellow-600",
        punctuation: "text-gray-600",
    }
    .into_theme("github-light")
}

pub fn nord() -> Theme {
    Palette {
        background: "bg-slate-900",
        text: "text-blue-100",
        keyword: "text-blue-400",
        string: "text-green-400",
        comment: "text-gray-400",
        function: "text-cyan-400",
        number: "text-orange-400",
        operator: "text-blue-300",
        punctuation: "text-gray-400",
    }
    .into_theme("nord")
}
