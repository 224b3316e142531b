//! Markdown output for the terminal.
//!
//! Core renderers produce markdown; this module decides whether it reaches the
//! terminal styled through termimad or as raw text for pipes and `--no-color`.

use termimad::{MadSkin, crossterm::style::Color};

/// Destination style for command output.
pub enum TerminalRenderer {
    /// Styled with a termimad skin
    Styled(Box<MadSkin>),
    /// Raw markdown
    Plain,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        if !color {
            return Self::Plain;
        }

        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_fg(Color::Green);
        skin.inline_code.set_bg(Color::Reset);
        Self::Styled(Box::new(skin))
    }

    /// Prints `markdown` to stdout.
    pub fn render(&self, markdown: &str) {
        match self {
            Self::Styled(skin) => skin.print_text(markdown),
            Self::Plain => print!("{markdown}"),
        }
    }

    /// Whether output is styled.
    pub fn is_styled(&self) -> bool {
        matches!(self, Self::Styled(_))
    }
}
