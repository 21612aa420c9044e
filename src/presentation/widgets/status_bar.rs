//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }
}

/// One-line status message plus right-aligned key hints.
#[derive(Debug, Clone)]
pub struct StatusBar {
    message: String,
    hints: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: String::new(),
            hints: String::new(),
            level: StatusLevel::Info,
        }
    }

    /// Sets the message content.
    #[must_use]
    pub fn message(mut self, content: impl Into<String>) -> Self {
        self.message = content.into();
        self
    }

    /// Sets the key hints.
    #[must_use]
    pub fn hints(mut self, content: impl Into<String>) -> Self {
        self.hints = content.into();
        self
    }

    /// Sets status level.
    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message = Paragraph::new(Line::from(Span::styled(
            self.message.as_str(),
            Style::default().fg(self.level.color()),
        )));
        message.render(area, buf);

        if !self.hints.is_empty() {
            let hints = Paragraph::new(Line::from(Span::styled(
                self.hints.as_str(),
                Style::default().fg(Color::DarkGray),
            )))
            .right_aligned();
            hints.render(area, buf);
        }
    }
}
