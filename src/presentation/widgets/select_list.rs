//! Location selector widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// What the selector currently offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOptions {
    /// Options not loaded yet.
    Loading,
    /// Load failed or the list came back empty; shows one disabled entry.
    Unavailable(String),
    /// Selectable options with a non-selectable placeholder on top.
    Ready(Vec<String>),
}

/// Dropdown-style selector rendered as a one-line field.
///
/// The placeholder ("Select location") occupies index 0 and stays selected
/// until the user moves; its value is the empty string, which downstream
/// validation treats as "not chosen".
#[derive(Debug, Clone)]
pub struct SelectList {
    label: String,
    placeholder: String,
    options: SelectOptions,
    // 0 = placeholder, 1..=len = options
    selected: usize,
    focused: bool,
}

impl SelectList {
    /// Creates an empty selector in the loading state.
    #[must_use]
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            options: SelectOptions::Loading,
            selected: 0,
            focused: false,
        }
    }

    /// Replaces the option set and restores the placeholder selection.
    pub fn set_options(&mut self, options: SelectOptions) {
        self.options = options;
        self.selected = 0;
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns focus state.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Currently selected value; empty while the placeholder is selected or
    /// no options are available.
    #[must_use]
    pub fn value(&self) -> &str {
        match &self.options {
            SelectOptions::Ready(names) if self.selected > 0 => &names[self.selected - 1],
            _ => "",
        }
    }

    /// Moves selection to the next option.
    pub fn select_next(&mut self) {
        if let SelectOptions::Ready(names) = &self.options {
            if self.selected < names.len() {
                self.selected += 1;
            }
        }
    }

    /// Moves selection to the previous option, stopping at the placeholder.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Restores the placeholder selection.
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    fn display_line(&self) -> Line<'_> {
        match &self.options {
            SelectOptions::Loading => Line::from(Span::styled(
                "Loading locations...",
                Style::default().fg(Color::DarkGray),
            )),
            SelectOptions::Unavailable(reason) => Line::from(Span::styled(
                reason.as_str(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
            SelectOptions::Ready(names) => {
                if self.selected == 0 {
                    Line::from(Span::styled(
                        self.placeholder.as_str(),
                        Style::default().fg(Color::DarkGray),
                    ))
                } else {
                    let position = format!(" ({}/{})", self.selected, names.len());
                    Line::from(vec![
                        Span::styled(
                            names[self.selected - 1].as_str(),
                            Style::default().fg(Color::White),
                        ),
                        Span::styled(position, Style::default().fg(Color::DarkGray)),
                    ])
                }
            }
        }
    }
}

impl Widget for &SelectList {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.display_line()).render(inner, buf);
    }
}
