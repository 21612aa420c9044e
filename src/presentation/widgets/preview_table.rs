//! CSV preview table widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::entities::CsvTable;

const MAX_COLUMN_WIDTH: u16 = 32;

/// Renders a parsed CSV table.
///
/// The header row defines the column count; short body rows render empty
/// strings for their missing cells, and empty header cells render as
/// `(empty)`.
pub struct PreviewTable<'a> {
    table: &'a CsvTable,
    title: String,
}

impl<'a> PreviewTable<'a> {
    /// Creates a preview over an already-capped table.
    #[must_use]
    pub fn new(table: &'a CsvTable, title: impl Into<String>) -> Self {
        Self {
            table,
            title: title.into(),
        }
    }

    fn column_widths(&self) -> Vec<Constraint> {
        let Some(header) = self.table.header() else {
            return Vec::new();
        };

        header
            .iter()
            .enumerate()
            .map(|(col, name)| {
                let mut width = header_label(name).width();
                for row in 0..self.table.body().len() {
                    width = width.max(self.table.cell(row, col).width());
                }
                let clamped = u16::try_from(width + 1).unwrap_or(u16::MAX);
                Constraint::Length(clamped.min(MAX_COLUMN_WIDTH))
            })
            .collect()
    }
}

fn header_label(name: &str) -> &str {
    if name.is_empty() { "(empty)" } else { name }
}

impl Widget for PreviewTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray))
            .title(self.title.as_str());

        let Some(header) = self.table.header() else {
            block.render(area, buf);
            return;
        };

        let header_row = Row::new(
            header
                .iter()
                .map(|h| Cell::from(header_label(h)))
                .collect::<Vec<_>>(),
        )
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let column_count = header.len();
        let rows = (0..self.table.body().len()).map(|row| {
            Row::new(
                (0..column_count)
                    .map(|col| Cell::from(self.table.cell(row, col)))
                    .collect::<Vec<_>>(),
            )
        });

        Table::new(rows, self.column_widths())
            .header(header_row)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_label() {
        assert_eq!(header_label(""), "(empty)");
        assert_eq!(header_label("ts"), "ts");
    }

    #[test]
    fn test_column_widths_cover_header_count() {
        let table = CsvTable::from_rows(vec![
            vec!["a".to_string(), String::new(), "c".to_string()],
            vec!["only".to_string()],
        ]);
        let preview = PreviewTable::new(&table, "Preview");
        assert_eq!(preview.column_widths().len(), 3);
    }
}
