//! Log classification screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

use crate::application::dto::ClassifyOutcome;
use crate::domain::entities::SelectedFile;
use crate::presentation::widgets::{PreviewTable, StatusBar, StatusLevel, TextInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ClassifyState {
    Idle,
    Loading,
    Done,
    Error,
}

/// Action requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyAction {
    /// Nothing to do.
    None,
    /// Submit the current selection.
    Submit,
}

/// Upload-and-preview screen for the classification service.
pub struct ClassifyScreen {
    path_input: TextInput,
    selected: Option<SelectedFile>,
    state: ClassifyState,
    status: String,
    status_level: StatusLevel,
    outcome: Option<ClassifyOutcome>,
}

impl ClassifyScreen {
    /// Creates new classification screen.
    #[must_use]
    pub fn new() -> Self {
        let mut path_input =
            TextInput::new("CSV file").placeholder("Path to a CSV log file, then Enter to select");
        path_input.set_focused(true);

        Self {
            path_input,
            selected: None,
            state: ClassifyState::Idle,
            status: String::new(),
            status_level: StatusLevel::Info,
            outcome: None,
        }
    }

    /// Returns current state.
    #[must_use]
    pub const fn state(&self) -> ClassifyState {
        self.state
    }

    /// Returns the current selection, if any.
    #[must_use]
    pub const fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Enters the loading state; hides any prior result.
    pub fn set_loading(&mut self) {
        self.state = ClassifyState::Loading;
        self.outcome = None;
        self.set_status("Uploading and classifying — please wait...", StatusLevel::Info);
    }

    /// Records a successful round trip.
    pub fn set_outcome(&mut self, outcome: ClassifyOutcome) {
        self.state = ClassifyState::Done;
        self.set_status(
            format!(
                "Success — previewing {} row(s). Saved to {}.",
                outcome.preview.body().len(),
                outcome.saved_path.display()
            ),
            StatusLevel::Success,
        );
        self.outcome = Some(outcome);
    }

    /// Records a failure and leaves the loading state.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = ClassifyState::Error;
        self.set_status(format!("Error: {}", message.into()), StatusLevel::Error);
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ClassifyAction {
        if self.state == ClassifyState::Loading {
            return ClassifyAction::None;
        }

        match key.code {
            KeyCode::Enter => self.select_typed_path(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.selected.is_some() {
                    return ClassifyAction::Submit;
                }
                self.set_status("Please select a CSV file first.", StatusLevel::Error);
            }
            KeyCode::Char(c) => self.path_input.input_char(c),
            KeyCode::Backspace => self.path_input.backspace(),
            KeyCode::Delete => self.path_input.delete(),
            KeyCode::Left => self.path_input.move_left(),
            KeyCode::Right => self.path_input.move_right(),
            KeyCode::Home => self.path_input.move_start(),
            KeyCode::End => self.path_input.move_end(),
            _ => {}
        }

        ClassifyAction::None
    }

    fn select_typed_path(&mut self) {
        let path = self.path_input.value().trim().to_string();
        if path.is_empty() {
            self.set_status("Please select a CSV file first.", StatusLevel::Error);
            return;
        }

        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {
                let file = SelectedFile::new(path, meta.len());
                self.set_status(file.summary(), StatusLevel::Info);
                // replaces any prior selection
                self.selected = Some(file);
            }
            Ok(_) => self.set_status(format!("Not a file: {path}"), StatusLevel::Error),
            Err(e) => self.set_status(format!("Cannot read {path}: {e}"), StatusLevel::Error),
        }
    }

    fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status = message.into();
        self.status_level = level;
    }
}

impl Default for ClassifyScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &ClassifyScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
        ]);
        let [title_area, input_area, status_area, preview_area] = layout.areas(area);

        Paragraph::new("Upload a CSV log file for classification")
            .style(Style::default().fg(Color::White))
            .render(title_area, buf);

        (&self.path_input).render(input_area, buf);

        let busy = if self.state == ClassifyState::Loading {
            "· Processing..."
        } else {
            "Enter select · Ctrl+S classify"
        };
        StatusBar::new()
            .message(self.status.clone())
            .hints(busy)
            .level(self.status_level)
            .render(status_area, buf);

        if let Some(outcome) = &self.outcome {
            let title = format!(
                " Preview ({} of {} data rows) ",
                outcome.preview.body().len(),
                outcome.total_data_rows
            );
            PreviewTable::new(&outcome.preview, title).render(preview_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new_with_kind(KeyCode::Char(c), KeyModifiers::CONTROL, KeyEventKind::Press)
    }

    #[test]
    fn test_submit_without_selection_is_blocked() {
        let mut screen = ClassifyScreen::new();
        let action = screen.handle_key(ctrl('s'));
        assert_eq!(action, ClassifyAction::None);
        assert_eq!(screen.status, "Please select a CSV file first.");
        assert_eq!(screen.status_level, StatusLevel::Error);
    }

    #[test]
    fn test_select_then_submit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();

        let mut screen = ClassifyScreen::new();
        for c in path.to_str().unwrap().chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
        screen.handle_key(key(KeyCode::Enter));
        assert!(screen.selected_file().is_some());

        assert_eq!(screen.handle_key(ctrl('s')), ClassifyAction::Submit);
    }

    #[test]
    fn test_selection_replaces_prior() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        std::fs::write(&first, "x\n").unwrap();
        std::fs::write(&second, "y\n").unwrap();

        let mut screen = ClassifyScreen::new();
        screen.path_input.set_value(first.to_str().unwrap());
        screen.handle_key(key(KeyCode::Enter));
        screen.path_input.set_value(second.to_str().unwrap());
        screen.handle_key(key(KeyCode::Enter));

        assert_eq!(screen.selected_file().unwrap().name(), "second.csv");
    }

    #[test]
    fn test_keys_ignored_while_loading() {
        let mut screen = ClassifyScreen::new();
        screen.set_loading();
        assert_eq!(screen.handle_key(ctrl('s')), ClassifyAction::None);
        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))), ClassifyAction::None);
        assert_eq!(screen.path_input.value(), "");
    }
}
