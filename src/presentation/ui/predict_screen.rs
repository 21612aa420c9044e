//! Price prediction screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

use crate::application::dto::PredictForm;
use crate::domain::entities::LocationList;
use crate::domain::errors::ApiError;
use crate::presentation::widgets::{SelectList, SelectOptions, StatusBar, StatusLevel, TextInput};

/// Which form field holds focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum PredictFocus {
    TotalSqft,
    Bath,
    Balcony,
    Bedroom,
    Location,
}

impl PredictFocus {
    const ORDER: [Self; 5] = [
        Self::TotalSqft,
        Self::Bath,
        Self::Balcony,
        Self::Bedroom,
        Self::Location,
    ];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Action requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictAction {
    /// Nothing to do.
    None,
    /// Submit the current form.
    Submit,
}

/// Prediction form screen.
pub struct PredictScreen {
    total_sqft: TextInput,
    bath: TextInput,
    balcony: TextInput,
    bedroom: TextInput,
    location: SelectList,
    focus: PredictFocus,
    loading: bool,
    result: Option<String>,
    error: Option<String>,
}

impl PredictScreen {
    /// Creates new prediction screen.
    #[must_use]
    pub fn new() -> Self {
        let mut total_sqft = TextInput::new("Area (sqft)").placeholder("e.g. 1200");
        total_sqft.set_focused(true);

        Self {
            total_sqft,
            bath: TextInput::new("Bathrooms").placeholder("e.g. 2"),
            balcony: TextInput::new("Balconies").placeholder("e.g. 1"),
            bedroom: TextInput::new("Bedrooms").placeholder("e.g. 3"),
            location: SelectList::new("Location", "Select location"),
            focus: PredictFocus::TotalSqft,
            loading: false,
            result: None,
            error: None,
        }
    }

    /// Returns the field currently holding focus.
    #[must_use]
    pub const fn focus(&self) -> PredictFocus {
        self.focus
    }

    /// Returns true while a request is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Snapshot of the raw form text.
    #[must_use]
    pub fn form(&self) -> PredictForm {
        PredictForm {
            total_sqft: self.total_sqft.value().to_string(),
            bath: self.bath.value().to_string(),
            balcony: self.balcony.value().to_string(),
            bedroom: self.bedroom.value().to_string(),
            location: self.location.value().to_string(),
        }
    }

    /// Installs the fetched location list, or the unavailability placeholder.
    pub fn set_locations(&mut self, result: Result<LocationList, ApiError>) {
        let options = match result {
            Ok(list) if list.is_empty() => {
                SelectOptions::Unavailable("No locations available".to_string())
            }
            Ok(list) => SelectOptions::Ready(list.names().to_vec()),
            Err(_) => SelectOptions::Unavailable("Could not load locations".to_string()),
        };
        self.location.set_options(options);
    }

    /// Enters the loading state; hides any prior result or error.
    pub fn set_loading(&mut self) {
        self.loading = true;
        self.result = None;
        self.error = None;
    }

    /// Records a formatted estimate.
    pub fn set_result(&mut self, text: impl Into<String>) {
        self.loading = false;
        self.result = Some(text.into());
        self.error = None;
    }

    /// Records a failure and leaves the loading state.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
        self.result = None;
    }

    /// Clears the form, restores the placeholder, and hides results.
    pub fn reset(&mut self) {
        self.total_sqft.clear();
        self.bath.clear();
        self.balcony.clear();
        self.bedroom.clear();
        self.location.reset();
        self.result = None;
        self.error = None;
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> PredictAction {
        if self.loading {
            return PredictAction::None;
        }

        match key.code {
            KeyCode::Enter => {
                if self.form().is_complete() {
                    return PredictAction::Submit;
                }
                self.set_error("Please fill out all fields.");
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset();
            }
            KeyCode::Tab => self.move_focus(PredictFocus::next),
            KeyCode::BackTab => self.move_focus(PredictFocus::prev),
            KeyCode::Up if self.focus == PredictFocus::Location => self.location.select_prev(),
            KeyCode::Down if self.focus == PredictFocus::Location => self.location.select_next(),
            KeyCode::Up => self.move_focus(PredictFocus::prev),
            KeyCode::Down => self.move_focus(PredictFocus::next),
            _ => {
                if let Some(input) = self.focused_input() {
                    match key.code {
                        KeyCode::Char(c) => input.input_char(c),
                        KeyCode::Backspace => input.backspace(),
                        KeyCode::Delete => input.delete(),
                        KeyCode::Left => input.move_left(),
                        KeyCode::Right => input.move_right(),
                        KeyCode::Home => input.move_start(),
                        KeyCode::End => input.move_end(),
                        _ => {}
                    }
                }
            }
        }

        PredictAction::None
    }

    fn move_focus(&mut self, step: fn(PredictFocus) -> PredictFocus) {
        self.apply_focus(false);
        self.focus = step(self.focus);
        self.apply_focus(true);
    }

    fn apply_focus(&mut self, focused: bool) {
        match self.focus {
            PredictFocus::TotalSqft => self.total_sqft.set_focused(focused),
            PredictFocus::Bath => self.bath.set_focused(focused),
            PredictFocus::Balcony => self.balcony.set_focused(focused),
            PredictFocus::Bedroom => self.bedroom.set_focused(focused),
            PredictFocus::Location => self.location.set_focused(focused),
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            PredictFocus::TotalSqft => Some(&mut self.total_sqft),
            PredictFocus::Bath => Some(&mut self.bath),
            PredictFocus::Balcony => Some(&mut self.balcony),
            PredictFocus::Bedroom => Some(&mut self.bedroom),
            PredictFocus::Location => None,
        }
    }

    fn status_line(&self) -> (String, StatusLevel) {
        if self.loading {
            return ("Estimating price...".to_string(), StatusLevel::Info);
        }
        if let Some(err) = &self.error {
            return (err.clone(), StatusLevel::Error);
        }
        if let Some(result) = &self.result {
            return (result.clone(), StatusLevel::Success);
        }
        (String::new(), StatusLevel::Info)
    }
}

impl Default for PredictScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &PredictScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ]);
        let [title_area, sqft_area, bath_area, balcony_area, bedroom_area, location_area, status_area] =
            layout.areas(area);

        Paragraph::new("Estimate a home price")
            .style(Style::default().fg(Color::White))
            .render(title_area, buf);

        (&self.total_sqft).render(sqft_area, buf);
        (&self.bath).render(bath_area, buf);
        (&self.balcony).render(balcony_area, buf);
        (&self.bedroom).render(bedroom_area, buf);
        (&self.location).render(location_area, buf);

        let (message, level) = self.status_line();
        StatusBar::new()
            .message(message)
            .hints("Tab next field · Enter estimate · Ctrl+R reset")
            .level(level)
            .render(status_area, buf);
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

    fn ready_screen() -> PredictScreen {
        let mut screen = PredictScreen::new();
        screen.set_locations(Ok(LocationList::new(vec![
            "Anekal".to_string(),
            "Yelahanka".to_string(),
        ])));
        screen
    }

    fn fill(screen: &mut PredictScreen) {
        screen.total_sqft.set_value("1200");
        screen.bath.set_value("2");
        screen.balcony.set_value("1");
        screen.bedroom.set_value("3");
        // focus the selector and pick the first option
        while screen.focus() != PredictFocus::Location {
            screen.handle_key(key(KeyCode::Tab));
        }
        screen.handle_key(key(KeyCode::Down));
    }

    #[test]
    fn test_incomplete_form_blocks_submit() {
        let mut screen = ready_screen();
        screen.total_sqft.set_value("1200");

        let action = screen.handle_key(key(KeyCode::Enter));

        assert_eq!(action, PredictAction::None);
        assert_eq!(screen.error.as_deref(), Some("Please fill out all fields."));
    }

    #[test]
    fn test_complete_form_submits() {
        let mut screen = ready_screen();
        fill(&mut screen);

        assert_eq!(screen.form().location, "Anekal");
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), PredictAction::Submit);
    }

    #[test]
    fn test_unavailable_locations_block_submit() {
        let mut screen = PredictScreen::new();
        screen.set_locations(Err(ApiError::network("down")));
        screen.total_sqft.set_value("1200");
        screen.bath.set_value("2");
        screen.balcony.set_value("1");
        screen.bedroom.set_value("3");

        let action = screen.handle_key(key(KeyCode::Enter));

        assert_eq!(action, PredictAction::None);
        assert!(screen.error.is_some());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut screen = ready_screen();
        fill(&mut screen);
        screen.set_result("Estimated Price: $55,000.00");

        screen.handle_key(ctrl('r'));

        assert!(screen.form().total_sqft.is_empty());
        assert!(screen.form().location.is_empty());
        assert!(screen.result.is_none());
        assert!(screen.error.is_none());
    }

    #[test]
    fn test_keys_ignored_while_loading() {
        let mut screen = ready_screen();
        screen.set_loading();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), PredictAction::None);
        assert!(screen.is_loading());
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut screen = ready_screen();
        for expected in [
            PredictFocus::Bath,
            PredictFocus::Balcony,
            PredictFocus::Bedroom,
            PredictFocus::Location,
            PredictFocus::TotalSqft,
        ] {
            screen.handle_key(key(KeyCode::Tab));
            assert_eq!(screen.focus(), expected);
        }
    }
}
