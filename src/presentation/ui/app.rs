//! Main application orchestrator.

use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::application::dto::{ClassifyOutcome, ClassifyRequest, PredictForm};
use crate::application::use_cases::{ClassifyLogsUseCase, PredictPriceUseCase};
use crate::domain::entities::LocationList;
use crate::domain::errors::ApiError;
use crate::domain::ports::{ClassifyPort, PredictPort};
use crate::presentation::events::{EventHandler, ScreenSelect};
use crate::presentation::ui::{ClassifyAction, ClassifyScreen, PredictAction, PredictScreen};

/// Completed async work delivered back to the event loop.
#[derive(Debug)]
enum Action {
    LocationsLoaded(Result<LocationList, ApiError>),
    ClassifyDone(Box<Result<ClassifyOutcome, ApiError>>),
    PredictDone(Result<String, ApiError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveScreen {
    Classify,
    Predict,
}

/// Top-level TUI application.
pub struct App {
    state: AppState,
    active: ActiveScreen,
    classify_screen: ClassifyScreen,
    predict_screen: PredictScreen,
    classify_use_case: ClassifyLogsUseCase,
    predict_use_case: PredictPriceUseCase,
    output_path: PathBuf,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Creates the application over the two service ports.
    #[must_use]
    pub fn new(
        classify_port: Arc<dyn ClassifyPort>,
        predict_port: Arc<dyn PredictPort>,
        output_path: PathBuf,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::Running,
            active: ActiveScreen::Classify,
            classify_screen: ClassifyScreen::new(),
            predict_screen: PredictScreen::new(),
            classify_use_case: ClassifyLogsUseCase::new(classify_port),
            predict_use_case: PredictPriceUseCase::new(predict_port),
            output_path,
            action_tx,
            action_rx,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns error if terminal drawing fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.spawn_location_load();

        let mut terminal_events = EventStream::new();
        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    self.handle_terminal_event(&event);
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            self.handle_key(*key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if EventHandler::is_quit_event(&key) {
            self.state = AppState::Exiting;
            return;
        }

        if let Some(select) = EventHandler::screen_select(&key) {
            self.active = match select {
                ScreenSelect::Classify => ActiveScreen::Classify,
                ScreenSelect::Predict => ActiveScreen::Predict,
            };
            return;
        }

        match self.active {
            ActiveScreen::Classify => {
                if self.classify_screen.handle_key(key) == ClassifyAction::Submit {
                    self.start_classification();
                }
            }
            ActiveScreen::Predict => {
                if self.predict_screen.handle_key(key) == PredictAction::Submit {
                    self.start_prediction();
                }
            }
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::LocationsLoaded(result) => {
                if let Err(e) = &result {
                    error!(error = %e, "Location load failed");
                }
                self.predict_screen.set_locations(result);
            }
            Action::ClassifyDone(result) => match *result {
                Ok(outcome) => self.classify_screen.set_outcome(outcome),
                Err(e) => {
                    error!(error = %e, "Classification failed");
                    self.classify_screen.set_error(e.to_string());
                }
            },
            Action::PredictDone(result) => match result {
                Ok(text) => self.predict_screen.set_result(text),
                Err(e) => {
                    error!(error = %e, "Prediction failed");
                    self.predict_screen.set_error(e.to_string());
                }
            },
        }
    }

    fn spawn_location_load(&self) {
        debug!("Spawning location load");
        let use_case = self.predict_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = use_case.load_locations().await;
            let _ = tx.send(Action::LocationsLoaded(result));
        });
    }

    fn start_classification(&mut self) {
        let Some(file) = self.classify_screen.selected_file().cloned() else {
            return;
        };

        self.classify_screen.set_loading();

        let request = ClassifyRequest::new(file, self.output_path.clone());
        let use_case = self.classify_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = use_case.execute(request).await;
            let _ = tx.send(Action::ClassifyDone(Box::new(result)));
        });
    }

    fn start_prediction(&mut self) {
        let form: PredictForm = self.predict_screen.form();
        self.predict_screen.set_loading();

        let use_case = self.predict_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = use_case.execute(&form).await;
            let _ = tx.send(Action::PredictDone(result));
        });
    }

    fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]);
        let [tabs_area, screen_area] = layout.areas(frame.area());

        frame.render_widget(self.tab_line(), tabs_area);

        match self.active {
            ActiveScreen::Classify => frame.render_widget(&self.classify_screen, screen_area),
            ActiveScreen::Predict => frame.render_widget(&self.predict_screen, screen_area),
        }
    }

    fn tab_line(&self) -> Paragraph<'static> {
        let active = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let inactive = Style::default().fg(Color::DarkGray);

        let (classify_style, predict_style) = match self.active {
            ActiveScreen::Classify => (active, inactive),
            ActiveScreen::Predict => (inactive, active),
        };

        Paragraph::new(Line::from(vec![
            Span::styled(" [F1] Classify Logs ", classify_style),
            Span::raw(" "),
            Span::styled(" [F2] Predict Price ", predict_style),
            Span::styled("  Ctrl+Q quit", Style::default().fg(Color::DarkGray)),
        ]))
    }
}
