//! Main event loop.
//!
//! Input events and repaint ticks arrive on two channels and are handled one
//! at a time, so every state change is serialized here. Handler failures are
//! logged and the loop keeps going; only the terminal itself can end it with
//! an error.

use anyhow::Result;
use freetier_core::events::{Action, DefaultKeyMapper, InputAction, KeyMapper};
use freetier_core::frame_engine::EngineEvent;
use ratatui::Frame;
use tokio::sync::mpsc;

use super::browser::{OpenLinkError, open_link};
use super::exit_info::ExitReason;
use super::terminal::FreetierTerminal;
use crate::app::{AppState, Effect, StatusMessage, dispatch};
use crate::config::TuiConfig;
use crate::views::{CategoryState, MainView, MatrixBackground};

/// Capacity of the repaint tick channel. Ticks beyond this are dropped.
const TICK_BUFFER: usize = 4;

/// Opens a link outside the TUI.
pub type LinkOpener = fn(&str) -> Result<(), OpenLinkError>;

pub struct EventLoop {
    app: AppState,
    category: CategoryState,
    config: TuiConfig,
    background: Option<MatrixBackground>,
    key_mapper: DefaultKeyMapper,
    tick_tx: mpsc::Sender<u64>,
    tick_rx: mpsc::Receiver<u64>,
    link_opener: LinkOpener,
    size: (u16, u16),
}

impl EventLoop {
    /// Create the loop for a `width` x `height` terminal.
    pub fn new(config: TuiConfig, width: u16, height: u16) -> Self {
        let mut app = AppState::new();
        app.background_enabled = config.background.enabled;
        let category = CategoryState::new(app.active_tab(), app.query());
        let background = app
            .background_enabled
            .then(|| MatrixBackground::new(width, height, &config.background));
        let (tick_tx, tick_rx) = mpsc::channel(TICK_BUFFER);

        Self {
            app,
            category,
            config,
            background,
            key_mapper: DefaultKeyMapper::new(),
            tick_tx,
            tick_rx,
            link_opener: open_link,
            size: (width, height),
        }
    }

    /// Replace the browser launcher.
    pub fn with_link_opener(mut self, opener: LinkOpener) -> Self {
        self.link_opener = opener;
        self
    }

    pub fn app(&self) -> &AppState {
        &self.app
    }

    pub fn category(&self) -> &CategoryState {
        &self.category
    }

    pub fn background(&self) -> Option<&MatrixBackground> {
        self.background.as_ref()
    }

    /// Mount the background if it is enabled. Needs a tokio runtime.
    pub fn start(&mut self) {
        if let Some(background) = self.background.as_mut() {
            background.mount(self.tick_tx.clone());
        }
    }

    /// Handle one input event. Returns the exit reason once the app should quit.
    pub fn handle_event(&mut self, event: EngineEvent) -> Option<ExitReason> {
        match event {
            EngineEvent::Key(key) => {
                let action = self.key_mapper.map_key(key);
                if action == Action::None {
                    return None;
                }
                self.app.status = None;
                let interrupted = action == Action::Quit;
                match dispatch(&mut self.app, &mut self.category, action) {
                    Effect::Quit if interrupted => Some(ExitReason::Interrupted),
                    Effect::Quit => Some(ExitReason::Normal),
                    effect => {
                        self.apply_effect(effect);
                        None
                    }
                }
            }
            EngineEvent::Paste(text) => {
                dispatch(
                    &mut self.app,
                    &mut self.category,
                    Action::Input(InputAction::Paste(text)),
                );
                None
            }
            EngineEvent::Resize(width, height) => {
                self.size = (width, height);
                if let Some(background) = self.background.as_mut() {
                    background.resize(width, height);
                }
                None
            }
            EngineEvent::Quit => Some(ExitReason::InputClosed),
            EngineEvent::Error(error) => {
                tracing::error!(%error, "terminal input error");
                None
            }
        }
    }

    /// Advance the background one frame.
    pub fn handle_tick(&mut self) {
        if let Some(background) = self.background.as_mut() {
            background.tick();
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None | Effect::Quit => {}
            Effect::OpenLink(link) => match (self.link_opener)(&link) {
                Ok(()) => {
                    self.app.set_status(StatusMessage::info(format!("Opened {link}")));
                }
                Err(e) => {
                    tracing::warn!(%link, error = %e, "failed to open link");
                    self.app
                        .set_status(StatusMessage::error(format!("Could not open {link}: {e}")));
                }
            },
            Effect::ToggleBackground => {
                if self.app.background_enabled {
                    let (width, height) = self.size;
                    let mut background =
                        MatrixBackground::new(width, height, &self.config.background);
                    background.mount(self.tick_tx.clone());
                    self.background = Some(background);
                } else if let Some(mut background) = self.background.take() {
                    background.unmount();
                }
            }
        }
    }

    /// Draw the whole screen.
    pub fn render(&mut self, frame: &mut Frame) {
        let view = MainView::new(&self.app, &self.config.ui)
            .background(self.background.as_ref().map(MatrixBackground::field));
        frame.render_stateful_widget(view, frame.area(), &mut self.category);
    }

    /// Run until the user quits or input ends.
    pub async fn run(
        &mut self,
        terminal: &mut FreetierTerminal,
        mut events: mpsc::Receiver<EngineEvent>,
    ) -> Result<ExitReason> {
        self.start();
        terminal.draw(|frame| self.render(frame))?;

        loop {
            let exit = tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event),
                    None => Some(ExitReason::InputClosed),
                },
                Some(_frame) = self.tick_rx.recv() => {
                    self.handle_tick();
                    None
                }
            };

            if let Some(reason) = exit {
                tracing::debug!(%reason, "event loop finished");
                return Ok(reason);
            }

            terminal.draw(|frame| self.render(frame))?;
        }
    }
}
