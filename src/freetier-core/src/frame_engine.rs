//! Terminal input pump.
//!
//! [`FrameEngine`] reads crossterm's async [`EventStream`] and forwards what
//! the app cares about as [`EngineEvent`]s. It owns no application state and
//! stops as soon as the shared running flag is cleared or the receiver goes
//! away. Repaint ticks for the background come from a separate
//! [`RepaintTimer`](crate::animation::RepaintTimer).
//!
//! ```rust,ignore
//! let (tx, mut rx) = create_event_channel();
//! let running = Arc::new(AtomicBool::new(true));
//! let mut engine = FrameEngine::new(tx, running.clone());
//! tokio::spawn(async move { engine.run().await });
//!
//! while let Some(event) = rx.recv().await {
//!     // ...
//! }
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

/// Default capacity of the engine event channel.
pub const DEFAULT_CHANNEL_BUFFER: usize = 256;

/// How often the engine re-checks the running flag while idle.
const SHUTDOWN_POLL: Duration = Duration::from_millis(50);

/// Low-level events produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A key was pressed (releases and repeats are dropped)
    Key(KeyEvent),
    /// The terminal was resized to (width, height)
    Resize(u16, u16),
    /// Bracketed paste
    Paste(String),
    /// The input stream ended
    Quit,
    /// Reading input failed
    Error(String),
}

impl EngineEvent {
    /// Translate a raw crossterm event, dropping the ones the app ignores.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(EngineEvent::Key(key)),
            Event::Key(_) => None,
            Event::Resize(width, height) => Some(EngineEvent::Resize(width, height)),
            Event::Paste(text) => Some(EngineEvent::Paste(text)),
            Event::Mouse(_) | Event::FocusGained | Event::FocusLost => None,
        }
    }
}

/// Create an engine event channel with [`DEFAULT_CHANNEL_BUFFER`] capacity.
pub fn create_event_channel() -> (mpsc::Sender<EngineEvent>, mpsc::Receiver<EngineEvent>) {
    create_event_channel_with_capacity(DEFAULT_CHANNEL_BUFFER)
}

pub fn create_event_channel_with_capacity(
    capacity: usize,
) -> (mpsc::Sender<EngineEvent>, mpsc::Receiver<EngineEvent>) {
    mpsc::channel(capacity)
}

/// Forwards terminal input to the event loop.
pub struct FrameEngine {
    event_tx: mpsc::Sender<EngineEvent>,
    running: Arc<AtomicBool>,
}

impl FrameEngine {
    pub fn new(event_tx: mpsc::Sender<EngineEvent>, running: Arc<AtomicBool>) -> Self {
        Self { event_tx, running }
    }

    /// Returns true while the engine should keep pumping.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Pump input until stopped.
    pub async fn run(&mut self) -> Result<()> {
        let mut events = EventStream::new();
        tracing::debug!("frame engine started");

        while self.is_running() {
            let next = tokio::select! {
                next = events.next() => next,
                _ = tokio::time::sleep(SHUTDOWN_POLL) => continue,
            };

            let outgoing = match next {
                Some(Ok(event)) => match EngineEvent::from_crossterm(event) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => EngineEvent::Error(e.to_string()),
                None => EngineEvent::Quit,
            };

            let stream_ended = outgoing == EngineEvent::Quit;
            if self.event_tx.send(outgoing).await.is_err() || stream_ended {
                break;
            }
        }

        tracing::debug!("frame engine stopped");
        Ok(())
    }
}

impl std::fmt::Debug for FrameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameEngine")
            .field("running", &self.is_running())
            .finish()
    }
}
