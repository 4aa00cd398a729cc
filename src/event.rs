use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

use crate::api::models::{Character, Comic};
use crate::error::Result;
use crate::paging::Page;

/// Outcome of a character-page fetch, tagged with the filter it was issued
/// under so stale search responses can be recognized at delivery.
#[derive(Debug)]
pub struct CharactersOutcome {
    pub filter: Option<String>,
    pub result: Result<Page<Character>>,
}

/// Outcome of a comics-page fetch, tagged with the character it belongs to.
#[derive(Debug)]
pub struct ComicsOutcome {
    pub character_id: u64,
    pub result: Result<Page<Comic>>,
}

/// Application events: terminal input and fetch completions share one
/// channel, so all state transitions happen on the event-loop task.
#[derive(Debug)]
pub enum Event {
    /// Key press.
    Key(KeyEvent),
    /// Mouse input (scroll wheel).
    Mouse(MouseEvent),
    /// Render tick.
    Tick,
    /// Terminal size change.
    Resize(u16, u16),
    /// A character-catalog page resolved (success or failure).
    CharactersPage(CharactersOutcome),
    /// A comics page resolved (success or failure).
    ComicsPage(ComicsOutcome),
}

/// Translate a crossterm event into an application event. Focus and paste
/// events are ignored.
fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    }
}

/// Async event handler: terminal input is polled on a spawned task and
/// forwarded over the same channel fetch tasks post their completions to.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Spawn the input-polling task; `tick_rate` bounds how long a poll
    /// waits before emitting a tick.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let input_tx = tx.clone();

        tokio::spawn(async move {
            loop {
                let event = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(raw) => match translate(raw) {
                            Some(event) => event,
                            None => continue,
                        },
                        Err(_) => continue,
                    }
                } else {
                    Event::Tick
                };
                if input_tx.send(event).is_err() {
                    // Receiver gone, the app is shutting down.
                    break;
                }
            }
        });

        Self { rx, tx }
    }

    /// Sender clone for fetch tasks to post their completion events.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Wait for the next event.
    pub async fn next(&mut self) -> Result<Event> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| crate::error::AppError::Terminal("Event channel closed".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};

    #[test]
    fn key_and_resize_events_translate() {
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert!(matches!(
            translate(CrosstermEvent::Key(key)),
            Some(Event::Key(_))
        ));
        assert!(matches!(
            translate(CrosstermEvent::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        ));
    }

    #[test]
    fn focus_events_are_ignored() {
        assert!(translate(CrosstermEvent::FocusGained).is_none());
        assert!(translate(CrosstermEvent::FocusLost).is_none());
    }
}
