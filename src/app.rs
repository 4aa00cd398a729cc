use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::models::{Character, Comic};
use crate::api::ApiClient;
use crate::event::{CharactersOutcome, ComicsOutcome, Event};
use crate::paging::cursor::Cursor;
use crate::paging::dual::DualList;
use crate::paging::PageRequest;

/// Which part of the UI receives key input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    List,
    Search,
}

/// Which screen is showing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Characters,
    Detail,
}

/// State for the search bar's text input.
#[derive(Debug, Default)]
pub struct SearchInput {
    pub text: String,
    pub cursor_position: usize,
}

impl SearchInput {
    /// Insert a character at the current cursor position.
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char(&mut self) {
        if let Some(prev) = self.text[..self.cursor_position].chars().next_back() {
            self.cursor_position -= prev.len_utf8();
            self.text.remove(self.cursor_position);
        }
    }

    /// Move cursor left by one character.
    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.text[..self.cursor_position].chars().next_back() {
            self.cursor_position -= prev.len_utf8();
        }
    }

    /// Move cursor right by one character.
    pub fn move_cursor_right(&mut self) {
        if let Some(next) = self.text[self.cursor_position..].chars().next() {
            self.cursor_position += next.len_utf8();
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }
}

/// One-shot status line message, expiring after a few seconds.
#[derive(Debug)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    created: Instant,
}

/// State for the character detail screen: the character being viewed plus
/// its incrementally loaded comics.
#[derive(Debug)]
pub struct DetailState {
    pub character: Character,
    pub comics: Cursor<Comic>,
    pub selected_index: usize,
}

/// Main application state.
pub struct App {
    client: ApiClient,
    event_tx: mpsc::UnboundedSender<Event>,

    /// Browse/search streams of the character catalog.
    pub characters: DualList<Character>,
    pub search_input: SearchInput,
    pub selected_index: usize,

    pub screen: Screen,
    pub input_mode: InputMode,
    pub detail: Option<DetailState>,

    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,

    // Display parameters, from config.
    characters_page_size: usize,
    comics_page_size: usize,
    end_reached_threshold: usize,
}

impl App {
    pub fn new(
        client: ApiClient,
        event_tx: mpsc::UnboundedSender<Event>,
        characters_page_size: usize,
        comics_page_size: usize,
        end_reached_threshold: usize,
    ) -> Self {
        Self {
            client,
            event_tx,
            characters: DualList::new(),
            search_input: SearchInput::default(),
            selected_index: 0,
            screen: Screen::default(),
            input_mode: InputMode::default(),
            detail: None,
            status_message: None,
            should_quit: false,
            characters_page_size,
            comics_page_size,
            end_reached_threshold,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // ── Character list ───────────────────────────────────────────────────

    /// Ask the active character stream for its next page and dispatch the
    /// fetch if one is due. Safe to call repeatedly.
    pub fn load_more_characters(&mut self) {
        if let Some(request) = self.characters.on_end_reached(self.characters_page_size) {
            self.dispatch_characters(request);
        }
    }

    /// Feed the current search text into the dual-mode engine. Called on
    /// every keystroke; stale responses are sorted out at delivery.
    pub fn apply_filter(&mut self) {
        let text = self.search_input.text.clone();
        let was_searching = self.characters.is_searching();
        if let Some(request) = self.characters.set_filter(&text, self.characters_page_size) {
            self.selected_index = 0;
            self.dispatch_characters(request);
        } else if was_searching && !self.characters.is_searching() {
            // Back to browse; keep whatever position still fits.
            self.clamp_selection();
        }
    }

    fn dispatch_characters(&self, request: PageRequest) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.characters(&request).await;
            let _ = tx.send(Event::CharactersPage(CharactersOutcome {
                filter: request.filter,
                result,
            }));
        });
    }

    /// Deliver a resolved character page to the engine.
    pub fn handle_characters_page(&mut self, outcome: CharactersOutcome) {
        let filter = outcome.filter.as_deref();
        match outcome.result {
            Ok(page) => {
                self.characters.apply_page(filter, page);
                self.clamp_selection();
            }
            Err(e) => {
                warn!(error = %e, filter = filter.unwrap_or(""), "character page failed");
                if self.characters.apply_failure(filter) {
                    self.set_status_message("Failed to load characters".to_string(), true);
                }
            }
        }
    }

    // ── Detail screen ────────────────────────────────────────────────────

    /// Open the detail screen for the currently selected character and seed
    /// its comics stream. A character with no comics never fetches.
    pub fn open_detail(&mut self) {
        let Some(character) = self
            .characters
            .current_items()
            .get(self.selected_index)
            .cloned()
        else {
            return;
        };
        debug!(id = character.id, name = %character.name, "opening detail");

        let mut detail = DetailState {
            character,
            comics: Cursor::new(None),
            selected_index: 0,
        };
        if detail.character.comics.available > 0 {
            if let Some(request) = detail.comics.begin(self.comics_page_size) {
                self.dispatch_comics(detail.character.id, request);
            }
        }
        self.detail = Some(detail);
        self.screen = Screen::Detail;
        self.input_mode = InputMode::List;
    }

    /// Return to the character list. The detail state is discarded; a
    /// comics response still in flight will find no matching screen and be
    /// dropped at delivery.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.screen = Screen::Characters;
    }

    /// Ask the comics stream of the open detail screen for its next page.
    /// A character with no comics never fetches.
    pub fn load_more_comics(&mut self) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        if detail.character.comics.available == 0 {
            return;
        }
        if let Some(request) = detail.comics.begin(self.comics_page_size) {
            let id = detail.character.id;
            self.dispatch_comics(id, request);
        }
    }

    fn dispatch_comics(&self, character_id: u64, request: PageRequest) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.comics(character_id, &request).await;
            let _ = tx.send(Event::ComicsPage(ComicsOutcome {
                character_id,
                result,
            }));
        });
    }

    /// Deliver a resolved comics page. A response for a character whose
    /// detail screen is no longer open is dropped without touching state.
    pub fn handle_comics_page(&mut self, outcome: ComicsOutcome) {
        let Some(detail) = self
            .detail
            .as_mut()
            .filter(|d| d.character.id == outcome.character_id)
        else {
            debug!(id = outcome.character_id, "stale comics page dropped");
            return;
        };
        match outcome.result {
            Ok(page) => detail.comics.apply(page),
            Err(e) => {
                warn!(error = %e, id = outcome.character_id, "comics page failed");
                detail.comics.fail();
                self.set_status_message("Failed to load comics".to_string(), true);
            }
        }
    }

    // ── Selection & scrolling ────────────────────────────────────────────

    /// Move the selection in whichever list is on screen, fetching the next
    /// page when the selection gets near the end of the loaded items.
    pub fn select_next(&mut self) {
        match self.screen {
            Screen::Characters => {
                let len = self.characters.current_items().len();
                if len > 0 && self.selected_index + 1 < len {
                    self.selected_index += 1;
                }
                self.maybe_load_more();
            }
            Screen::Detail => {
                if let Some(detail) = self.detail.as_mut() {
                    let len = detail.comics.items().len();
                    if len > 0 && detail.selected_index + 1 < len {
                        detail.selected_index += 1;
                    }
                }
                self.maybe_load_more();
            }
        }
    }

    pub fn select_prev(&mut self) {
        match self.screen {
            Screen::Characters => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            Screen::Detail => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.selected_index = detail.selected_index.saturating_sub(1);
                }
            }
        }
    }

    /// Fetch the next page when the selection is within the configured
    /// threshold of the end of the loaded items.
    fn maybe_load_more(&mut self) {
        match self.screen {
            Screen::Characters => {
                let len = self.characters.current_items().len();
                if self.selected_index + self.end_reached_threshold >= len {
                    self.load_more_characters();
                }
            }
            Screen::Detail => {
                let near_end = self.detail.as_ref().is_some_and(|d| {
                    d.selected_index + self.end_reached_threshold >= d.comics.items().len()
                });
                if near_end {
                    self.load_more_comics();
                }
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.characters.current_items().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    // ── Status message ───────────────────────────────────────────────────

    /// Set a status message with current timestamp.
    pub fn set_status_message(&mut self, msg: String, is_error: bool) {
        let text = if is_error {
            format!("✗ {}", msg)
        } else {
            format!("✓ {}", msg)
        };
        self.status_message = Some(StatusMessage {
            text,
            is_error,
            created: Instant::now(),
        });
    }

    /// Clear the status message if it has been displayed for more than 3 seconds.
    pub fn clear_expired_status(&mut self) {
        if let Some(msg) = &self.status_message {
            if msg.created.elapsed().as_secs() >= 3 {
                self.status_message = None;
            }
        }
    }
}
