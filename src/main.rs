mod api;
mod app;
mod components;
mod config;
mod error;
mod event;
mod handler;
mod logging;
mod paging;
mod theme;
mod tui;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::api::ApiClient;
use crate::app::App;
use crate::config::AppConfig;
use crate::event::{Event, EventHandler};
use crate::tui::{install_panic_hook, Tui};

/// A terminal browser for a paginated comic-character catalog.
#[derive(Parser, Debug)]
#[command(name = "herodex", version, about)]
struct Cli {
    /// Catalog gateway base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Path to a config file (overrides the default lookup)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (level via RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable mouse support
    #[arg(long)]
    no_mouse: bool,
}

impl Cli {
    /// Partial config derived from CLI flags, merged on top of file configs.
    fn overrides(&self) -> AppConfig {
        AppConfig {
            general: config::GeneralConfig {
                mouse: self.no_mouse.then_some(false),
            },
            api: config::ApiConfig {
                base_url: self.base_url.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> error::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref());

    let cfg = AppConfig::load(cli.config.as_deref(), Some(&cli.overrides()));

    // The key rides on every request inside the client; the paging engine
    // never sees it.
    let api_key = std::env::var("MARVEL_API_KEY")
        .ok()
        .or_else(|| cfg.api_key().map(str::to_string));
    let client = ApiClient::new(cfg.base_url(), api_key);

    install_panic_hook();

    let mut tui = Tui::new(cfg.mouse_enabled())?;
    let mut events = EventHandler::new(Duration::from_millis(16));
    let mut app = App::new(
        client,
        events.sender(),
        cfg.characters_page_size(),
        cfg.comics_page_size(),
        cfg.end_reached_threshold(),
    );

    // Seed the first page of the browse stream.
    app.load_more_characters();

    loop {
        tui.terminal_mut().draw(|frame| {
            ui::render(&mut app, frame);
        })?;

        match events.next().await? {
            Event::Key(key) => handler::handle_key_event(&mut app, key),
            Event::Mouse(mouse) => handler::handle_mouse_event(&mut app, mouse),
            Event::Tick => app.clear_expired_status(),
            Event::Resize(_, _) => {}
            Event::CharactersPage(outcome) => app.handle_characters_page(outcome),
            Event::ComicsPage(outcome) => app.handle_comics_page(outcome),
        }

        if app.should_quit {
            break;
        }
    }

    tui.restore()?;
    Ok(())
}
