//! Stockroom - terminal inventory browser
//!
//! Run: cargo run --bin stockroom-tui

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tui_input::backend::crossterm::EventHandler;

use stockroom_client::{CatalogClient, ClientConfig};
use stockroom_tui::app::{App, Focus};
use stockroom_tui::{fetch, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Route tracing into the TUI log pane
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    let client = ClientConfig::default().build_client()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Three independent load paths; each reports its own success or failure
    fetch::spawn_initial_load(&client, &tx, app.next_products_seq());

    let res = run_app(&mut terminal, &mut app, &client, &tx, &mut rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    client: &CatalogClient,
    tx: &mpsc::UnboundedSender<fetch::FetchEvent>,
    rx: &mut mpsc::UnboundedReceiver<fetch::FetchEvent>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // Apply completed fetches between draws; updates are synchronous
        // with respect to rendering
        while let Ok(fetch_event) = rx.try_recv() {
            app.handle_fetch_event(fetch_event);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    handle_key(app, client, tx, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(
    app: &mut App,
    client: &CatalogClient,
    tx: &mpsc::UnboundedSender<fetch::FetchEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Search => match key.code {
            KeyCode::Enter => run_filter(app, client, tx),
            KeyCode::Esc => app.focus = Focus::Categories,
            _ => {
                app.search.handle_event(&Event::Key(key));
            }
        },
        Focus::Categories => match key.code {
            KeyCode::Up => app.cursor_up(),
            KeyCode::Down => app.cursor_down(),
            KeyCode::Enter => {
                let raw = app.highlighted_category().map(|c| c.id.to_string());
                if let Some(raw) = raw {
                    app.select_category(raw);
                    app.add_category();
                }
            }
            KeyCode::Delete | KeyCode::Backspace => {
                let id = app.highlighted_category().map(|c| c.id);
                if let Some(id) = id {
                    app.remove_category(id);
                }
            }
            KeyCode::Char('f') => run_filter(app, client, tx),
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        },
        Focus::Tags => match key.code {
            KeyCode::Up => app.cursor_up(),
            KeyCode::Down => app.cursor_down(),
            KeyCode::Enter => {
                let raw = app.highlighted_tag().map(|t| t.id.to_string());
                if let Some(raw) = raw {
                    app.select_tag(raw);
                    app.add_tag();
                }
            }
            KeyCode::Delete | KeyCode::Backspace => {
                let id = app.highlighted_tag().map(|t| t.id);
                if let Some(id) = id {
                    app.remove_tag(id);
                }
            }
            KeyCode::Char('f') => run_filter(app, client, tx),
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        },
    }
}

/// Filter action: re-query the product listing with the current selection
fn run_filter(app: &mut App, client: &CatalogClient, tx: &mpsc::UnboundedSender<fetch::FetchEvent>) {
    let seq = app.next_products_seq();
    fetch::spawn_product_fetch(client, tx, seq, app.query());
}
