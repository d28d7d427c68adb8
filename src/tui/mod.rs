//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetch Execution
//!
//! `update()` returns `Effect::Fetch` when a stage starts. The loop spawns a
//! tokio task per fetch; the task sends the resulting `Action` back over an
//! mpsc channel, and the loop applies it on its next pass. Tasks are never
//! cancelled: the core drops responses that are no longer current.
//!
//! ## Redraw Strategy
//!
//! - **Loading** (any stage in flight): draws every ~80ms to animate spinners.
//! - **Idle**: sleeps up to 500ms, only redraws on events or fetch results.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::{CatalogSource, HttpCatalogClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::pipeline::{Fetch, run_fetch};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CategoryStripState, ProductListState, StripEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub strip: CategoryStripState,
    pub products: ProductListState,
}

impl TuiState {
    pub fn new(scroll_step: u16) -> Self {
        Self {
            strip: CategoryStripState::new(scroll_step),
            products: ProductListState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let catalog: Arc<dyn CatalogSource> = Arc::new(HttpCatalogClient::new(config.base_url));
    let mut app = App::new();
    let mut tui = TuiState::new(config.scroll_step);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from fetch tasks
    let (tx, rx) = mpsc::channel();

    // Screen mounted: categories stage runs once
    dispatch(&mut app, Action::Start, &catalog, &tx);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.strip.count = app.category_labels().len();

        let loading =
            app.categories.status().is_in_flight() || app.products.status().is_in_flight();
        if loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain all pending events before the next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::Quit => Some(Action::Quit),
                TuiEvent::Reload => Some(Action::Reload),
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.products.handle_event(&event);
                    None
                }
                _ => match tui.strip.handle_event(&event) {
                    Some(StripEvent::Scrolled(sample)) => Some(Action::StripScrolled(sample)),
                    Some(StripEvent::Tap(index)) => Some(Action::TapCategory(index)),
                    None => None,
                },
            };

            if let Some(action) = action
                && dispatch(&mut app, action, &catalog, &tx)
            {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Apply fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received fetch result");
            if dispatch(&mut app, action, &catalog, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Applies `action` and carries out the resulting effect. Returns true when
/// the app should quit.
fn dispatch(
    app: &mut App,
    action: Action,
    catalog: &Arc<dyn CatalogSource>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::Fetch(fetch) => {
            spawn_fetch(catalog.clone(), fetch, tx.clone());
            false
        }
        Effect::None => false,
    }
}

fn spawn_fetch(catalog: Arc<dyn CatalogSource>, fetch: Fetch, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch: {:?}", fetch);
    tokio::spawn(async move {
        let action = run_fetch(catalog.as_ref(), fetch).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
}
