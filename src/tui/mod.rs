//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the bar and
//! viewer, and translates keyboard/pointer events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Input lifetime
//!
//! All bindings live exactly as long as the event loop: the mode guard
//! enables mouse capture on entry and its `Drop` restores the terminal, so
//! a `refresh` re-renders without ever reattaching anything and quitting
//! detaches everything.
//!
//! ## Redraw strategy
//!
//! Conditional redraw: the loop only draws after an input event, a
//! background action, or a resize. While a fetch is in flight the poll
//! timeout is short so the result is picked up promptly; idle polls sleep
//! longer.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::catalog::{self, HttpCatalogSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{WorkBarEvent, WorkBarState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub work_bar: WorkBarState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            work_bar: WorkBarState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture feeds both button clicks and drag gestures
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
    let source = Arc::new(HttpCatalogSource::new(config.catalog_url.clone()));
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handles for the in-flight catalog fetch (a reload cancels it)
    let mut active_abort_handles: Vec<tokio::task::AbortHandle> = Vec::new();

    // The initial load goes through the same path as an explicit refresh
    let effect = update(&mut app, Action::Refresh);
    perform_effect(
        effect,
        &app,
        &mut tui,
        &tx,
        &mut active_abort_handles,
    );

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Short poll while a fetch is pending so its outcome shows promptly
        let timeout = if app.is_loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // A resize is a fresh render cycle: the bar re-hides and the
            // fitter runs against the new viewport
            if matches!(event, TuiEvent::Resize) {
                tui.work_bar.begin_cycle();
                continue;
            }

            if matches!(event, TuiEvent::Quit | TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Keyboard shortcuts map straight to actions
            let action = match event {
                TuiEvent::Previous => Some(Action::Previous),
                TuiEvent::Next => Some(Action::Next),
                TuiEvent::Refresh => Some(Action::Refresh),
                _ => None,
            };
            if let Some(action) = action {
                let effect = update(&mut app, action);
                should_quit |= perform_effect(
                    effect,
                    &app,
                    &mut tui,
                    &tx,
                    &mut active_abort_handles,
                );
                continue;
            }

            // Everything else is the bar's input surface: scroll arrows,
            // clicks and drags
            if let Some(bar_event) = tui.work_bar.handle_event(&event) {
                let action = match bar_event {
                    WorkBarEvent::Activate(id) => Action::Activate(id),
                    WorkBarEvent::Swipe(direction) => Action::Swipe(direction),
                };
                let effect = update(&mut app, action);
                should_quit |= perform_effect(
                    effect,
                    &app,
                    &mut tui,
                    &tx,
                    &mut active_abort_handles,
                );
            }
        }

        // Handle background task actions (load outcomes)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let list_changed = matches!(action, Action::WorksLoaded(_));
            let effect = update(&mut app, action);
            if list_changed {
                // The list is new: re-render and re-fit from hidden
                tui.work_bar.begin_cycle();
            }
            should_quit |= perform_effect(
                effect,
                &app,
                &mut tui,
                &tx,
                &mut active_abort_handles,
            );
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Performs the side effect an update asked for. Returns true when the loop
/// should quit.
fn perform_effect(
    effect: Effect,
    app: &App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    handles: &mut Vec<tokio::task::AbortHandle>,
) -> bool {
    match effect {
        Effect::SpawnLoad => {
            *handles = spawn_load(app, tx.clone());
            tui.work_bar.begin_cycle();
            false
        }
        Effect::Reload => {
            // Page transition: the outgoing page's fetch does not outlive it
            for handle in handles.drain(..) {
                handle.abort();
            }
            *handles = spawn_load(app, tx.clone());
            tui.work_bar.begin_cycle();
            false
        }
        Effect::Quit => true,
        Effect::None => false,
    }
}

/// Spawns a catalog fetch reporting back over the action channel.
fn spawn_load(app: &App, tx: mpsc::Sender<Action>) -> Vec<tokio::task::AbortHandle> {
    info!("Spawning catalog load");

    let source = app.source.clone();
    let default_work = app.default_work.clone();

    let handle = tokio::spawn(async move {
        let outcome = catalog::load(source.as_ref(), &default_work).await;
        if tx.send(Action::WorksLoaded(outcome)).is_err() {
            warn!("Failed to send load outcome: receiver dropped");
        }
    });

    vec![handle.abort_handle()]
}
