use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

/// Modifier set accepted as the platform "command" key for the navigation
/// shortcuts (Ctrl on most terminals, Meta/Super where the terminal reports
/// it).
const COMMAND_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::META)
    .union(KeyModifiers::SUPER);

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit,
    /// Ctrl/Meta + ArrowLeft
    Previous,
    /// Ctrl/Meta + ArrowRight
    Next,
    /// Ctrl+R re-runs the loader
    Refresh,
    /// Plain arrows scroll the bar when scrolling is enabled
    ScrollLeft,
    ScrollRight,
    MouseDown(u16, u16),
    MouseUp(u16, u16),
    Resize,
}

/// Poll for an event with timeout (blocks up to `timeout`)
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (m, KeyCode::Left) if m.intersects(COMMAND_MODIFIERS) => {
                        Some(TuiEvent::Previous)
                    }
                    (m, KeyCode::Right) if m.intersects(COMMAND_MODIFIERS) => {
                        Some(TuiEvent::Next)
                    }
                    (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                    (_, KeyCode::Left) => Some(TuiEvent::ScrollLeft),
                    (_, KeyCode::Right) => Some(TuiEvent::ScrollRight),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(TuiEvent::MouseDown(mouse_event.column, mouse_event.row))
                }
                MouseEventKind::Up(MouseButton::Left) => {
                    Some(TuiEvent::MouseUp(mouse_event.column, mouse_event.row))
                }
                _ => None,
            },
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
