//! # StatusLine Component
//!
//! The designated status slot under the viewer: shows the loading
//! placeholder while a fetch is in flight, the loader warning when the
//! catalog could not be loaded, and transient status messages otherwise.
//!
//! Purely presentational: all three props come from core `App` state, the
//! component just renders what it is given.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

/// Placeholder text while the catalog is being fetched.
pub const LOADING_PLACEHOLDER: &str = "Loading works…";

pub struct StatusLine {
    /// A catalog fetch is in flight.
    pub is_loading: bool,
    /// Degraded-mode warning from the loader, if any.
    pub warning: Option<String>,
    /// Transient status text shown when there is nothing more urgent.
    pub status_message: String,
}

impl StatusLine {
    pub fn new(is_loading: bool, warning: Option<String>, status_message: String) -> Self {
        Self {
            is_loading,
            warning,
            status_message,
        }
    }
}

impl Component for StatusLine {
    /// Priority order: loading placeholder, then warning, then status. The
    /// warning outlives the fetch that produced it, so degraded mode stays
    /// visible.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = if self.is_loading {
            Span::styled(
                LOADING_PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )
        } else if let Some(warning) = &self.warning {
            Span::styled(warning.clone(), Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::DarkGray),
            )
        };
        frame.render_widget(span, area);
    }
}
