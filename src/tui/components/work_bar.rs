//! # WorkBar Component
//!
//! The button row: one button per catalog entry, the active work
//! highlighted, laid out by the responsive fitter. Follows the persistent
//! state + transient wrapper pattern:
//! - `WorkBarState` lives in `TuiState` across frames
//! - `WorkBar` is created each frame with borrowed state and the button
//!   model as props
//!
//! A render cycle starts hidden (`begin_cycle`), runs the fitter against the
//! current viewport width, and only then paints, so the first visible frame
//! already has its final layout. Resize and list changes start a fresh
//! cycle.
//!
//! The bar owns its input surface: pointer presses/releases feed the swipe
//! tracker, releases that were not swipes are hit-tested against the button
//! zones cached during rendering. Scroll arrows only act while the fit plan
//! has scrolling enabled.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::fit::{self, BarAlignment, FitPlan, Visibility};
use crate::core::gesture::{SwipeDirection, SwipeTracker};
use crate::core::nav::WorkButton;
use crate::core::work::WorkId;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Horizontal drag distance, in cells, that counts as a swipe.
pub const SWIPE_CELLS: i32 = 8;

/// Screen-space zone of one rendered button, cached for pointer lookup.
#[derive(Debug, Clone)]
struct HitZone {
    x0: u16,
    x1: u16,
    row: u16,
    id: WorkId,
}

/// Events emitted by the work bar.
#[derive(Debug, PartialEq, Eq)]
pub enum WorkBarEvent {
    /// A button was clicked.
    Activate(WorkId),
    /// A horizontal drag completed as a swipe.
    Swipe(SwipeDirection),
}

/// Persistent presentation state of the bar.
pub struct WorkBarState {
    pub visibility: Visibility,
    pub plan: FitPlan,
    pub scroll: ScrollViewState,
    swipe: SwipeTracker,
    hit_zones: Vec<HitZone>,
}

impl WorkBarState {
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Hidden,
            plan: FitPlan::reset(),
            scroll: ScrollViewState::default(),
            swipe: SwipeTracker::with_threshold(SWIPE_CELLS),
            hit_zones: Vec::new(),
        }
    }

    /// Starts a fresh render cycle: the bar is hidden until the fitter runs
    /// again, and the scroll position is forgotten.
    pub fn begin_cycle(&mut self) {
        self.visibility.reset();
        self.scroll = ScrollViewState::default();
    }

    /// Runs the fitter for the given works and viewport width.
    pub fn fit(&mut self, works: &[WorkId], viewport_width: u16) {
        self.visibility.begin_measuring();
        self.plan = fit::plan_layout(works, viewport_width);
        self.visibility.finish();
    }

    /// The work under the given screen position, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<&WorkId> {
        self.hit_zones
            .iter()
            .find(|zone| zone.row == row && column >= zone.x0 && column < zone.x1)
            .map(|zone| &zone.id)
    }
}

impl Default for WorkBarState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for WorkBarState {
    type Event = WorkBarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<WorkBarEvent> {
        match event {
            TuiEvent::ScrollLeft => {
                if self.plan.scroll {
                    let offset = self.scroll.offset();
                    self.scroll
                        .set_offset(Position::new(offset.x.saturating_sub(1), offset.y));
                }
                None
            }
            TuiEvent::ScrollRight => {
                if self.plan.scroll {
                    let offset = self.scroll.offset();
                    self.scroll
                        .set_offset(Position::new(offset.x.saturating_add(1), offset.y));
                }
                None
            }
            TuiEvent::MouseDown(column, _) => {
                self.swipe.press(*column as i32);
                None
            }
            TuiEvent::MouseUp(column, row) => {
                if let Some(direction) = self.swipe.release(*column as i32) {
                    return Some(WorkBarEvent::Swipe(direction));
                }
                self.hit_test(*column, *row)
                    .cloned()
                    .map(WorkBarEvent::Activate)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper borrowing the persistent state and the button
/// model.
pub struct WorkBar<'a> {
    state: &'a mut WorkBarState,
    buttons: &'a [WorkButton],
}

impl<'a> WorkBar<'a> {
    pub fn new(state: &'a mut WorkBarState, buttons: &'a [WorkButton]) -> Self {
        Self { state, buttons }
    }

    fn button_style(active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn bar_line(&self, labels: &[String]) -> Line<'static> {
        let mut spans: Vec<Span> = Vec::with_capacity(labels.len() * 2);
        for (button, label) in self.buttons.iter().zip(labels) {
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {label} "),
                Self::button_style(button.active),
            ));
        }
        Line::from(spans)
    }
}

impl Component for WorkBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // A fresh cycle measures before anything is painted; the hidden
        // frame never reaches the screen.
        if !self.state.visibility.is_visible() {
            let works: Vec<WorkId> = self.buttons.iter().map(|b| b.id.clone()).collect();
            self.state.fit(&works, area.width);
        }

        self.state.hit_zones.clear();
        if self.buttons.is_empty() || area.height == 0 {
            return;
        }

        let labels: Vec<String> = self
            .buttons
            .iter()
            .map(|b| self.state.plan.label(&b.id))
            .collect();
        let total_width = fit::row_width(labels.iter().map(String::as_str));
        let line = self.bar_line(&labels);

        if self.state.plan.scroll {
            self.render_scrolling(frame, area, line, total_width, &labels);
        } else {
            self.render_static(frame, area, line, total_width, &labels);
        }
    }
}

impl WorkBar<'_> {
    /// Centered (or left) single-line rendering when the bar fits.
    fn render_static(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        line: Line,
        total_width: u16,
        labels: &[String],
    ) {
        let x = match self.state.plan.alignment {
            BarAlignment::Center => area.x + area.width.saturating_sub(total_width) / 2,
            BarAlignment::Left => area.x,
        };
        let row = Rect::new(x, area.y, total_width.min(area.width.saturating_sub(x - area.x)), 1);
        frame.render_widget(Paragraph::new(line), row);

        let mut cursor = x;
        for (button, label) in self.buttons.iter().zip(labels) {
            let width = fit::button_width(label);
            let x1 = (cursor + width).min(area.x + area.width);
            if cursor < x1 {
                self.state.hit_zones.push(HitZone {
                    x0: cursor,
                    x1,
                    row: area.y,
                    id: button.id.clone(),
                });
            }
            cursor += width + fit::BUTTON_GAP;
        }
    }

    /// Left-aligned rendering inside a horizontal scroll view when even the
    /// short labels overflow.
    fn render_scrolling(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        line: Line,
        total_width: u16,
        labels: &[String],
    ) {
        let mut scroll_view = ScrollView::new(Size::new(total_width, 1))
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Always)
            .vertical_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(Paragraph::new(line), Rect::new(0, 0, total_width, 1));
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll);

        // Map content-space button intervals to screen-space zones, clipped
        // to the visible window.
        let offset_x = self.state.scroll.offset().x;
        let window_end = offset_x.saturating_add(area.width);
        let mut content_x: u16 = 0;
        for (button, label) in self.buttons.iter().zip(labels) {
            let width = fit::button_width(label);
            let start = content_x.max(offset_x);
            let end = (content_x + width).min(window_end);
            if start < end {
                self.state.hit_zones.push(HitZone {
                    x0: area.x + (start - offset_x),
                    x1: area.x + (end - offset_x),
                    row: area.y,
                    id: button.id.clone(),
                });
            }
            content_x += width + fit::BUTTON_GAP;
        }
    }
}
