use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{StatusLine, WorkBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(2), Min(0), Length(1)]);
    let [title_area, bar_area, viewer_area, status_area] = layout.areas(frame.area());

    // Title bar
    frame.render_widget(
        Span::raw(format!("Werkbar ({})", app.location)),
        title_area,
    );

    // Navigation bar
    let buttons = app.buttons();
    WorkBar::new(&mut tui.work_bar, &buttons).render(frame, bar_area);

    // Viewer body (the score page stand-in)
    draw_viewer(frame, viewer_area, app);

    // Status slot
    StatusLine::new(
        app.is_loading,
        app.load_warning.clone(),
        app.status_message.clone(),
    )
    .render(frame, status_area);
}

/// Centered summary of the active work and where it sits in the catalog.
fn draw_viewer(frame: &mut Frame, area: Rect, app: &App) {
    let info = app.navigation_info();
    let position = match info.current_index {
        Some(index) => format!("{} of {}", index + 1, info.total_works),
        None => "not in catalog".to_string(),
    };

    let lines = vec![
        Line::from(Span::styled(
            app.current_work.display_label(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(position, Style::default().fg(Color::DarkGray))),
        Line::default(),
        Line::from(Span::styled(
            "Ctrl+←/→ navigate   drag to swipe   Ctrl+R refresh   q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        center,
    );
}
