//! Terminal rendering.
//!
//! The screen is the current tree's element, painted by
//! [`elements::Painter`], above a one-line status bar. A load still in
//! flight for the first tree shows the loading view; a failed load shows
//! the error view.

pub mod elements;
mod theme;

pub use elements::{natural_height, Painter};
pub use theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FOCUS, COLOR_HEADER};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::loader::{LoadError, LoadState};

const HINTS: &str = "Tab/Shift+Tab focus · Enter activate · Ctrl+C quit";

/// Draw one frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [body, status] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

    match app.screen() {
        LoadState::Loading => render_loading(frame, body),
        LoadState::Error(e) => render_error(frame, body, e),
        LoadState::Success(_) => {
            let focus = app.focus();
            if let Some(element) = app.view() {
                Painter::new(focus).paint(frame, body, &element);
            }
        }
    }

    render_status(frame, status, app.is_loading());
}

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(Span::styled(
        "Loading…",
        Style::default().fg(COLOR_ACTIVE),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(text, centered_line(area));
}

pub fn render_error(frame: &mut Frame, area: Rect, error: &LoadError) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ERROR))
        .title(Span::styled(
            " Load failed ",
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ));
    let text = Paragraph::new(format!("Error: {}", error.reason()))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(text, area);
}

fn render_status(frame: &mut Frame, area: Rect, loading: bool) {
    let mut spans = Vec::new();
    if loading {
        spans.push(Span::styled("Loading… ", Style::default().fg(COLOR_ACTIVE)));
    }
    spans.push(Span::styled(HINTS, Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_error_view_shows_reason() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| {
                render_error(frame, frame.area(), &LoadError::new("file not found"));
            })
            .unwrap();
        assert!(screen_text(&terminal).contains("Error: file not found"));
    }

    #[test]
    fn test_initial_screen_is_loading() {
        let mut app = App::new(Registry::new());
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Loading"));
        assert!(text.contains("Ctrl+C quit"));
    }
}
