//! Painting [`Element`] trees.
//!
//! Layout is top-down: a column gives each child its natural height, a row
//! splits its width evenly. Interactive elements are numbered in the same
//! depth-first order as [`Element::focusables`], which is how the focused
//! one is found.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::render::Element;
use crate::ui::theme::{COLOR_BORDER, COLOR_ERROR, COLOR_FOCUS, COLOR_HEADER};

/// Rows `element` wants when laid out in a column.
pub fn natural_height(element: &Element) -> u16 {
    match element {
        Element::Empty => 0,
        Element::Text(text) => text.lines().count().max(1) as u16,
        Element::Column(children) => children.iter().map(natural_height).sum(),
        Element::Row(children) => children.iter().map(natural_height).max().unwrap_or(0),
        Element::Card { content, .. } | Element::Button { content, .. } => {
            content.iter().map(natural_height).sum::<u16>().saturating_add(2)
        }
        Element::TextField { .. } => 3,
        Element::Spacer(rows) => *rows,
        Element::Unknown { .. } => 4,
    }
}

/// Paints one element tree with the `focus`-th interactive element
/// highlighted.
pub struct Painter {
    focus: Option<usize>,
    next: usize,
}

impl Painter {
    pub fn new(focus: Option<usize>) -> Self {
        Self { focus, next: 0 }
    }

    pub fn paint(&mut self, frame: &mut Frame, area: Rect, element: &Element) {
        match element {
            Element::Empty => {}
            Element::Text(text) => {
                frame.render_widget(Paragraph::new(text.as_str()), area);
            }
            Element::Column(children) => self.paint_column(frame, area, children),
            Element::Row(children) => self.paint_row(frame, area, children),
            Element::Card { title, content } => {
                let mut block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(COLOR_BORDER));
                if let Some(title) = title {
                    block = block.title(Span::styled(
                        format!(" {} ", title),
                        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                    ));
                }
                let inner = block.inner(area);
                frame.render_widget(block, area);
                self.paint_column(frame, inner, content);
            }
            Element::Button { content, .. } => {
                let focused = self.take_focus();
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style(focused));
                let inner = block.inner(area);
                frame.render_widget(block, area);
                self.paint_column(frame, inner, content);
            }
            Element::TextField { label, value, .. } => {
                let focused = self.take_focus();
                let mut block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style(focused));
                if let Some(label) = label {
                    block = block.title(format!(" {} ", label));
                }
                let mut spans = vec![Span::raw(value.as_str())];
                if focused {
                    spans.push(Span::styled("_", Style::default().fg(COLOR_FOCUS)));
                }
                frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
            }
            Element::Spacer(_) => {}
            Element::Unknown { kind, key } => {
                let style = Style::default().fg(COLOR_ERROR);
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(style);
                let lines = vec![
                    Line::styled(kind.label(), style.add_modifier(Modifier::BOLD)),
                    Line::styled(key.as_str(), style),
                ];
                frame.render_widget(Paragraph::new(lines).block(block), area);
            }
        }
    }

    fn paint_column(&mut self, frame: &mut Frame, area: Rect, children: &[Element]) {
        let constraints = children
            .iter()
            .map(|child| Constraint::Length(natural_height(child)));
        let areas = Layout::vertical(constraints).split(area);
        for (child, child_area) in children.iter().zip(areas.iter()) {
            self.paint(frame, *child_area, child);
        }
    }

    fn paint_row(&mut self, frame: &mut Frame, area: Rect, children: &[Element]) {
        let areas = Layout::horizontal(children.iter().map(|_| Constraint::Fill(1))).split(area);
        for (child, child_area) in children.iter().zip(areas.iter()) {
            self.paint(frame, *child_area, child);
        }
    }

    /// Number the next interactive element; true if it has focus.
    fn take_focus(&mut self) -> bool {
        let index = self.next;
        self.next += 1;
        self.focus == Some(index)
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(COLOR_FOCUS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_BORDER)
    }
}
