//! Sort / Reset buttons under the grid

use super::{HitMap, Target};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

const BUTTON_WIDTH: u16 = 12;

pub fn render_controls(frame: &mut Frame, area: Rect, sorting: bool, hits: &mut HitMap) {
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .spacing(2)
        .constraints([Constraint::Length(BUTTON_WIDTH), Constraint::Length(BUTTON_WIDTH)])
        .split(area);

    let sort_style = if sorting {
        Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black)
    } else {
        Style::default()
            .bg(DEFAULT_THEME.primary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    };
    let reset_style = Style::default()
        .bg(DEFAULT_THEME.secondary)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    frame.render_widget(Paragraph::new(" [s] Sort ").style(sort_style), buttons[0]);
    frame.render_widget(Paragraph::new(" [r] Reset ").style(reset_style), buttons[1]);

    hits.push(buttons[0], Target::Sort);
    hits.push(buttons[1], Target::Reset);
}
