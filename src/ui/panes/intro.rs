//! Count prompt

use super::{HitMap, Target};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

const PROMPT: &str = "Enter number of values:";

pub fn render_intro(frame: &mut Frame, area: Rect, input: &str, hits: &mut HitMap) {
    let [column] = Layout::horizontal([Constraint::Length(40)])
        .flex(Flex::Center)
        .areas(area);
    let [label_area, input_area, button_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .spacing(1)
    .areas(column);

    frame.render_widget(
        Paragraph::new(Line::from(PROMPT))
            .alignment(Alignment::Center)
            .style(Style::default().fg(DEFAULT_THEME.fg)),
        label_area,
    );

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );
    let inner = input_block.inner(input_area);
    frame.render_widget(
        Paragraph::new(input)
            .block(input_block)
            .style(Style::default().fg(DEFAULT_THEME.fg)),
        input_area,
    );
    let cursor_x = inner
        .x
        .saturating_add(input.chars().count() as u16)
        .min(inner.right().saturating_sub(1));
    frame.set_cursor_position(Position::new(cursor_x, inner.y));

    let [button] = Layout::horizontal([Constraint::Length(11)])
        .flex(Flex::Center)
        .areas(button_area);
    frame.render_widget(
        Paragraph::new(" ↵ Enter ").style(
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        button,
    );
    hits.push(button, Target::Enter);
}
