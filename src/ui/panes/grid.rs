//! Number grid rendering
//!
//! Cells follow [`GridLayout`]: up to ten rows, filled row-major. When the
//! grid has more columns than fit, it scrolls horizontally so the cursor
//! column stays visible.

use super::{HitMap, Target};
use crate::grid::GridLayout;
use crate::numbers::{NumberSet, SMALL_THRESHOLD};
use crate::sorter::Highlight;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Narrowest a cell may get: four digits plus border and padding
pub const MIN_CELL_WIDTH: u16 = 8;

/// What the grid pane shows
pub struct GridView<'a> {
    pub numbers: &'a NumberSet,
    pub highlight: Highlight,
    pub cursor: usize,
    pub sorting: bool,
}

/// First visible column so that `cursor_col` is on screen
pub fn scroll_to_cursor(col_offset: usize, cursor_col: usize, visible_cols: usize) -> usize {
    let visible_cols = visible_cols.max(1);
    if cursor_col < col_offset {
        cursor_col
    } else if cursor_col >= col_offset + visible_cols {
        cursor_col + 1 - visible_cols
    } else {
        col_offset
    }
}

pub fn render_grid_pane(
    frame: &mut Frame,
    area: Rect,
    view: &GridView,
    col_offset: &mut usize,
    hits: &mut HitMap,
) {
    let layout = GridLayout::for_len(view.numbers.len());

    let title = if view.sorting {
        format!(" Numbers ({}) - sorting ", layout.len)
    } else {
        format!(" Numbers ({}) ", layout.len)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let visible_cols = ((inner.width / MIN_CELL_WIDTH) as usize).clamp(1, layout.cols);
    let cursor_col = layout.position(view.cursor).map_or(0, |(_, col)| col);
    *col_offset = scroll_to_cursor(*col_offset, cursor_col, visible_cols)
        .min(layout.cols.saturating_sub(visible_cols));

    let cell_width = inner.width / visible_cols as u16;
    let cell_height = (inner.height / layout.rows as u16).max(1);
    let bordered = cell_height >= 3;

    for row in 0..layout.rows {
        let y = inner.y + row as u16 * cell_height;
        if y + cell_height > inner.y + inner.height {
            break;
        }
        for visible in 0..visible_cols {
            let col = *col_offset + visible;
            if col >= layout.cols {
                break;
            }
            let cell = Rect::new(
                inner.x + visible as u16 * cell_width,
                y,
                cell_width,
                cell_height,
            );

            match layout.index_at(row, col) {
                Some(index) => {
                    render_cell(frame, cell, view, index, bordered);
                    hits.push(cell, Target::Cell(index));
                }
                None => render_placeholder(frame, cell, bordered),
            }
        }
    }
}

fn cell_style(view: &GridView, index: usize, value: u32) -> Style {
    let base = if view.highlight.is_pivot(index) {
        Style::default()
            .bg(DEFAULT_THEME.pivot)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if view.highlight.is_swapped(index) {
        Style::default()
            .bg(DEFAULT_THEME.swapped)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if value <= SMALL_THRESHOLD {
        Style::default().fg(DEFAULT_THEME.small_value)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    if index == view.cursor {
        base.add_modifier(Modifier::UNDERLINED)
    } else {
        base
    }
}

fn render_cell(frame: &mut Frame, area: Rect, view: &GridView, index: usize, bordered: bool) {
    let value = view.numbers[index];
    let style = cell_style(view, index, value);
    let mut paragraph = Paragraph::new(value.to_string())
        .alignment(Alignment::Center)
        .style(style);

    if bordered {
        let border_style = if index == view.cursor {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        };
        paragraph = paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    } else if index == view.cursor {
        paragraph = paragraph.style(style.add_modifier(Modifier::REVERSED));
    }

    frame.render_widget(paragraph, area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, bordered: bool) {
    let style = Style::default()
        .fg(DEFAULT_THEME.comment)
        .add_modifier(Modifier::DIM);
    let mut paragraph = Paragraph::new("").style(style);
    if bordered {
        paragraph = paragraph.block(Block::default().borders(Borders::ALL).border_style(style));
    }
    frame.render_widget(paragraph, area);
}
