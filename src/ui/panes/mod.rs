//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`intro`]: count prompt shown before a set exists
//! - [`grid`]: the number grid with swap and pivot highlighting
//! - [`controls`]: the Sort and Reset buttons
//! - [`status`]: status bar with direction, messages and keybindings
//!
//! Panes that draw something clickable record its area in a [`HitMap`], which
//! the app consults when a mouse click arrives.

pub mod controls;
pub mod grid;
pub mod intro;
pub mod status;

pub use controls::render_controls;
pub use grid::{render_grid_pane, GridView};
pub use intro::render_intro;
pub use status::{render_status_bar, StatusRenderData};

use ratatui::layout::{Position, Rect};

/// Something the user can click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Cell(usize),
    Sort,
    Reset,
    Enter,
}

/// Clickable areas from the last frame
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: Target) {
        self.regions.push((area, target));
    }

    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|&(_, target)| target)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rect, Target)> + '_ {
        self.regions.iter().copied()
    }
}
