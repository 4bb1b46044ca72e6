//! Mapping between set indices and grid cells
//!
//! The grid has at most [`MAX_ROWS`] rows and `ceil(len / MAX_ROWS)` columns,
//! filled row-major. Trailing cells past the end of the set are placeholders.

/// Row cap of the grid
pub const MAX_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub len: usize,
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    pub fn for_len(len: usize) -> Self {
        GridLayout {
            len,
            rows: len.min(MAX_ROWS),
            cols: len.div_ceil(MAX_ROWS),
        }
    }

    /// Number of cells including placeholders
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Cell holding `index`, if it is inside the set
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.len {
            return None;
        }
        Some((index / self.cols, index % self.cols))
    }

    /// Set index shown at `(row, col)`; `None` for placeholders and cells
    /// outside the grid
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let index = row * self.cols + col;
        (index < self.len).then_some(index)
    }

    /// Move from `index` by `(d_row, d_col)` cells, staying on real cells.
    ///
    /// Returns `index` unchanged when the target is a placeholder or off-grid.
    pub fn step(&self, index: usize, d_row: isize, d_col: isize) -> usize {
        let Some((row, col)) = self.position(index) else {
            return index;
        };
        let (Some(row), Some(col)) = (
            row.checked_add_signed(d_row),
            col.checked_add_signed(d_col),
        ) else {
            return index;
        };
        self.index_at(row, col).unwrap_or(index)
    }
}
