use glam::UVec2;

use crate::types::{ColliderConfig, GridStats};

/// Dense occupancy grid: `height` rows of `width` cells in one row-major buffer.
///
/// Only the rasterizer writes to a grid; once built it is read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: u32,
    height: u32,
}

impl Grid {
    /// All-`false` grid. Zero dimensions give an empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self { cells: vec![false; len], width, height }
    }

    /// Grid sized to a config's projected dimensions.
    pub fn for_config(cfg: &ColliderConfig) -> Self {
        Self::new(cfg.projected_width(), cfg.projected_height())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if the grid has the dimensions `cfg` projects.
    pub fn matches(&self, cfg: &ColliderConfig) -> bool {
        self.width == cfg.projected_width() && self.height == cfg.projected_height()
    }

    /// Flat index of `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row as usize * self.width as usize + col as usize)
        } else {
            None
        }
    }

    /// Occupancy of `(row, col)`. Cells outside the grid read as unoccupied.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> bool {
        self.index(row, col).is_some_and(|i| self.cells[i])
    }

    /// One row as a slice.
    pub fn row(&self, row: u32) -> Option<&[bool]> {
        if row >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = row as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// Any occupied cell in `row` within columns `[col_start, col_end)`.
    /// The column range is clipped to the grid.
    #[inline]
    pub(crate) fn row_span_occupied(&self, row: u32, col_start: u32, col_end: u32) -> bool {
        let Some(cells) = self.row(row) else { return false };
        let end = col_end.min(self.width) as usize;
        let start = (col_start as usize).min(end);
        cells[start..end].iter().any(|&c| c)
    }

    /// Any occupied cell in `col` within rows `[row_start, row_end)`.
    /// The row range is clipped to the grid.
    #[inline]
    pub(crate) fn col_span_occupied(&self, col: u32, row_start: u32, row_end: u32) -> bool {
        if col >= self.width {
            return false;
        }
        (row_start..row_end.min(self.height)).any(|row| self.get(row, col))
    }

    /// Mark `(row, col)` occupied. Returns false if the cell is outside the grid.
    #[inline]
    pub(crate) fn mark(&mut self, row: u32, col: u32) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = true;
                true
            }
            None => false,
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn stats(&self) -> GridStats {
        GridStats { cells: self.len(), occupied: self.occupied_count() }
    }

    /// Debug rendering: `#` for occupied, `.` for free, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.height as usize);
        for row in 0..self.height {
            if let Some(cells) = self.row(row) {
                out.extend(cells.iter().map(|&c| if c { '#' } else { '.' }));
            }
            out.push('\n');
        }
        out
    }
}
