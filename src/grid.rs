use std::fmt;
use std::io;

use crate::geometry::{Point, Size};
use crate::sink::{Cell, GridSink};

/// 2D character grid for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    pub width: usize,
    pub height: usize,
}

impl Grid {
    /// Create a new grid filled with blank cells
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![Cell::BLANK; width]; height],
            width,
            height,
        }
    }

    /// Set a cell at given position (bounds-checked)
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y][x] = cell;
        }
    }

    /// Get character at given position
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cell(x, y).map(|c| c.ch)
    }

    /// Get the full cell, colors included
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get(y).and_then(|row| row.get(x))
    }

    /// Reset every cell to blank
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::BLANK);
        }
    }
}

impl GridSink for Grid {
    fn dimensions(&self) -> Size {
        Size::new(self.height, self.width)
    }

    fn put(&mut self, point: Point, cell: Cell) -> io::Result<()> {
        self.set(point.x, point.y, cell);
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Find the last row that has non-space content
        let last_non_empty = self
            .cells
            .iter()
            .rposition(|row| row.iter().any(|c| c.ch != ' '))
            .unwrap_or(0);

        for (i, row) in self.cells.iter().take(last_non_empty + 1).enumerate() {
            let line: String = row.iter().map(|c| c.ch).collect();
            write!(f, "{}", line.trim_end())?;
            if i < last_non_empty {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
