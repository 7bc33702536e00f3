use alloc::string::String;
use alloc::vec::Vec;

use crate::{Cell, Row};

/// A half-open range of grid lines, `[start, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpan {
    pub start: u32,
    pub end: u32, // exclusive
}

impl GridSpan {
    pub fn new(start: u32, len: u32) -> Self {
        Self {
            start,
            end: start.saturating_add(len),
        }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, line: u32) -> bool {
        self.start <= line && line < self.end
    }

    /// CSS grid placement, e.g. `"2 / 4"`.
    pub fn css(&self) -> String {
        alloc::format!("{} / {}", self.start, self.end)
    }
}

/// A cell placed in the two-dimensional grid.
pub struct PositionedCell<'a, M = ()> {
    pub row: &'a Row<M>,
    pub cell: &'a Cell<M>,
    pub cell_index: usize,
    pub rows: GridSpan,
    pub columns: GridSpan,
}

impl<'a, M> PositionedCell<'a, M> {
    pub fn row_id(&self) -> &'a str {
        &self.row.id
    }

    /// Key unique across the grid as long as row ids are unique: `"{row_id}-{cell_id}"`.
    pub fn key(&self) -> String {
        alloc::format!("{}-{}", self.row.id, self.cell.id)
    }
}

impl<M> Clone for PositionedCell<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for PositionedCell<'_, M> {}

impl<M> core::fmt::Debug for PositionedCell<'_, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PositionedCell")
            .field("row_id", &self.row.id)
            .field("cell_id", &self.cell.id)
            .field("cell_index", &self.cell_index)
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .finish()
    }
}

/// Lays out `rows` starting at row line 1 and column line 1.
pub fn layout<M>(rows: &[Row<M>]) -> Vec<PositionedCell<'_, M>> {
    layout_from(rows, 1, 1)
}

/// Lays out `rows` starting at the given grid lines.
///
/// Each row's cells span as many rows as the row has direct children (at least one). Child rows
/// are placed starting on the parent's row line, in the columns after the parent's cells.
pub fn layout_from<M>(
    rows: &[Row<M>],
    start_row: u32,
    start_col: u32,
) -> Vec<PositionedCell<'_, M>> {
    let mut out = Vec::new();
    for_each_positioned(rows, start_row, start_col, |p| out.push(p));
    out
}

/// Visits every positioned cell in document order without collecting.
///
/// Returns the row line following the last laid-out row.
pub fn for_each_positioned<'a, M>(
    rows: &'a [Row<M>],
    start_row: u32,
    start_col: u32,
    mut f: impl FnMut(PositionedCell<'a, M>),
) -> u32 {
    gdebug!(rows = rows.len(), start_row, start_col, "layout");
    crate::validate::report(rows);
    place(rows, start_row, start_col, &mut f)
}

fn place<'a, M>(
    rows: &'a [Row<M>],
    start_row: u32,
    start_col: u32,
    f: &mut dyn FnMut(PositionedCell<'a, M>),
) -> u32 {
    let mut row_line = start_row;
    for row in rows {
        let mut col_line = start_col;
        let child_count = row.child_rows.len().max(1) as u32;
        let row_span = GridSpan::new(row_line, child_count);
        for (cell_index, cell) in row.cells.iter().enumerate() {
            let columns = GridSpan::new(col_line, cell.column_span);
            f(PositionedCell {
                row,
                cell,
                cell_index,
                rows: row_span,
                columns,
            });
            col_line = columns.end;
        }

        if row.has_child_rows() {
            place(&row.child_rows, row_line, col_line, f);
        }
        row_line = row_line.saturating_add(child_count);
    }
    row_line
}

/// How many row and column tracks `cells` occupy, as `(rows, columns)`.
///
/// Returns `(0, 0)` for an empty slice.
pub fn grid_extent<M>(cells: &[PositionedCell<'_, M>]) -> (u32, u32) {
    cells.iter().fold((0u32, 0u32), |(r, c), p| {
        (r.max(p.rows.end.saturating_sub(1)), c.max(p.columns.end.saturating_sub(1)))
    })
}
