use alloc::vec::Vec;
use core::fmt;

use crate::{Cell, Renderer, Row};

/// A cell placed in a physical table row, with its effective row span.
pub struct FlatCell<'a, M = ()> {
    pub cell: &'a Cell<M>,
    /// The tree row the cell was declared in.
    pub row: &'a Row<M>,
    pub cell_index: usize,
    /// Number of physical rows the cell covers (>= 1).
    pub row_span: u32,
    /// Zero-based index of the physical row the cell is emitted in.
    pub physical_row: usize,
    /// Polarity of the top-level row whose subtree the cell belongs to.
    pub is_header_row: bool,
}

impl<'a, M> FlatCell<'a, M> {
    /// Id of the tree row the cell was declared in.
    pub fn row_id(&self) -> &'a str {
        &self.row.id
    }

    pub fn column_span(&self) -> u32 {
        self.cell.column_span
    }

    /// Whether the cell renders as a header cell: declared as one, or part of a header row's
    /// subtree.
    pub fn is_header(&self) -> bool {
        self.cell.is_header_cell || self.is_header_row
    }

    /// The cell's own renderer, falling back to its row's.
    pub fn renderer(&self) -> Option<&'a Renderer<M>> {
        self.cell.renderer.as_ref().or(self.row.row_renderer.as_ref())
    }
}

impl<M> Clone for FlatCell<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for FlatCell<'_, M> {}

impl<M> fmt::Debug for FlatCell<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatCell")
            .field("row_id", &self.row.id)
            .field("cell_id", &self.cell.id)
            .field("row_span", &self.row_span)
            .field("physical_row", &self.physical_row)
            .field("is_header_row", &self.is_header_row)
            .finish()
    }
}

/// One physical table row.
pub struct FlatRow<'a, M = ()> {
    /// Id of the outermost tree row whose cells open this physical row.
    pub id: &'a str,
    pub is_header_row: bool,
    pub cells: Vec<FlatCell<'a, M>>,
}

impl<M> FlatRow<'_, M> {
    /// Rebuilds a plain tree row from this physical row.
    ///
    /// Cells keep their effective renderer, so a row renderer inherited from a parent row survives
    /// the conversion. Row spans are not carried over.
    pub fn to_row(&self) -> Row<M> {
        let cells = self
            .cells
            .iter()
            .map(|fc| {
                let mut cell = fc.cell.clone();
                cell.renderer = fc.renderer().cloned();
                cell
            })
            .collect();
        Row::new(self.id, cells).with_header_row(self.is_header_row)
    }
}

impl<M> Clone for FlatRow<'_, M> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            is_header_row: self.is_header_row,
            cells: self.cells.clone(),
        }
    }
}

impl<M> fmt::Debug for FlatRow<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatRow")
            .field("id", &self.id)
            .field("is_header_row", &self.is_header_row)
            .field("cells", &self.cells)
            .finish()
    }
}

/// Number of physical rows `row` occupies once flattened.
pub fn row_span<M>(row: &Row<M>) -> u32 {
    if row.child_rows.is_empty() {
        return 1;
    }
    row.child_rows
        .iter()
        .fold(0u32, |acc, child| acc.saturating_add(row_span(child)))
}

/// Flattens a row tree into physical table rows.
///
/// A row without children becomes one physical row whose cells span one row. A row with children
/// occupies as many physical rows as its children produce: its own cells open the first of them
/// (ahead of the first child's cells) and span all of them. Output is depth-first in document
/// order.
///
/// Header polarity belongs to top-level rows: every physical row of a top-level row's subtree is a
/// header row exactly when that top-level row is, whatever its descendants declare.
pub fn flatten<M>(rows: &[Row<M>]) -> Vec<FlatRow<'_, M>> {
    gdebug!(rows = rows.len(), "flatten");
    crate::validate::report(rows);
    let mut out = Vec::new();
    for row in rows {
        flatten_row(row, row.is_header_row, &mut out);
    }
    gtrace!(physical_rows = out.len(), "flatten done");
    out
}

fn flatten_row<'a, M>(row: &'a Row<M>, is_header_row: bool, out: &mut Vec<FlatRow<'a, M>>) {
    let first = out.len();
    if row.has_child_rows() {
        for child in &row.child_rows {
            flatten_row(child, is_header_row, out);
        }
    } else {
        out.push(FlatRow {
            id: &row.id,
            is_header_row,
            cells: Vec::with_capacity(row.cells.len()),
        });
    }

    let span = (out.len() - first) as u32;
    let own = row
        .cells
        .iter()
        .enumerate()
        .map(|(cell_index, cell)| FlatCell {
            cell,
            row,
            cell_index,
            row_span: span,
            physical_row: first,
            is_header_row,
        });

    let opened = &mut out[first];
    opened.id = &row.id;
    opened.cells.splice(0..0, own);
}
