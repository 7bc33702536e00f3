use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::fmt;

use crate::{Cell, Row, Value};

/// Everything a cell renderer gets to see.
pub struct CellContext<'a, M> {
    pub row_id: &'a str,
    /// All cells of the row the rendered cell belongs to.
    pub cells: &'a [Cell<M>],
    pub cell_index: usize,
    pub meta: &'a M,
    /// The cell's resolved content.
    pub children: &'a Value,
}

impl<'a, M> CellContext<'a, M> {
    pub fn cell(&self) -> Option<&'a Cell<M>> {
        self.cells.get(self.cell_index)
    }
}

/// A cell rendering strategy.
///
/// Implementations wrap or replace the resolved content of a cell. The output is the text a host
/// places inside the cell element.
pub trait CellRenderer<M>: Send + Sync {
    fn render(&self, cx: &CellContext<'_, M>) -> String;
}

impl<M, F> CellRenderer<M> for F
where
    F: Fn(&CellContext<'_, M>) -> String + Send + Sync,
{
    fn render(&self, cx: &CellContext<'_, M>) -> String {
        self(cx)
    }
}

/// Selects how a cell is rendered.
pub enum Renderer<M = ()> {
    /// The built-in cell wrapper.
    Default,
    /// Content emitted as-is, without the default wrapper.
    Bare,
    Custom(Arc<dyn CellRenderer<M>>),
}

impl<M> Renderer<M> {
    pub fn custom(renderer: impl CellRenderer<M> + 'static) -> Self {
        Self::Custom(Arc::new(renderer))
    }

    pub fn render(&self, cx: &CellContext<'_, M>) -> String {
        match self {
            Self::Default | Self::Bare => cx.children.to_string(),
            Self::Custom(r) => r.render(cx),
        }
    }

    /// Whether the host should wrap the output in its default cell container.
    pub fn wraps(&self) -> bool {
        !matches!(self, Self::Bare)
    }
}

impl<M> Default for Renderer<M> {
    fn default() -> Self {
        Self::Default
    }
}

impl<M> Clone for Renderer<M> {
    fn clone(&self) -> Self {
        match self {
            Self::Default => Self::Default,
            Self::Bare => Self::Bare,
            Self::Custom(r) => Self::Custom(Arc::clone(r)),
        }
    }
}

impl<M> fmt::Debug for Renderer<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Bare => f.write_str("Bare"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Picks the renderer for a cell: its own, then its row's, then `fallback`.
pub fn resolve_renderer<'a, M>(
    row: &'a Row<M>,
    cell: &'a Cell<M>,
    fallback: &'a Renderer<M>,
) -> &'a Renderer<M> {
    cell.renderer
        .as_ref()
        .or(row.row_renderer.as_ref())
        .unwrap_or(fallback)
}

/// Renders the cell at `cell_index` of `row` with the resolved renderer.
///
/// Returns `None` if `cell_index` is out of bounds.
pub fn render_cell<M>(
    row: &Row<M>,
    cell_index: usize,
    meta: &M,
    fallback: &Renderer<M>,
) -> Option<String> {
    let cell = row.cells.get(cell_index)?;
    let children = cell.content.resolve(meta);
    let cx = CellContext {
        row_id: &row.id,
        cells: &row.cells,
        cell_index,
        meta,
        children: &children,
    };
    Some(resolve_renderer(row, cell, fallback).render(&cx))
}
