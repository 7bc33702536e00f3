use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::{Renderer, Value};

/// Opaque property bag handed to renderers alongside a cell.
pub type RendererProps = BTreeMap<String, Value>;

/// A render function stored as cell content. It receives the grid-wide `meta` at render time.
pub type RenderFn<M> = Arc<dyn Fn(&M) -> Value + Send + Sync>;

/// The content of one cell.
pub enum Content<M = ()> {
    Empty,
    Value(Value),
    /// Content computed when the cell is rendered.
    Render(RenderFn<M>),
}

impl<M> Content<M> {
    pub fn render(f: impl Fn(&M) -> Value + Send + Sync + 'static) -> Self {
        Self::Render(Arc::new(f))
    }

    /// Resolves the content to a value, calling the render function if there is one.
    pub fn resolve(&self, meta: &M) -> Value {
        match self {
            Self::Empty => Value::Null,
            Self::Value(v) => v.clone(),
            Self::Render(f) => f(meta),
        }
    }

    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }
}

impl<M> Default for Content<M> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<M> Clone for Content<M> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Value(v) => Self::Value(v.clone()),
            Self::Render(f) => Self::Render(Arc::clone(f)),
        }
    }
}

impl<M> fmt::Debug for Content<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}

macro_rules! content_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<M> From<$ty> for Content<M> {
                fn from(v: $ty) -> Self {
                    Self::Value(v.into())
                }
            }
        )*
    };
}

content_from!(Value, bool, i32, i64, u32, usize, f64, &str, String);

/// One cell of a grid row.
pub struct Cell<M = ()> {
    /// Unique within its row.
    pub id: String,
    pub content: Content<M>,
    /// Number of columns the cell covers. Expected to be at least 1.
    pub column_span: u32,
    pub is_header_cell: bool,
    /// Overrides the row renderer and the grid default for this cell.
    pub renderer: Option<Renderer<M>>,
    pub renderer_props: RendererProps,
}

impl<M> Cell<M> {
    pub fn new(id: impl Into<String>, content: impl Into<Content<M>>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            column_span: 1,
            is_header_cell: false,
            renderer: None,
            renderer_props: RendererProps::new(),
        }
    }

    pub fn with_column_span(mut self, column_span: u32) -> Self {
        self.column_span = column_span;
        self
    }

    pub fn with_header_cell(mut self, is_header_cell: bool) -> Self {
        self.is_header_cell = is_header_cell;
        self
    }

    pub fn with_renderer(mut self, renderer: Renderer<M>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.renderer_props.insert(key.into(), value.into());
        self
    }

    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.renderer_props.get(key)
    }
}

impl<M> Clone for Cell<M> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            content: self.content.clone(),
            column_span: self.column_span,
            is_header_cell: self.is_header_cell,
            renderer: self.renderer.clone(),
            renderer_props: self.renderer_props.clone(),
        }
    }
}

impl<M> fmt::Debug for Cell<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("column_span", &self.column_span)
            .field("is_header_cell", &self.is_header_cell)
            .field("renderer", &self.renderer)
            .field("renderer_props", &self.renderer_props)
            .finish()
    }
}

/// One row of the grid tree.
///
/// When `child_rows` is non-empty, the row's first cell visually spans every row its subtree
/// occupies, and the child rows tile the columns to the right of this row's cells.
pub struct Row<M = ()> {
    /// Unique among siblings.
    pub id: String,
    pub cells: Vec<Cell<M>>,
    pub child_rows: Vec<Row<M>>,
    pub is_header_row: bool,
    /// Renderer used for every cell of this row that has no renderer of its own.
    pub row_renderer: Option<Renderer<M>>,
}

impl<M> Row<M> {
    pub fn new(id: impl Into<String>, cells: Vec<Cell<M>>) -> Self {
        Self {
            id: id.into(),
            cells,
            child_rows: Vec::new(),
            is_header_row: false,
            row_renderer: None,
        }
    }

    pub fn with_child_rows(mut self, child_rows: Vec<Row<M>>) -> Self {
        self.child_rows = child_rows;
        self
    }

    pub fn with_header_row(mut self, is_header_row: bool) -> Self {
        self.is_header_row = is_header_row;
        self
    }

    pub fn with_row_renderer(mut self, renderer: Renderer<M>) -> Self {
        self.row_renderer = Some(renderer);
        self
    }

    pub fn has_child_rows(&self) -> bool {
        !self.child_rows.is_empty()
    }

    /// Sum of the column spans of this row's own cells.
    pub fn column_span(&self) -> u32 {
        self.cells
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.column_span))
    }
}

impl<M> Clone for Row<M> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            cells: self.cells.clone(),
            child_rows: self.child_rows.clone(),
            is_header_row: self.is_header_row,
            row_renderer: self.row_renderer.clone(),
        }
    }
}

impl<M> fmt::Debug for Row<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("cells", &self.cells)
            .field("child_rows", &self.child_rows)
            .field("is_header_row", &self.is_header_row)
            .field("row_renderer", &self.row_renderer)
            .finish()
    }
}
