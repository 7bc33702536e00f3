//! A headless hierarchical grid layout engine.
//!
//! For building grids out of plain records (columns, sorting, paging), see the `datagrid-adapter`
//! crate.
//!
//! The input is a tree of [`Row`]s whose [`Cell`]s may span several columns, and whose nested
//! `child_rows` make the parent's cells span several rows. This crate turns that tree into:
//! - absolutely positioned cells with row/column grid lines ([`layout`]), for CSS-grid style
//!   surfaces
//! - physical table rows with per-cell row spans ([`flatten`]), grouped into header and data runs
//!   ([`split_segments`]), for surfaces that only understand `rowspan`/`colspan`
//!
//! Everything is a pure function over borrowed input. Malformed trees never panic; use
//! [`validate`] to find out why one renders oddly.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod flatten;
pub mod html;
mod key;
mod layout;
mod render;
mod segment;
mod types;
mod validate;
mod value;


pub use flatten::{FlatCell, FlatRow, flatten, row_span};
pub use layout::{GridSpan, PositionedCell, for_each_positioned, grid_extent, layout, layout_from};
pub use render::{CellContext, CellRenderer, Renderer, render_cell, resolve_renderer};
pub use segment::{HeaderRow, Segment, split_segments};
pub use types::{Cell, Content, RenderFn, RendererProps, Row};
pub use validate::{Issue, validate};
pub use value::Value;
