//! Record-to-grid utilities for the `datagrid` crate.
//!
//! The `datagrid` crate lays out row trees. This crate builds those trees from plain records and
//! column definitions, and keeps the state a sortable table needs between renders:
//!
//! - Column definitions with display, value, sorter and hide hooks ([`Column`])
//! - Stable, non-mutating sorting in either direction ([`sort_records`])
//! - Column visibility with an always-one-column guard ([`active_columns`])
//! - Paging and compact pager slots ([`page`], [`page_numbers`])
//! - A controller tying these together across header clicks and data changes ([`Controller`])
//!
//! This crate is framework-agnostic; it produces `datagrid::Row`s and leaves rendering to the host.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod column;
mod controller;
mod grid;
mod options;
mod pager;
mod record;
mod sort;
mod state;
mod visibility;

#[cfg(test)]
mod tests;

pub use column::{Column, DisplayContext, DisplayFn, HideFn, SorterFn, ValueFn};
pub use controller::{Controller, GridView, PROP_ARIA_SORT, PROP_SORTABLE, SortIndicator};
pub use grid::{HEADER_ROW_ID, header_row, to_grid};
pub use options::{GridOptions, InitialSort};
pub use pager::{DEFAULT_PAGE_SIZE, PageItem, is_pager_visible, page, page_count, page_numbers};
pub use record::Record;
pub use sort::{SortDirection, sort_by_column, sort_records};
pub use state::{ControllerState, PageState, SortState};
pub use visibility::active_columns;
