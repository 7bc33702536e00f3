use alloc::string::String;
use alloc::vec::Vec;

use crate::SortDirection;

/// The column records are sorted by, and in which direction.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortState {
    pub column_id: String,
    pub direction: SortDirection,
}

/// The current page, zero-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageState {
    pub page_index: usize,
}

/// A snapshot of everything a [`crate::Controller`] tracks between renders.
///
/// This is useful for restoring table state across sessions without holding on to column
/// definitions or records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerState {
    pub sort: Option<SortState>,
    pub page: PageState,
    /// Columns the user chose to hide.
    pub hidden: Vec<String>,
    /// Record count seen by the last sync.
    pub record_count: usize,
}
