use alloc::string::String;

use crate::{DEFAULT_PAGE_SIZE, SortDirection};

/// Sorting to start from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitialSort {
    /// Defaults to the first column.
    pub column_id: Option<String>,
    /// Defaults to ascending.
    pub direction: Option<SortDirection>,
    /// Keep records in input order regardless of sort state; the caller sorts upstream.
    pub is_sorting_suppressed: bool,
}

impl InitialSort {
    pub fn by(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: Some(column_id.into()),
            direction: Some(direction),
            is_sorting_suppressed: false,
        }
    }

    pub fn suppressed() -> Self {
        Self {
            is_sorting_suppressed: true,
            ..Self::default()
        }
    }
}

/// Configuration for [`crate::Controller`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridOptions {
    /// Records per page. Zero is treated as one.
    pub page_size: usize,
    /// Show every record on a single page.
    pub is_pager_hidden: bool,
    /// Record field used as the row id; rows are keyed by position when unset.
    pub key_prop: Option<String>,
    pub initial_sort: InitialSort,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            is_pager_hidden: false,
            key_prop: None,
            initial_sort: InitialSort::default(),
        }
    }
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_pager_hidden(mut self, is_pager_hidden: bool) -> Self {
        self.is_pager_hidden = is_pager_hidden;
        self
    }

    pub fn with_key_prop(mut self, key_prop: impl Into<String>) -> Self {
        self.key_prop = Some(key_prop.into());
        self
    }

    pub fn with_initial_sort(mut self, initial_sort: InitialSort) -> Self {
        self.initial_sort = initial_sort;
        self
    }

    pub(crate) fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
