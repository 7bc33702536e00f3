use alloc::vec::Vec;
use core::cmp::Ordering;

use datagrid::Value;

use crate::{Column, Record};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Value for an `aria-sort` attribute.
    pub fn aria(self) -> &'static str {
        match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Returns `records` ordered by `column`, leaving the input untouched.
///
/// The sort is stable in both directions: records with equal keys keep their input order, also
/// when sorting descending.
pub fn sort_records<'a, R: Record, M>(
    records: &'a [R],
    column: &Column<R, M>,
    direction: SortDirection,
    meta: &M,
) -> Vec<&'a R> {
    let keys: Vec<Value> = records.iter().map(|r| column.sort_key(r, meta)).collect();
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| direction.apply(keys[a].sort_cmp(&keys[b])));
    order.into_iter().map(|i| &records[i]).collect()
}

/// Like [`sort_records`], looking the column up by id.
///
/// Records come back in input order when no column has that id.
pub fn sort_by_column<'a, R: Record, M>(
    records: &'a [R],
    columns: &[Column<R, M>],
    column_id: &str,
    direction: SortDirection,
    meta: &M,
) -> Vec<&'a R> {
    match columns.iter().find(|c| c.id == column_id) {
        Some(column) => sort_records(records, column, direction, meta),
        None => records.iter().collect(),
    }
}
