use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Row;
use crate::key::IdSet;

/// A structural problem in a row tree.
///
/// Malformed trees still lay out and flatten without panicking; they just render incorrectly.
/// [`validate`] finds these problems up front.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Issue {
    /// A cell with `column_span == 0`.
    ZeroColumnSpan { row_id: String, cell_id: String },
    /// A row without cells.
    EmptyRow { row_id: String },
    /// Two sibling rows share an id.
    DuplicateRowId { row_id: String },
    /// Two cells of one row share an id.
    DuplicateCellId { row_id: String, cell_id: String },
    /// A physical row whose cells do not cover the table's column count.
    ColumnSpanMismatch {
        physical_row: usize,
        expected: u32,
        actual: u32,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumnSpan { row_id, cell_id } => {
                write!(f, "cell `{cell_id}` in row `{row_id}` spans zero columns")
            }
            Self::EmptyRow { row_id } => write!(f, "row `{row_id}` has no cells"),
            Self::DuplicateRowId { row_id } => write!(f, "duplicate sibling row id `{row_id}`"),
            Self::DuplicateCellId { row_id, cell_id } => {
                write!(f, "duplicate cell id `{cell_id}` in row `{row_id}`")
            }
            Self::ColumnSpanMismatch {
                physical_row,
                expected,
                actual,
            } => write!(
                f,
                "physical row {physical_row} spans {actual} columns, expected {expected}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Issue {}

/// Checks a row tree for structural problems.
///
/// `columns` is the table's column count. When `None`, the width of the first physical row is
/// used. Every physical row must cover exactly that many columns for tabular output to come out
/// rectangular.
pub fn validate<M>(rows: &[Row<M>], columns: Option<u32>) -> Vec<Issue> {
    let mut issues = Vec::new();
    check_rows(rows, &mut issues);

    let mut widths = Vec::new();
    for row in rows {
        physical_widths(row, &mut widths);
    }
    if let Some(expected) = columns.or_else(|| widths.first().copied()) {
        for (physical_row, &actual) in widths.iter().enumerate() {
            if actual != expected {
                issues.push(Issue::ColumnSpanMismatch {
                    physical_row,
                    expected,
                    actual,
                });
            }
        }
    }
    issues
}

fn check_rows<M>(rows: &[Row<M>], issues: &mut Vec<Issue>) {
    let mut row_ids = IdSet::new();
    for row in rows {
        if !row_ids.insert(row.id.as_str()) {
            issues.push(Issue::DuplicateRowId {
                row_id: row.id.clone(),
            });
        }
        if row.cells.is_empty() {
            issues.push(Issue::EmptyRow {
                row_id: row.id.clone(),
            });
        }

        let mut cell_ids = IdSet::new();
        for cell in &row.cells {
            if !cell_ids.insert(cell.id.as_str()) {
                issues.push(Issue::DuplicateCellId {
                    row_id: row.id.clone(),
                    cell_id: cell.id.clone(),
                });
            }
            if cell.column_span == 0 {
                issues.push(Issue::ZeroColumnSpan {
                    row_id: row.id.clone(),
                    cell_id: cell.id.clone(),
                });
            }
        }
        check_rows(&row.child_rows, issues);
    }
}

// A parent's cells span every physical row of its subtree, so they count toward each one.
fn physical_widths<M>(row: &Row<M>, out: &mut Vec<u32>) {
    let own = row.column_span();
    if !row.has_child_rows() {
        out.push(own);
        return;
    }
    let first = out.len();
    for child in &row.child_rows {
        physical_widths(child, out);
    }
    for w in &mut out[first..] {
        *w = w.saturating_add(own);
    }
}

/// Emits every issue in `rows` as a warning. Used by `layout` and `flatten`; a no-op in release
/// builds and without the `tracing` feature.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn report<M>(rows: &[Row<M>]) {
    if !cfg!(all(debug_assertions, feature = "tracing")) {
        return;
    }
    for issue in validate(rows, None) {
        gwarn!(%issue, "malformed grid");
    }
}
