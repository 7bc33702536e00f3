use alloc::vec::Vec;

use crate::{FlatRow, Row};

/// Rows that know whether they belong to a header section.
pub trait HeaderRow {
    fn is_header_row(&self) -> bool;
}

impl<M> HeaderRow for Row<M> {
    fn is_header_row(&self) -> bool {
        self.is_header_row
    }
}

impl<M> HeaderRow for FlatRow<'_, M> {
    fn is_header_row(&self) -> bool {
        self.is_header_row
    }
}

impl<T: HeaderRow + ?Sized> HeaderRow for &T {
    fn is_header_row(&self) -> bool {
        (**self).is_header_row()
    }
}

/// A maximal run of consecutive rows that are all header rows or all data rows.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, T> {
    pub is_header: bool,
    pub rows: &'a [T],
}

impl<T> Clone for Segment<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Segment<'_, T> {}

/// Splits `rows` into maximal header/data runs, preserving order.
///
/// Segments borrow contiguous sub-slices of the input, so concatenating them yields `rows`
/// exactly. Adjacent runs never share polarity.
pub fn split_segments<T: HeaderRow>(rows: &[T]) -> Vec<Segment<'_, T>> {
    let mut segments = Vec::new();
    let mut start = 0;
    while start < rows.len() {
        let is_header = rows[start].is_header_row();
        let len = rows[start..]
            .iter()
            .take_while(|r| r.is_header_row() == is_header)
            .count();
        segments.push(Segment {
            is_header,
            rows: &rows[start..start + len],
        });
        start += len;
    }
    segments
}
