use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec::Vec;

use datagrid::{Cell, Row};

use crate::{Column, Record};

/// Id of the header row built by [`header_row`].
pub const HEADER_ROW_ID: &str = "header";

/// Converts records into one grid row each, with one cell per column.
///
/// Row ids come from the record field named `key_prop`; when there is none, or the record lacks
/// the field, the record's position in `records` is used. The result never nests.
pub fn to_grid<'a, R, M, C>(
    records: impl IntoIterator<Item = &'a R>,
    columns: &[C],
    key_prop: Option<&str>,
) -> Vec<Row<M>>
where
    R: Record + Clone + Send + Sync + 'static,
    M: 'static,
    C: AsRef<Column<R, M>>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = key_prop
                .map(|key| record.field(key))
                .filter(|v| !v.is_null())
                .map_or_else(|| index.to_string(), |v| v.to_string());
            let shared = Arc::new(record.clone());
            let cells = columns
                .iter()
                .map(|c| {
                    let column = c.as_ref();
                    Cell::new(column.id.as_str(), column.content(&shared))
                })
                .collect();
            Row::new(id, cells)
        })
        .collect()
}

/// Builds the header row: one header cell per column, carrying the column title.
pub fn header_row<R, M, C: AsRef<Column<R, M>>>(columns: &[C]) -> Row<M> {
    let cells = columns
        .iter()
        .map(|c| {
            let column = c.as_ref();
            Cell::new(column.id.as_str(), column.title.clone()).with_header_cell(true)
        })
        .collect();
    Row::new(HEADER_ROW_ID, cells).with_header_row(true)
}
