use alloc::string::String;
use alloc::vec::Vec;

use crate::Column;

/// Indexes of the columns to display.
///
/// A column is active unless its id is in `user_hidden` or its `hide` predicate returns true for
/// `records`. When that would leave nothing to display, the first column is forced visible: a grid
/// always shows at least one column, even against its own configuration.
pub fn active_columns<R, M>(
    columns: &[Column<R, M>],
    records: &[R],
    meta: &M,
    user_hidden: &[String],
) -> Vec<usize> {
    let active: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| !user_hidden.contains(&c.id) && !c.is_hidden(records, columns, meta))
        .map(|(i, _)| i)
        .collect();

    if active.is_empty() && !columns.is_empty() {
        awarn!(
            column = columns[0].id.as_str(),
            "every column is hidden; forcing the first column visible"
        );
        return alloc::vec![0];
    }
    active
}
