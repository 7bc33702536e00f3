use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use datagrid::{CellContext, CellRenderer, Renderer, Row, Value};

use crate::{
    Column, ControllerState, GridOptions, PageItem, PageState, Record, SortDirection, SortState,
    active_columns, header_row, page, page_count, page_numbers, sort_records, to_grid,
};

/// Renderer prop set on header cells: whether clicking the header sorts.
pub const PROP_SORTABLE: &str = "sortable";
/// Renderer prop set on header cells: `ascending`, `descending` or `none`.
pub const PROP_ARIA_SORT: &str = "aria-sort";

/// Header cell renderer that appends a direction marker to the sorted column's title.
#[derive(Clone, Copy, Debug, Default)]
pub struct SortIndicator;

impl<M> CellRenderer<M> for SortIndicator {
    fn render(&self, cx: &CellContext<'_, M>) -> String {
        let marker = cx
            .cell()
            .and_then(|c| c.prop(PROP_ARIA_SORT))
            .and_then(Value::as_str)
            .and_then(|s| match s {
                "ascending" => Some('▲'),
                "descending" => Some('▼'),
                _ => None,
            });
        match marker {
            Some(m) => format!("{} {m}", cx.children),
            None => cx.children.to_string(),
        }
    }
}

/// One render pass worth of grid: the header row plus the current page of record rows.
pub struct GridView<M = ()> {
    pub header: Row<M>,
    pub rows: Vec<Row<M>>,
    /// Record count before paging.
    pub total: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub is_pager_visible: bool,
}

impl<M> GridView<M> {
    /// Header row followed by the record rows, ready for `datagrid::layout` or
    /// `datagrid::flatten`.
    pub fn into_grid(self) -> Vec<Row<M>> {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(self.header);
        rows.extend(self.rows);
        rows
    }

    /// Pager slots for the current page.
    pub fn page_numbers(&self) -> Vec<PageItem> {
        page_numbers(self.page_index + 1, self.page_count)
    }
}

impl<M> fmt::Debug for GridView<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridView")
            .field("header", &self.header)
            .field("rows", &self.rows.len())
            .field("total", &self.total)
            .field("page_index", &self.page_index)
            .field("page_count", &self.page_count)
            .field("is_pager_visible", &self.is_pager_visible)
            .finish()
    }
}

/// Owns sort, visibility and paging state for a grid of records.
///
/// The controller holds no records. Callers pass the current records to [`Controller::sync`]
/// (or [`Controller::view`], which syncs first) on every render; the controller then:
/// - recomputes the active columns from `hide` predicates and the user-hidden set
/// - moves the sort to the first active column if the sorted column disappeared
/// - returns to the first page if the record count changed
#[derive(Clone)]
pub struct Controller<R, M = ()> {
    columns: Vec<Column<R, M>>,
    options: GridOptions,
    sort: Option<SortState>,
    hidden: Vec<String>,
    active: Vec<usize>,
    page_index: usize,
    record_count: usize,
}

impl<R, M> Controller<R, M> {
    pub fn new(columns: Vec<Column<R, M>>, options: GridOptions) -> Self {
        let initial = &options.initial_sort;
        let sort = initial
            .column_id
            .clone()
            .or_else(|| columns.first().map(|c| c.id.clone()))
            .map(|column_id| SortState {
                column_id,
                direction: initial.direction.unwrap_or_default(),
            });
        adebug!(
            columns = columns.len(),
            page_size = options.page_size,
            "Controller::new"
        );
        let active = (0..columns.len()).collect();
        Self {
            columns,
            options,
            sort,
            hidden: Vec::new(),
            active,
            page_index: 0,
            record_count: 0,
        }
    }

    pub fn columns(&self) -> &[Column<R, M>] {
        &self.columns
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Columns displayed as of the last sync, in definition order.
    pub fn active_columns(&self) -> Vec<&Column<R, M>> {
        self.active.iter().map(|&i| &self.columns[i]).collect()
    }

    pub fn is_active(&self, column_id: &str) -> bool {
        self.active.iter().any(|&i| self.columns[i].id == column_id)
    }

    pub fn is_column_hidden_by_user(&self, column_id: &str) -> bool {
        self.hidden.iter().any(|id| id == column_id)
    }

    /// Whether the header of `column_id` reacts to clicks.
    pub fn is_sortable(&self, column_id: &str) -> bool {
        self.active
            .iter()
            .map(|&i| &self.columns[i])
            .find(|c| c.id == column_id)
            .is_some_and(|c| c.is_sortable(self.record_count))
    }

    pub fn state(&self) -> ControllerState {
        ControllerState {
            sort: self.sort.clone(),
            page: PageState {
                page_index: self.page_index,
            },
            hidden: self.hidden.clone(),
            record_count: self.record_count,
        }
    }

    /// Restores a snapshot taken with [`Controller::state`].
    ///
    /// Active columns and the sort fallback are re-derived on the next sync.
    pub fn restore(&mut self, state: ControllerState) {
        self.sort = state.sort;
        self.page_index = state.page.page_index;
        self.hidden = state.hidden;
        self.record_count = state.record_count;
    }

    /// Handles a click on a column header.
    ///
    /// Clicking the sorted column flips the direction; clicking another column sorts by it
    /// ascending. Clicks on inactive or non-sortable columns are ignored and return `false`.
    pub fn click_header(&mut self, column_id: &str) -> bool {
        if !self.is_sortable(column_id) {
            atrace!(column_id, "click_header: not sortable");
            return false;
        }
        let next = match &self.sort {
            Some(s) if s.column_id == column_id => SortState {
                column_id: s.column_id.clone(),
                direction: s.direction.toggled(),
            },
            _ => SortState {
                column_id: column_id.to_string(),
                direction: SortDirection::Asc,
            },
        };
        atrace!(column_id, direction = next.direction.aria(), "click_header");
        self.sort = Some(next);
        true
    }

    /// Hides or shows a column by user choice. Takes effect on the next sync.
    pub fn set_column_hidden(&mut self, column_id: &str, hidden: bool) {
        let present = self.is_column_hidden_by_user(column_id);
        if hidden && !present {
            self.hidden.push(column_id.to_string());
        } else if !hidden && present {
            self.hidden.retain(|id| id != column_id);
        }
    }

    pub fn toggle_column(&mut self, column_id: &str) {
        let hidden = self.is_column_hidden_by_user(column_id);
        self.set_column_hidden(column_id, !hidden);
    }

    pub fn show_all_columns(&mut self) {
        self.hidden.clear();
    }

    pub fn page_count(&self) -> usize {
        if self.options.is_pager_hidden {
            return usize::from(self.record_count > 0);
        }
        page_count(self.record_count, self.options.effective_page_size())
    }

    pub fn is_pager_visible(&self) -> bool {
        self.page_count() > 1
    }

    /// Moves to `page_index`, clamped to the last page. Returns the applied index.
    pub fn set_page_index(&mut self, page_index: usize) -> usize {
        let last = self.page_count().saturating_sub(1);
        if page_index > last {
            awarn!(page_index, last, "set_page_index: past the last page");
        }
        self.page_index = page_index.min(last);
        atrace!(page_index = self.page_index, "set_page_index");
        self.page_index
    }

    pub fn next_page(&mut self) -> bool {
        let before = self.page_index;
        self.set_page_index(before.saturating_add(1)) != before
    }

    pub fn previous_page(&mut self) -> bool {
        let before = self.page_index;
        self.set_page_index(before.saturating_sub(1)) != before
    }

    /// Brings the controller in line with the current records and meta.
    pub fn sync(&mut self, records: &[R], meta: &M) {
        self.active = active_columns(&self.columns, records, meta, &self.hidden);

        if records.len() != self.record_count {
            self.record_count = records.len();
            self.page_index = 0;
        }

        let first_active = self.active.first().map(|&i| self.columns[i].id.clone());
        self.sort = match (self.sort.take(), first_active) {
            (_, None) => None,
            (Some(s), Some(first)) => {
                if self.is_active(&s.column_id) {
                    Some(s)
                } else {
                    adebug!(
                        from = s.column_id.as_str(),
                        to = first.as_str(),
                        "sorted column hidden; falling back"
                    );
                    Some(SortState {
                        column_id: first,
                        direction: s.direction,
                    })
                }
            }
            (None, Some(first)) => Some(SortState {
                column_id: first,
                direction: SortDirection::Asc,
            }),
        };
        atrace!(
            active = self.active.len(),
            records = self.record_count,
            "sync"
        );
    }

    /// The header row for the active columns.
    ///
    /// Header cells carry [`PROP_SORTABLE`] and [`PROP_ARIA_SORT`] props, and the row renders with
    /// [`SortIndicator`].
    pub fn header_row(&self) -> Row<M> {
        let active = self.active_columns();
        let mut row = header_row::<R, M, _>(&active)
            .with_row_renderer(Renderer::Custom(Arc::new(SortIndicator)));
        for cell in &mut row.cells {
            let aria = match &self.sort {
                Some(s) if s.column_id == cell.id => s.direction.aria(),
                _ => "none",
            };
            let sortable = self.is_sortable(&cell.id);
            cell.renderer_props
                .insert(PROP_SORTABLE.to_string(), Value::Bool(sortable));
            cell.renderer_props
                .insert(PROP_ARIA_SORT.to_string(), Value::from(aria));
        }
        row
    }
}

impl<R: Record, M> Controller<R, M> {
    /// `records` in the current sort order, without modifying them.
    pub fn sorted<'a>(&self, records: &'a [R], meta: &M) -> Vec<&'a R> {
        if self.options.initial_sort.is_sorting_suppressed {
            return records.iter().collect();
        }
        let column = self
            .sort
            .as_ref()
            .and_then(|s| self.columns.iter().find(|c| c.id == s.column_id));
        match (column, &self.sort) {
            (Some(column), Some(s)) => sort_records(records, column, s.direction, meta),
            _ => records.iter().collect(),
        }
    }
}

impl<R, M> Controller<R, M>
where
    R: Record + Clone + Send + Sync + 'static,
    M: 'static,
{
    /// Syncs with `records`, then sorts, pages and converts them into grid rows.
    pub fn view(&mut self, records: &[R], meta: &M) -> GridView<M> {
        self.sync(records, meta);
        let sorted = self.sorted(records, meta);
        let visible: &[&R] = if self.options.is_pager_hidden {
            &sorted
        } else {
            page(&sorted, self.page_index, self.options.effective_page_size())
        };

        let active = self.active_columns();
        let rows = to_grid(
            visible.iter().copied(),
            &active,
            self.options.key_prop.as_deref(),
        );
        GridView {
            header: self.header_row(),
            rows,
            total: records.len(),
            page_index: self.page_index,
            page_count: self.page_count(),
            is_pager_visible: self.is_pager_visible(),
        }
    }
}

impl<R, M> fmt::Debug for Controller<R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("columns", &self.columns)
            .field("options", &self.options)
            .field("sort", &self.sort)
            .field("hidden", &self.hidden)
            .field("active", &self.active)
            .field("page_index", &self.page_index)
            .field("record_count", &self.record_count)
            .finish()
    }
}
