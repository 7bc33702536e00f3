use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use datagrid::{Content, Value};

use crate::Record;

/// What a display function sees when its cell is rendered.
pub struct DisplayContext<'a, R, M> {
    pub source: &'a R,
    pub meta: &'a M,
}

pub type DisplayFn<R, M> = Arc<dyn Fn(&DisplayContext<'_, R, M>) -> Value + Send + Sync>;
pub type ValueFn<R> = Arc<dyn Fn(&R) -> Value + Send + Sync>;
pub type SorterFn<R, M> = Arc<dyn Fn(&R, &M) -> Value + Send + Sync>;
pub type HideFn<R, M> = Arc<dyn Fn(&[R], &[Column<R, M>], &M) -> bool + Send + Sync>;

/// Describes one column of a record grid.
///
/// Cell content comes from `display` when set, else from `value`, else from the record field
/// named by `id`. Sort keys come from `sorter` when set, else from `value` (lower-cased when
/// textual), else from the raw field.
pub struct Column<R, M = ()> {
    pub id: String,
    pub title: Value,
    pub display: Option<DisplayFn<R, M>>,
    pub value: Option<ValueFn<R>>,
    pub sorter: Option<SorterFn<R, M>>,
    /// `None` means sortable.
    pub is_sortable: Option<bool>,
    pub hide: Option<HideFn<R, M>>,
}

impl<R, M> Column<R, M> {
    pub fn new(id: impl Into<String>, title: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            display: None,
            value: None,
            sorter: None,
            is_sortable: None,
            hide: None,
        }
    }

    pub fn with_display(
        mut self,
        display: impl Fn(&DisplayContext<'_, R, M>) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.display = Some(Arc::new(display));
        self
    }

    pub fn with_value(mut self, value: impl Fn(&R) -> Value + Send + Sync + 'static) -> Self {
        self.value = Some(Arc::new(value));
        self
    }

    pub fn with_sorter(mut self, sorter: impl Fn(&R, &M) -> Value + Send + Sync + 'static) -> Self {
        self.sorter = Some(Arc::new(sorter));
        self
    }

    pub fn with_sortable(mut self, is_sortable: bool) -> Self {
        self.is_sortable = Some(is_sortable);
        self
    }

    pub fn with_hide(
        mut self,
        hide: impl Fn(&[R], &[Column<R, M>], &M) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.hide = Some(Arc::new(hide));
        self
    }

    /// Whether clicking this column's header sorts by it.
    ///
    /// With one record or none there is nothing to reorder, so no column is sortable.
    pub fn is_sortable(&self, record_count: usize) -> bool {
        self.is_sortable.unwrap_or(true) && record_count > 1
    }

    pub fn is_hidden(&self, records: &[R], columns: &[Column<R, M>], meta: &M) -> bool {
        self.hide
            .as_ref()
            .is_some_and(|hide| hide(records, columns, meta))
    }
}

impl<R: Record, M> Column<R, M> {
    /// The key this column sorts `record` by.
    pub fn sort_key(&self, record: &R, meta: &M) -> Value {
        if let Some(sorter) = &self.sorter {
            return sorter(record, meta);
        }
        if let Some(value) = &self.value {
            return value(record).to_lowercase();
        }
        record.field(&self.id)
    }

    /// Cell content for `record`.
    ///
    /// A display function always wins, even when `value` is also set; it runs at render time with
    /// the grid meta.
    pub fn content(&self, record: &Arc<R>) -> Content<M>
    where
        R: Send + Sync + 'static,
        M: 'static,
    {
        if let Some(display) = &self.display {
            let display = Arc::clone(display);
            let source = Arc::clone(record);
            return Content::render(move |meta: &M| {
                display(&DisplayContext {
                    source: &*source,
                    meta,
                })
            });
        }
        let value = match &self.value {
            Some(value) => value(&**record),
            None => record.field(&self.id),
        };
        if value.is_null() {
            Content::Empty
        } else {
            Content::Value(value)
        }
    }
}

impl<R, M> AsRef<Column<R, M>> for Column<R, M> {
    fn as_ref(&self) -> &Column<R, M> {
        self
    }
}

impl<R, M> Clone for Column<R, M> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            display: self.display.clone(),
            value: self.value.clone(),
            sorter: self.sorter.clone(),
            is_sortable: self.is_sortable,
            hide: self.hide.clone(),
        }
    }
}

impl<R, M> fmt::Debug for Column<R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("is_sortable", &self.is_sortable)
            .field("display", &self.display.is_some())
            .field("value", &self.value.is_some())
            .field("sorter", &self.sorter.is_some())
            .field("hide", &self.hide.is_some())
            .finish()
    }
}
