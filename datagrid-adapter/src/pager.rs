use alloc::vec::Vec;

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagers with at most this many pages list every page number.
const MAX_UNABRIDGED_PAGES: usize = 9;

/// The records on page `page_index` (zero-based).
///
/// Pages past the end are empty. A `page_size` of zero is treated as one.
pub fn page<T>(records: &[T], page_index: usize, page_size: usize) -> &[T] {
    let size = page_size.max(1);
    let start = page_index.saturating_mul(size).min(records.len());
    let end = start.saturating_add(size).min(records.len());
    &records[start..end]
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Page controls are only worth showing when there is more than one page.
pub fn is_pager_visible(total: usize, page_size: usize) -> bool {
    page_count(total, page_size) > 1
}

/// One slot of a pager control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageItem {
    /// A one-based page number.
    Page(usize),
    Ellipsis,
}

/// The slots of a compact pager for `current_page` (one-based) out of `total_pages`.
///
/// Up to nine pages are listed in full. Beyond that, the first and last pages stay visible and
/// a cluster around the current page shows at least two neighbours on each side; ellipses stand
/// in for the gaps. The slot count stays constant as the current page moves, so the control keeps
/// its width.
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= MAX_UNABRIDGED_PAGES {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let cluster_min = current_page
        .saturating_sub(2)
        .max(1)
        .min(total_pages - 6);
    let cluster_max = current_page.saturating_add(2).min(total_pages).max(7);

    let mut items = Vec::with_capacity(MAX_UNABRIDGED_PAGES);
    if cluster_min >= 4 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
    } else {
        items.extend((1..cluster_min).map(PageItem::Page));
    }
    items.extend((cluster_min..=cluster_max).map(PageItem::Page));
    if cluster_max + 3 <= total_pages {
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total_pages));
    } else {
        items.extend((cluster_max + 1..=total_pages).map(PageItem::Page));
    }
    items
}
