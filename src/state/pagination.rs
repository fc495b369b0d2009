//! Page arithmetic shared by server-paged and client-paged lists.
//!
//! Pages are 1-based throughout.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Offset of the first item on `page`.
pub fn page_offset(page: u32, page_size: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Number of pages needed for `total` items; zero when there is nothing to show.
pub fn total_pages(total: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Keep `page` inside `1..=total_pages` (or 1 when there are no pages).
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Items of `page` when the whole list is already loaded.
pub fn page_slice<T>(items: &[T], page: u32, page_size: u32) -> &[T] {
    let start = usize::try_from(page_offset(page, page_size)).unwrap_or(usize::MAX);
    let size = usize::try_from(page_size).unwrap_or(usize::MAX);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Whether the pager control should be shown.
pub fn has_pager(total_pages: u32) -> bool {
    total_pages > 1
}

/// Pager state for one list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u32,
}

impl Pager {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            total_items: 0,
        }
    }

    pub fn offset(&self) -> u32 {
        page_offset(self.page, self.page_size)
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_items, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Jump to `page`, clamped to the known page range.
    pub fn go_to(&mut self, page: u32) {
        self.page = clamp_page(page, self.total_pages());
    }

    /// Record a new item count, pulling the current page back in range.
    pub fn set_total(&mut self, total_items: u32) {
        self.total_items = total_items;
        self.page = clamp_page(self.page, self.total_pages());
    }
}
