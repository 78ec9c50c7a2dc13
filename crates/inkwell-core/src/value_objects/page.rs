//! Page-number pagination request

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u32 = 5;
/// Upper bound for a client supplied page size
pub const MAX_PAGE_SIZE: u32 = 50;

/// A validated page request (1-based page number)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Create a page request, clamping page to at least 1 and the size to `1..=max_size`
    pub fn new(page: u32, page_size: u32, max_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, max_size.max(1)),
        }
    }

    /// SQL `OFFSET` for this page
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    /// SQL `LIMIT` for this page
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Next page number, if `total` items leave one
    pub fn next_page(&self, total: i64) -> Option<u32> {
        let seen = i64::from(self.page) * i64::from(self.page_size);
        (seen < total).then(|| self.page + 1)
    }

    /// Previous page number, if any
    pub fn previous_page(&self) -> Option<u32> {
        (self.page > 1).then(|| self.page - 1)
    }
}
