//! Page-splitting of an ordered listing.
//!
//! A requested page that is not an integer resolves to the first page, and a
//! page outside `1..=num_pages` resolves to the last one. An empty listing
//! still has a single (empty) page.

use serde::Serialize;

/// Number of posts on one listing page.
pub const POSTS_PER_PAGE: u64 = 3;

/// Splits `total` items into pages of `per_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total: u64,
    per_page: u64,
}

impl Paginator {
    pub fn new(total: u64, per_page: u64) -> Self {
        Self {
            total,
            per_page: per_page.max(1),
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn num_pages(&self) -> u64 {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.per_page)
        }
    }

    /// Resolve the raw `page` request parameter to a concrete page.
    pub fn resolve(&self, raw: Option<&str>) -> PageWindow {
        let requested = match raw.map(str::trim) {
            None => 1,
            Some(value) => match value.parse::<i64>() {
                Ok(n) => n,
                // Too large for i64, but still an integer.
                Err(_) if is_integer(value) => i64::MAX,
                Err(_) => 1,
            },
        };
        self.page(requested)
    }

    /// Window for page `number`, clamped to the last page when out of range.
    pub fn page(&self, number: i64) -> PageWindow {
        let num_pages = self.num_pages();
        let number = match u64::try_from(number) {
            Ok(n) if (1..=num_pages).contains(&n) => n,
            _ => num_pages,
        };
        let offset = (number - 1) * self.per_page;
        PageWindow {
            number,
            num_pages,
            offset,
            limit: self.per_page.min(self.total.saturating_sub(offset)),
        }
    }
}

fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Position of one page within a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// 1-based page number.
    pub number: u64,
    pub num_pages: u64,
    pub offset: u64,
    pub limit: u64,
}

impl PageWindow {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn previous_page_number(&self) -> Option<u64> {
        self.has_previous().then(|| self.number - 1)
    }

    pub fn next_page_number(&self) -> Option<u64> {
        self.has_next().then(|| self.number + 1)
    }
}

/// One page of items together with its window.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub window: PageWindow,
}
