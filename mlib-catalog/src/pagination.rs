//! Pagination utilities
//!
//! Page numbers are 1-indexed. Query values are parsed leniently: a missing
//! or non-numeric value falls back to the default instead of failing the
//! request.

/// First page
pub const DEFAULT_PAGE: i64 = 1;

/// Songs per page in listings
pub const DEFAULT_SONG_PAGE_SIZE: i64 = 10;

/// Stanzas per page in lyric pagination
pub const DEFAULT_STANZA_PAGE_SIZE: i64 = 1;

/// Sanitized page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Current page number (1-indexed, never below 1)
    pub page: i64,
    /// Items per page (never below 1)
    pub page_size: i64,
    /// Offset for SQL LIMIT/OFFSET query (never negative)
    pub offset: i64,
}

impl PageWindow {
    /// Build a window from already-numeric values
    ///
    /// Pages below 1 are treated as page 1, so the offset can never go
    /// negative. Page sizes below 1 are raised to 1.
    ///
    /// # Examples
    /// ```
    /// use mlib_catalog::pagination::PageWindow;
    ///
    /// let w = PageWindow::new(3, 10);
    /// assert_eq!(w.offset, 20);
    ///
    /// // Page 0 and negative pages behave like page 1
    /// assert_eq!(PageWindow::new(0, 10), PageWindow::new(1, 10));
    /// assert_eq!(PageWindow::new(-4, 10).offset, 0);
    /// ```
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let offset = (page - 1).saturating_mul(page_size);

        Self {
            page,
            page_size,
            offset,
        }
    }

    /// Build a window from raw query-string values
    ///
    /// `limit` falls back to `default_size` when absent, non-numeric or not
    /// positive. Any positive `limit` is used as given, so the offset is
    /// always `(page - 1) * limit`.
    pub fn from_query(page: Option<&str>, limit: Option<&str>, default_size: i64) -> Self {
        let page = parse_or(page, DEFAULT_PAGE);

        let mut page_size = parse_or(limit, default_size);
        if page_size < 1 {
            page_size = default_size;
        }

        Self::new(page, page_size)
    }

    /// Offset as a slice index
    pub fn start_index(&self) -> usize {
        usize::try_from(self.offset).unwrap_or(usize::MAX)
    }

    /// Page size as a slice length
    pub fn page_len(&self) -> usize {
        usize::try_from(self.page_size).unwrap_or(usize::MAX)
    }
}

/// Parse an optional query value, falling back to `default`
pub fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(default)
}
