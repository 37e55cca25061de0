//! Page-number handling for the character listing.
//!
//! The page lives in the URL query string. Everything here is pure so the
//! view only has to wire the results to navigation.

use crate::remote::{CharacterPage, PageInfo};

pub const DEFAULT_PAGE: u32 = 1;

/// Largest page the API accepts; GraphQL `Int` is a signed 32-bit value.
pub const MAX_PAGE: u32 = i32::MAX as u32;

/// Sibling pages shown on each side of the current page in numbered controls.
pub const PAGE_SIBLINGS: u32 = 1;

/// Effective page for a raw `page` query value.
///
/// Absent, non-numeric, non-finite and non-positive values all mean page 1.
/// Fractional values are floored (`2.7` is page 2, `0.5` is page 1). Huge
/// values stop at [`MAX_PAGE`] so the request stays valid and the server's
/// page count can correct it.
pub fn parse_page(raw: Option<&str>) -> u32 {
    let Some(value) = raw.map(str::trim).and_then(|s| s.parse::<f64>().ok()) else {
        return DEFAULT_PAGE;
    };
    if !value.is_finite() || value < 1.0 {
        return DEFAULT_PAGE;
    }
    value.floor().min(MAX_PAGE as f64) as u32
}

/// Page to redirect to when `requested` lies past the server-reported total.
///
/// `None` means the requested page is fine. A total of zero (empty dataset or
/// unknown) never triggers a correction.
pub fn correct_page(requested: u32, total_pages: u32) -> Option<u32> {
    if total_pages > 0 && requested > total_pages {
        Some(total_pages)
    } else {
        None
    }
}

/// Prev/next state of the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    pub current: u32,
    /// Server-reported total, unknown until the first response
    pub total: Option<u32>,
    pub prev: u32,
    pub next: u32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl PageNav {
    /// Targets follow the server's `prev`/`next` when given, else `current ± 1`
    /// (never below 1). A control is disabled while loading or when the server
    /// reported no page in that direction.
    pub fn new(current: u32, info: Option<&PageInfo>, loading: bool) -> Self {
        let server_prev = info.and_then(|i| i.prev);
        let server_next = info.and_then(|i| i.next);

        Self {
            current,
            total: info.map(|i| i.pages),
            prev: server_prev.unwrap_or(current.saturating_sub(1)).max(1),
            next: server_next.unwrap_or(current.saturating_add(1)),
            prev_disabled: loading || server_prev.is_none(),
            next_disabled: loading || server_next.is_none(),
        }
    }

    pub fn label(&self) -> String {
        match self.total {
            Some(total) => format!("Page {} / {}", self.current, total),
            None => format!("Page {} / …", self.current),
        }
    }
}

/// One slot of a numbered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Numbered page slots with ellipses, keeping the first and last page,
/// `siblings` pages either side of `current`, and a constant slot count
/// (`2 * siblings + 5`) once `total` exceeds it.
pub fn page_items(current: u32, total: u32, siblings: u32) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total) as u64;
    let total64 = total as u64;
    let siblings = siblings as u64;
    let slots = 2 * siblings + 5;

    if total64 <= slots {
        return (1..=total).map(PageItem::Page).collect();
    }

    let left = current.saturating_sub(siblings).max(1);
    let right = (current + siblings).min(total64);
    let show_left_ellipsis = left > 2;
    let show_right_ellipsis = right + 1 < total64;
    let edge_span = 3 + 2 * siblings;

    let pages = |from: u64, to: u64| (from..=to).map(|n| PageItem::Page(n as u32));

    let mut items = Vec::with_capacity(slots as usize);
    match (show_left_ellipsis, show_right_ellipsis) {
        (false, true) => {
            items.extend(pages(1, edge_span));
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        }
        (true, false) => {
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            items.extend(pages(total64 - edge_span + 1, total64));
        }
        _ => {
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            items.extend(pages(left, right));
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        }
    }
    items
}

/// Fetch state of the character grid.
///
/// The last good page stays visible while the next one loads. A failed
/// fetch drops it, so the grid and the pagination controls never describe a
/// page other than the one requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingState {
    requested: u32,
    shown: Option<CharacterPage>,
    loading: bool,
    error: Option<String>,
}

impl ListingState {
    /// Start loading `page`; clears any previous error.
    pub fn begin(&mut self, page: u32) {
        self.requested = page;
        self.loading = true;
        self.error = None;
    }

    pub fn is_requested(&self, page: u32) -> bool {
        self.requested == page
    }

    /// Store the result for `page`. Ignored unless `page` is still requested.
    pub fn finish(&mut self, page: u32, fetched: CharacterPage) -> bool {
        if !self.is_requested(page) {
            return false;
        }
        self.loading = false;
        self.shown = Some(fetched);
        true
    }

    /// Record a failure for `page`. Ignored unless `page` is still requested.
    pub fn fail(&mut self, page: u32, message: impl Into<String>) -> bool {
        if !self.is_requested(page) {
            return false;
        }
        self.loading = false;
        self.shown = None;
        self.error = Some(message.into());
        true
    }

    /// Page on screen: the requested one, or the previous one while loading.
    pub fn shown(&self) -> Option<&CharacterPage> {
        self.shown.as_ref()
    }

    pub fn info(&self) -> Option<PageInfo> {
        self.shown.as_ref().map(|p| p.info)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
