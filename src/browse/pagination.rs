use crate::browse::query::BrowseQuery;

/// Maximum number of page links shown at once
pub const WINDOW_SIZE: usize = 5;

/// Compute the window of zero-based page indices to display.
///
/// The window holds exactly `min(WINDOW_SIZE, total_pages)` consecutive
/// indices, centered on `current` when possible and shifted the minimum
/// amount needed to stay inside `[0, total_pages - 1]`. A `current` beyond
/// the last page is treated as the last page for centering purposes.
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }

    let len = WINDOW_SIZE.min(total_pages);
    let current = current.min(total_pages - 1);
    let start = current
        .saturating_sub(WINDOW_SIZE / 2)
        .min(total_pages - len);

    (start..start + len).collect()
}

/// One page link in the pagination strip
#[derive(Debug, Clone)]
pub struct PageLink {
    pub number: usize, // 1-based display number
    pub href: String,
    pub current: bool,
}

/// Pagination strip view model. `None` means no pagination is rendered at
/// all; prev/next are `None` exactly when the corresponding edge is reached.
#[derive(Debug, Clone)]
pub struct Pager {
    pub pages: Vec<PageLink>,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

impl Pager {
    pub fn build(query: &BrowseQuery, total_pages: usize) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }

        let current = query.page.saturating_sub(1);

        let pages = page_window(current, total_pages)
            .into_iter()
            .map(|index| PageLink {
                number: index + 1,
                href: query.with_page(index + 1).href(),
                current: index == current,
            })
            .collect();

        let prev_href = if current == 0 {
            None
        } else {
            Some(query.with_page(query.page - 1).href())
        };

        let next_href = if current >= total_pages - 1 {
            None
        } else {
            Some(query.with_page(query.page + 1).href())
        };

        Some(Self {
            pages,
            prev_href,
            next_href,
        })
    }
}
