//! Page-number arithmetic behind the pagination control

use thiserror::Error;

use super::components::table::format_count;

/// Show every page button up to this many pages
const MAX_FULL_PAGE_LIST: u32 = 7;

/// Pages on each side of the current page in the sliding window
const WINDOW_RADIUS: u32 = 2;

/// Longest input the jump field accepts
pub const MAX_JUMP_INPUT_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page buttons to render.
///
/// Up to seven pages are listed in full. Beyond that the first and last page
/// are always shown, around a window of `current ± 2`, with an ellipsis on
/// each side that does not reach the ends.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    if total <= 1 {
        return vec![PageItem::Page(1)];
    }
    if total <= MAX_FULL_PAGE_LIST {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];
    if current > WINDOW_RADIUS + 2 {
        items.push(PageItem::Ellipsis);
    }

    let start = current.saturating_sub(WINDOW_RADIUS).max(2);
    let end = current.saturating_add(WINDOW_RADIUS).min(total - 1);
    items.extend((start..=end).map(PageItem::Page));

    if current < total.saturating_sub(WINDOW_RADIUS + 1) {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

/// Clamp a requested page into `[1, total_pages]`
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// 1-based positions of the first and last record shown on `current`
pub fn visible_range(current: u32, page_size: u32, total_records: u64) -> (u64, u64) {
    let current = u64::from(current.max(1));
    let page_size = u64::from(page_size);
    let start = ((current - 1) * page_size + 1).min(total_records);
    let end = (current * page_size).min(total_records);
    (start, end)
}

/// Button label; pages above 1000 are shortened to thousands ("12k")
pub fn compact_page_label(page: u32) -> String {
    if page > 1000 {
        format!("{}k", (f64::from(page) / 1000.0).round() as u64)
    } else {
        page.to_string()
    }
}

/// Confirmation text for pages past the large-page threshold
pub fn large_page_prompt(page: u32, from_jump: bool) -> String {
    let page = format_count(f64::from(page));
    if from_jump {
        format!("Loading page {} might take longer due to large dataset. Continue?", page)
    } else {
        format!("Loading page {} might take longer. Continue?", page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JumpError {
    #[error("Please enter a valid number")]
    NotANumber,
    #[error("Page number must be at least 1")]
    BelowMinimum,
    #[error("Maximum page is {0}")]
    AboveMaximum(u32),
}

/// Whether an edit of the jump field is accepted: empty or digits only, and
/// not longer than [`MAX_JUMP_INPUT_LEN`].
pub fn accepts_jump_input(value: &str) -> bool {
    value.len() <= MAX_JUMP_INPUT_LEN && value.chars().all(|c| c.is_ascii_digit())
}

/// Validate the jump field before navigating
pub fn parse_jump_page(input: &str, total_pages: u32) -> Result<u32, JumpError> {
    let page: u32 = input.trim().parse().map_err(|_| JumpError::NotANumber)?;
    if page < 1 {
        return Err(JumpError::BelowMinimum);
    }
    if page > total_pages {
        return Err(JumpError::AboveMaximum(total_pages));
    }
    Ok(page)
}
