//! Fetch policy keyed on the requested page number.
//!
//! Deep offsets are slow on the backend, so the request shape changes with
//! the page: longer timeouts past [`DEEP_PAGE_THRESHOLD`], and past
//! [`LARGE_PAGE_THRESHOLD`] a separate endpoint that only supports `id asc`.
//! The pagination control asks for confirmation past the same
//! [`LARGE_PAGE_THRESHOLD`].

use super::filters::{SortField, SortOrder};

/// Pages above this use the optimized endpoint and need user confirmation.
pub const LARGE_PAGE_THRESHOLD: u32 = 50_000;

/// Pages above this get the long timeout.
pub const DEEP_PAGE_THRESHOLD: u32 = 10_000;

pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;
pub const DEEP_PAGE_TIMEOUT_MS: u32 = 60_000;

pub const FILTER_OPTIONS_PATH: &str = "/api/sales/filters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesEndpoint {
    Standard,
    Optimized,
}

impl SalesEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            SalesEndpoint::Standard => "/api/sales",
            SalesEndpoint::Optimized => "/api/sales/optimized",
        }
    }
}

/// One row of the policy table: applies to pages strictly above `above_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTier {
    pub above_page: u32,
    pub endpoint: SalesEndpoint,
    pub forced_sort: Option<(SortField, SortOrder)>,
    pub timeout_ms: u32,
}

/// Ordered by `above_page`, ascending. The last matching tier wins.
pub const FETCH_POLICY: [PageTier; 3] = [
    PageTier {
        above_page: 0,
        endpoint: SalesEndpoint::Standard,
        forced_sort: None,
        timeout_ms: DEFAULT_TIMEOUT_MS,
    },
    PageTier {
        above_page: DEEP_PAGE_THRESHOLD,
        endpoint: SalesEndpoint::Standard,
        forced_sort: None,
        timeout_ms: DEEP_PAGE_TIMEOUT_MS,
    },
    PageTier {
        above_page: LARGE_PAGE_THRESHOLD,
        endpoint: SalesEndpoint::Optimized,
        forced_sort: Some((SortField::Id, SortOrder::Asc)),
        timeout_ms: DEEP_PAGE_TIMEOUT_MS,
    },
];

/// How to request a given page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPlan {
    pub page: u32,
    pub endpoint: SalesEndpoint,
    pub forced_sort: Option<(SortField, SortOrder)>,
    pub timeout_ms: u32,
}

/// Resolves the plan for `page`. Page 0 is treated as page 1.
pub fn plan_for_page(page: u32) -> FetchPlan {
    let page = page.max(1);
    let tier = FETCH_POLICY
        .iter()
        .rev()
        .find(|t| page > t.above_page)
        .unwrap_or(&FETCH_POLICY[0]);

    FetchPlan {
        page,
        endpoint: tier.endpoint,
        forced_sort: tier.forced_sort,
        timeout_ms: tier.timeout_ms,
    }
}

/// Whether navigating to `page` should be confirmed by the user first
pub fn needs_confirmation(page: u32) -> bool {
    page > LARGE_PAGE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pages() {
        for page in [1, 2, 500, DEEP_PAGE_THRESHOLD] {
            let plan = plan_for_page(page);
            assert_eq!(plan.endpoint, SalesEndpoint::Standard);
            assert_eq!(plan.forced_sort, None);
            assert_eq!(plan.timeout_ms, 30_000);
        }
    }

    #[test]
    fn test_deep_pages_get_long_timeout() {
        for page in [DEEP_PAGE_THRESHOLD + 1, 25_000, LARGE_PAGE_THRESHOLD] {
            let plan = plan_for_page(page);
            assert_eq!(plan.endpoint, SalesEndpoint::Standard);
            assert_eq!(plan.timeout_ms, 60_000);
        }
    }

    #[test]
    fn test_large_pages_use_optimized_endpoint() {
        for page in [LARGE_PAGE_THRESHOLD + 1, 80_000, u32::MAX] {
            let plan = plan_for_page(page);
            assert_eq!(plan.endpoint, SalesEndpoint::Optimized);
            assert_eq!(plan.endpoint.path(), "/api/sales/optimized");
            assert_eq!(plan.forced_sort, Some((SortField::Id, SortOrder::Asc)));
            assert_eq!(plan.timeout_ms, 60_000);
        }
    }

    #[test]
    fn test_page_zero_is_page_one() {
        let plan = plan_for_page(0);
        assert_eq!(plan.page, 1);
        assert_eq!(plan.endpoint.path(), "/api/sales");
    }

    #[test]
    fn test_confirmation_matches_endpoint_switch() {
        assert!(!needs_confirmation(LARGE_PAGE_THRESHOLD));
        assert!(needs_confirmation(LARGE_PAGE_THRESHOLD + 1));
        for page in [LARGE_PAGE_THRESHOLD, LARGE_PAGE_THRESHOLD + 1] {
            assert_eq!(
                needs_confirmation(page),
                plan_for_page(page).endpoint == SalesEndpoint::Optimized
            );
        }
    }
}
