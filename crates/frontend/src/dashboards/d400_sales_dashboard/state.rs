//! View state of the sales dashboard.
//!
//! All mutation goes through [`SalesDashboardState::apply`], which returns the
//! side effects to perform as [`SalesCommand`]s. The Leptos layer
//! ([`super::store::SalesStore`]) runs them and feeds their outcomes back in as
//! actions, so everything here is plain data and testable without a browser.

use contracts::dashboards::d400_sales_dashboard::{
    FilterOptionsDto, SalesFilters, SalesPage, SalesQuery, SalesRecordDto, SortField, SortOrder,
};

use super::api::FetchError;
use crate::shared::debounce::{DebounceTicket, Debouncer};
use crate::shared::pagination::clamp_page;

/// Pause after the last keystroke before the search text is committed
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

#[derive(Debug, Clone)]
pub struct SalesDashboardState {
    pub records: Vec<SalesRecordDto>,
    pub filter_options: FilterOptionsDto,
    pub filters: SalesFilters,
    /// Text in the search box, not yet committed
    pub search_input: String,
    /// Committed search text sent to the backend
    pub search: String,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub page: u32,
    pub total_pages: u32,
    pub total_records: u64,
    /// Record count of the whole dataset, loaded once at startup
    pub dataset_total: Option<u64>,
    pub loading: bool,
    pub dark_mode: bool,
    pub filters_visible: bool,
    pub sidebar_open: bool,
    search_debounce: Debouncer<String>,
    request_seq: u64,
}

impl Default for SalesDashboardState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            filter_options: FilterOptionsDto::default(),
            filters: SalesFilters::default(),
            search_input: String::new(),
            search: String::new(),
            sort_by: SortField::Date,
            sort_order: SortOrder::Desc,
            page: 1,
            total_pages: 1,
            total_records: 0,
            dataset_total: None,
            loading: false,
            dark_mode: false,
            filters_visible: true,
            sidebar_open: false,
            search_debounce: Debouncer::new(),
            request_seq: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SalesAction {
    /// Dashboard mounted: load options, dataset total and the first page
    Mounted,
    /// A keystroke in the search box
    SearchInput(String),
    /// The debounce timer for `ticket` elapsed
    SearchElapsed(DebounceTicket),
    /// New filter values; also sent unchanged by the Apply button
    FiltersChanged(SalesFilters),
    ResetFilters,
    /// Click on a column header
    HeaderSort(SortField),
    /// Choice in the sort dropdown
    DropdownSort(SortField, SortOrder),
    PageRequested(u32),
    FetchSucceeded { seq: u64, page: SalesPage },
    FetchFailed { seq: u64, error: FetchError },
    FilterOptionsLoaded(FilterOptionsDto),
    DatasetTotalLoaded(u64),
    ToggleDarkMode,
    ToggleFilters,
    ToggleSidebar,
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum SalesCommand {
    FetchSales { seq: u64, query: SalesQuery },
    FetchFilterOptions,
    FetchDatasetTotal,
    ScheduleSearchCommit { ticket: DebounceTicket, delay_ms: u32 },
    ScrollToTop,
    /// Blocking message to the user
    Notify(String),
    ApplyDarkMode(bool),
}

impl SalesDashboardState {
    /// Everything the current listing depends on
    pub fn query(&self) -> SalesQuery {
        SalesQuery {
            filters: self.filters.clone(),
            search: self.search.clone(),
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            page: self.page,
        }
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    pub fn apply(&mut self, action: SalesAction) -> Vec<SalesCommand> {
        match action {
            SalesAction::Mounted => vec![
                SalesCommand::FetchFilterOptions,
                SalesCommand::FetchDatasetTotal,
                self.fetch(),
            ],

            SalesAction::SearchInput(text) => {
                self.search_input = text.clone();
                let ticket = self.search_debounce.push(text);
                vec![SalesCommand::ScheduleSearchCommit {
                    ticket,
                    delay_ms: SEARCH_DEBOUNCE_MS,
                }]
            }

            SalesAction::SearchElapsed(ticket) => match self.search_debounce.fire(ticket) {
                Some(value) if value != self.search => {
                    self.search = value;
                    self.page = 1;
                    vec![self.fetch()]
                }
                _ => Vec::new(),
            },

            SalesAction::FiltersChanged(filters) => {
                self.filters = filters;
                self.page = 1;
                vec![self.fetch()]
            }

            SalesAction::ResetFilters => {
                self.filters = SalesFilters::default();
                self.search_input.clear();
                self.search.clear();
                self.search_debounce.cancel();
                self.sort_by = SortField::Date;
                self.sort_order = SortOrder::Desc;
                self.page = 1;
                vec![self.fetch()]
            }

            SalesAction::HeaderSort(field) => {
                if field == self.sort_by {
                    self.sort_order = self.sort_order.toggled();
                } else {
                    self.sort_by = field;
                    self.sort_order = field.default_order();
                }
                self.page = 1;
                vec![self.fetch()]
            }

            SalesAction::DropdownSort(field, order) => {
                self.sort_by = field;
                self.sort_order = order;
                self.page = 1;
                vec![self.fetch()]
            }

            SalesAction::PageRequested(requested) => {
                let page = clamp_page(requested, self.total_pages);
                if page == self.page {
                    return Vec::new();
                }
                self.page = page;
                vec![self.fetch(), SalesCommand::ScrollToTop]
            }

            SalesAction::FetchSucceeded { seq, page } => {
                if !self.is_latest(seq) {
                    log::debug!("Dropping stale response #{} (latest #{})", seq, self.request_seq);
                    return Vec::new();
                }
                self.loading = false;
                self.records = page.records;
                if let Some(info) = page.pagination {
                    self.total_pages = info.total_pages;
                    self.total_records = info.total_records;
                    if info.current_page != self.page {
                        log::info!("Page adjusted from {} to {}", self.page, info.current_page);
                        self.page = info.current_page;
                    }
                }
                if self.records.is_empty() && self.page > 1 {
                    log::info!("No data for page {}", self.page);
                }
                Vec::new()
            }

            SalesAction::FetchFailed { seq, error } => {
                if !self.is_latest(seq) {
                    log::debug!("Dropping stale failure #{}: {}", seq, error);
                    return Vec::new();
                }
                let failed_page = self.page;
                log::error!("Error fetching sales data for page {}: {}", failed_page, error);

                self.loading = false;
                self.records.clear();
                self.total_pages = 1;
                self.total_records = 0;
                self.page = 1;
                vec![SalesCommand::Notify(error.user_message(failed_page))]
            }

            SalesAction::FilterOptionsLoaded(options) => {
                self.filter_options = options;
                Vec::new()
            }

            SalesAction::DatasetTotalLoaded(total) => {
                self.dataset_total = Some(total);
                Vec::new()
            }

            SalesAction::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                vec![SalesCommand::ApplyDarkMode(self.dark_mode)]
            }

            SalesAction::ToggleFilters => {
                self.filters_visible = !self.filters_visible;
                Vec::new()
            }

            SalesAction::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                Vec::new()
            }
        }
    }

    fn is_latest(&self, seq: u64) -> bool {
        seq == self.request_seq
    }

    /// Tag a new listing request; any earlier one becomes stale.
    fn fetch(&mut self) -> SalesCommand {
        self.request_seq += 1;
        self.loading = true;
        SalesCommand::FetchSales {
            seq: self.request_seq,
            query: self.query(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_sales_dashboard::PageInfo;

    fn fetch_of(commands: &[SalesCommand]) -> Option<(u64, SalesQuery)> {
        commands.iter().find_map(|c| match c {
            SalesCommand::FetchSales { seq, query } => Some((*seq, query.clone())),
            _ => None,
        })
    }

    fn ticket_of(commands: &[SalesCommand]) -> DebounceTicket {
        match commands {
            [SalesCommand::ScheduleSearchCommit { ticket, delay_ms }] => {
                assert_eq!(*delay_ms, SEARCH_DEBOUNCE_MS);
                *ticket
            }
            other => panic!("expected a single schedule command, got {:?}", other),
        }
    }

    fn page_of(records: usize, current: u32, total_pages: u32, total_records: u64) -> SalesPage {
        SalesPage {
            records: vec![SalesRecordDto::default(); records],
            pagination: Some(PageInfo {
                current_page: current,
                total_pages,
                total_records,
            }),
        }
    }

    /// State that has loaded `total_pages` pages and sits on `page`
    fn loaded(page: u32, total_pages: u32) -> SalesDashboardState {
        let mut state = SalesDashboardState::default();
        let (seq, _) = fetch_of(&state.apply(SalesAction::Mounted)).unwrap();
        state.apply(SalesAction::FetchSucceeded {
            seq,
            page: page_of(10, 1, total_pages, u64::from(total_pages) * 10),
        });
        if page != 1 {
            let (seq, _) = fetch_of(&state.apply(SalesAction::PageRequested(page))).unwrap();
            state.apply(SalesAction::FetchSucceeded {
                seq,
                page: page_of(10, page, total_pages, u64::from(total_pages) * 10),
            });
        }
        state
    }

    #[test]
    fn test_mount_loads_everything() {
        let mut state = SalesDashboardState::default();
        let commands = state.apply(SalesAction::Mounted);
        assert!(commands.contains(&SalesCommand::FetchFilterOptions));
        assert!(commands.contains(&SalesCommand::FetchDatasetTotal));
        let (_, query) = fetch_of(&commands).unwrap();
        assert_eq!(query, SalesQuery::default());
        assert!(state.loading);
    }

    #[test]
    fn test_debounced_search_commits_last_value_once() {
        let mut state = loaded(3, 20);
        let first = ticket_of(&state.apply(SalesAction::SearchInput("n".into())));
        let second = ticket_of(&state.apply(SalesAction::SearchInput("ne".into())));
        let third = ticket_of(&state.apply(SalesAction::SearchInput("neh".into())));
        assert_eq!(state.search_input, "neh");
        assert_eq!(state.search, "");

        assert!(state.apply(SalesAction::SearchElapsed(first)).is_empty());
        assert!(state.apply(SalesAction::SearchElapsed(second)).is_empty());
        let commands = state.apply(SalesAction::SearchElapsed(third));
        let (_, query) = fetch_of(&commands).unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(query.search, "neh");
        assert_eq!(query.page, 1);

        assert!(state.apply(SalesAction::SearchElapsed(third)).is_empty());
    }

    #[test]
    fn test_search_commit_without_change_does_not_fetch() {
        let mut state = loaded(1, 5);
        let ticket = ticket_of(&state.apply(SalesAction::SearchInput(String::new())));
        assert!(state.apply(SalesAction::SearchElapsed(ticket)).is_empty());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = loaded(4, 20);
        let filters = SalesFilters {
            customer_region: vec!["East".into()],
            ..SalesFilters::default()
        };
        let (_, query) = fetch_of(&state.apply(SalesAction::FiltersChanged(filters.clone()))).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.filters, filters);

        let again = state.apply(SalesAction::FiltersChanged(filters));
        assert!(fetch_of(&again).is_some());
    }

    #[test]
    fn test_header_sort_toggles_and_defaults() {
        let mut state = loaded(2, 20);
        assert_eq!((state.sort_by, state.sort_order), (SortField::Date, SortOrder::Desc));

        state.apply(SalesAction::HeaderSort(SortField::Date));
        assert_eq!(state.sort_order, SortOrder::Asc);
        assert_eq!(state.page, 1);

        state.apply(SalesAction::HeaderSort(SortField::CustomerName));
        assert_eq!((state.sort_by, state.sort_order), (SortField::CustomerName, SortOrder::Asc));

        state.apply(SalesAction::HeaderSort(SortField::Quantity));
        assert_eq!((state.sort_by, state.sort_order), (SortField::Quantity, SortOrder::Desc));
    }

    #[test]
    fn test_dropdown_sort_sets_both() {
        let mut state = loaded(1, 5);
        let (_, query) = fetch_of(&state.apply(SalesAction::DropdownSort(
            SortField::Age,
            SortOrder::Asc,
        )))
        .unwrap();
        assert_eq!((query.sort_by, query.sort_order), (SortField::Age, SortOrder::Asc));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = loaded(3, 20);
        state.apply(SalesAction::DropdownSort(SortField::Age, SortOrder::Asc));
        state.apply(SalesAction::FiltersChanged(SalesFilters {
            min_age: Some(30),
            ..SalesFilters::default()
        }));
        let pending = ticket_of(&state.apply(SalesAction::SearchInput("ash".into())));

        let (_, query) = fetch_of(&state.apply(SalesAction::ResetFilters)).unwrap();
        assert_eq!(query, SalesQuery::default());
        assert_eq!(state.search_input, "");
        assert!(state.apply(SalesAction::SearchElapsed(pending)).is_empty());
    }

    #[test]
    fn test_page_request_is_clamped() {
        let mut state = loaded(1, 20);
        let commands = state.apply(SalesAction::PageRequested(500));
        let (_, query) = fetch_of(&commands).unwrap();
        assert_eq!(query.page, 20);
        assert!(commands.contains(&SalesCommand::ScrollToTop));

        let (_, query) = fetch_of(&state.apply(SalesAction::PageRequested(0))).unwrap();
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_same_page_request_is_ignored() {
        let mut state = loaded(5, 20);
        assert!(state.apply(SalesAction::PageRequested(5)).is_empty());
    }

    #[test]
    fn test_backend_page_is_adopted_without_refetch() {
        let mut state = loaded(1, 20);
        let (seq, _) = fetch_of(&state.apply(SalesAction::PageRequested(15))).unwrap();
        let commands = state.apply(SalesAction::FetchSucceeded {
            seq,
            page: page_of(10, 12, 12, 120),
        });
        assert!(commands.is_empty());
        assert_eq!(state.page, 12);
        assert_eq!(state.total_pages, 12);
        assert!(!state.loading);
    }

    #[test]
    fn test_failure_resets_and_notifies() {
        let mut state = loaded(41, 100);
        let (seq, _) = fetch_of(&state.apply(SalesAction::PageRequested(42))).unwrap();
        let commands = state.apply(SalesAction::FetchFailed {
            seq,
            error: FetchError::Server(500),
        });

        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.total_records, 0);
        assert!(state.records.is_empty());
        assert!(!state.loading);
        match commands.as_slice() {
            [SalesCommand::Notify(message)] => assert!(message.contains("page 42")),
            other => panic!("expected a notification, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_outcomes_are_ignored() {
        let mut state = loaded(1, 20);
        let (old, _) = fetch_of(&state.apply(SalesAction::PageRequested(2))).unwrap();
        let (latest, _) = fetch_of(&state.apply(SalesAction::PageRequested(3))).unwrap();

        assert!(state
            .apply(SalesAction::FetchFailed {
                seq: old,
                error: FetchError::Timeout(30_000),
            })
            .is_empty());
        state.apply(SalesAction::FetchSucceeded {
            seq: old,
            page: page_of(1, 2, 20, 200),
        });
        assert_eq!(state.page, 3);
        assert!(state.loading);

        state.apply(SalesAction::FetchSucceeded {
            seq: latest,
            page: page_of(10, 3, 20, 200),
        });
        assert_eq!(state.page, 3);
        assert_eq!(state.records.len(), 10);
        assert!(!state.loading);
    }

    #[test]
    fn test_missing_pagination_keeps_totals() {
        let mut state = loaded(1, 20);
        let (seq, _) = fetch_of(&state.apply(SalesAction::PageRequested(2))).unwrap();
        state.apply(SalesAction::FetchSucceeded {
            seq,
            page: SalesPage {
                records: Vec::new(),
                pagination: None,
            },
        });
        assert_eq!(state.total_pages, 20);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_toggles() {
        let mut state = SalesDashboardState::default();
        assert_eq!(
            state.apply(SalesAction::ToggleDarkMode),
            vec![SalesCommand::ApplyDarkMode(true)]
        );
        assert!(state.filters_visible);
        state.apply(SalesAction::ToggleFilters);
        assert!(!state.filters_visible);
        state.apply(SalesAction::ToggleSidebar);
        assert!(state.sidebar_open);
    }
}
