use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::api::{fetch_dataset_total, fetch_filter_options, fetch_sales};
use super::state::{SalesAction, SalesCommand, SalesDashboardState};
use crate::shared::debounce::schedule;
use crate::shared::theme::apply_dark_mode;

/// Reactive handle on the dashboard state.
///
/// Components read through [`SalesStore::select`] and write only by
/// dispatching actions; commands returned by the reducer are executed here.
#[derive(Clone, Copy)]
pub struct SalesStore {
    state: RwSignal<SalesDashboardState>,
}

impl SalesStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SalesDashboardState::default()),
        }
    }

    pub fn with_untracked<U>(&self, f: impl FnOnce(&SalesDashboardState) -> U) -> U {
        self.state.with_untracked(f)
    }

    /// Memoized view of one part of the state; notifies only when that part changes
    pub fn select<U>(&self, f: impl Fn(&SalesDashboardState) -> U + Send + Sync + 'static) -> Memo<U>
    where
        U: PartialEq + Send + Sync + 'static,
    {
        let state = self.state;
        Memo::new(move |_| state.with(|s| f(s)))
    }

    pub fn dispatch(&self, action: SalesAction) {
        // None once the owning component is gone; late responses are dropped
        let Some(commands) = self.state.try_update(|s| s.apply(action)) else {
            return;
        };
        for command in commands {
            self.run(command);
        }
    }

    /// Callback that dispatches the action built from its argument
    pub fn callback<T: 'static>(
        &self,
        to_action: impl Fn(T) -> SalesAction + Send + Sync + 'static,
    ) -> Callback<T> {
        let store = *self;
        Callback::new(move |value: T| store.dispatch(to_action(value)))
    }

    fn run(&self, command: SalesCommand) {
        let store = *self;
        match command {
            SalesCommand::FetchSales { seq, query } => spawn_local(async move {
                let action = match fetch_sales(&query).await {
                    Ok(page) => SalesAction::FetchSucceeded { seq, page },
                    Err(error) => SalesAction::FetchFailed { seq, error },
                };
                store.dispatch(action);
            }),
            SalesCommand::FetchFilterOptions => spawn_local(async move {
                match fetch_filter_options().await {
                    Ok(options) => store.dispatch(SalesAction::FilterOptionsLoaded(options)),
                    Err(e) => log::error!("Error fetching filter options: {}", e),
                }
            }),
            SalesCommand::FetchDatasetTotal => spawn_local(async move {
                match fetch_dataset_total().await {
                    Ok(Some(total)) => store.dispatch(SalesAction::DatasetTotalLoaded(total)),
                    Ok(None) => log::warn!("Dataset total response had no pagination block"),
                    Err(e) => log::error!("Error fetching total stats: {}", e),
                }
            }),
            SalesCommand::ScheduleSearchCommit { ticket, delay_ms } => {
                schedule(ticket, delay_ms, move |ticket| {
                    store.dispatch(SalesAction::SearchElapsed(ticket))
                });
            }
            SalesCommand::ScrollToTop => scroll_to_top(),
            SalesCommand::Notify(message) => notify(&message),
            SalesCommand::ApplyDarkMode(enabled) => apply_dark_mode(enabled),
        }
    }
}

impl Default for SalesStore {
    fn default() -> Self {
        Self::new()
    }
}

fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn notify(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("{}", message);
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        log::warn!("alert failed: {:?}", err);
    }
}
