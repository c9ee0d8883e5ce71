use leptos::prelude::*;
use thaw::*;

use super::super::state::SalesAction;
use super::super::store::SalesStore;
use super::filter_form::SalesFilterPanel;
use super::sales_table::SalesTable;
use super::sort_select::SortSelect;
use super::stats_cards::StatsCards;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;

/// Sales Management Dashboard: top bar, filters, stats, table and pagination
#[component]
pub fn SalesDashboard(store: SalesStore) -> impl IntoView {
    Effect::new(move |_| {
        store.dispatch(SalesAction::Mounted);
    });

    let loading = store.select(|s| s.loading);
    let sidebar_open = store.select(|s| s.sidebar_open);
    let dark_mode = store.select(|s| s.dark_mode);

    view! {
        <div class="sales-dashboard">
            <div class="top-bar">
                <div class="top-bar__left">
                    <button
                        class="mobile-menu-btn"
                        on:click=move |_| store.dispatch(SalesAction::ToggleSidebar)
                    >
                        {move || if sidebar_open.get() { icon("x") } else { icon("menu") }}
                    </button>
                    <h1 class="page-title">"Sales Management Dashboard"</h1>
                </div>

                <div class="top-bar__right">
                    <SearchInput
                        value=store.select(|s| s.search_input.clone())
                        on_input=store.callback(SalesAction::SearchInput)
                        placeholder="Search by Name or Phone..."
                    />
                    <SortSelect store=store />
                    <button
                        class="theme-toggle-btn"
                        on:click=move |_| store.dispatch(SalesAction::ToggleDarkMode)
                        title=move || {
                            if dark_mode.get() { "Switch to Light Mode" } else { "Switch to Dark Mode" }
                        }
                    >
                        {move || if dark_mode.get() { icon("sun") } else { icon("moon") }}
                    </button>
                </div>
            </div>

            <div class="content-area">
                <SalesFilterPanel store=store />
                <StatsCards store=store />

                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <div class="loading-container">
                            <Spinner label="Loading sales data..." />
                        </div>
                    }
                >
                    <SalesTable store=store />
                    <PaginationControls
                        current_page=store.select(|s| s.page)
                        total_pages=store.select(|s| s.total_pages)
                        total_records=store.select(|s| s.total_records)
                        is_loading=loading
                        on_page_change=store.callback(SalesAction::PageRequested)
                    />
                </Show>
            </div>
        </div>
    }
}
