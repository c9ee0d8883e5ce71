use contracts::dashboards::d400_sales_dashboard::SalesRecordDto;
use leptos::prelude::*;

use super::super::store::SalesStore;
use crate::shared::components::table::{format_amount, format_count, format_money};
use crate::shared::components::StatCard;

/// Totals over the records of the current page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageStats {
    pub total_units: f64,
    pub total_revenue: f64,
    pub average_order: f64,
}

pub fn page_stats(records: &[SalesRecordDto]) -> PageStats {
    let total_units: f64 = records.iter().filter_map(|r| r.quantity).sum();
    let total_revenue: f64 = records.iter().filter_map(|r| r.total_amount).sum();
    let average_order = if records.is_empty() {
        0.0
    } else {
        total_revenue / records.len() as f64
    };

    PageStats {
        total_units,
        total_revenue,
        average_order,
    }
}

#[component]
pub fn StatsCards(store: SalesStore) -> impl IntoView {
    let stats = store.select(|s| page_stats(&s.records));
    let dataset_total = store.select(|s| s.dataset_total);

    view! {
        <div class="stats-cards">
            <StatCard
                label="Total Units Sold"
                icon_name="units"
                value=Signal::derive(move || format_count(stats.get().total_units))
            />
            <StatCard
                label="Total Revenue"
                icon_name="revenue"
                value=Signal::derive(move || format!("₹{}", format_amount(stats.get().total_revenue)))
            />
            <StatCard
                label="Average Order"
                icon_name="average"
                value=Signal::derive(move || format!("₹{}", format_money(stats.get().average_order)))
            />
            {move || dataset_total.get().map(|total| view! {
                <StatCard
                    label="Total Orders"
                    icon_name="orders"
                    value=format_count(total as f64)
                    subtitle=Some("Across the whole dataset".to_string())
                />
            })}
        </div>
    }
}
