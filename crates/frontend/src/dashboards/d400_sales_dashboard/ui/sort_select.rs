use contracts::dashboards::d400_sales_dashboard::{SortField, SortOrder};
use leptos::prelude::*;

use super::super::state::SalesAction;
use super::super::store::SalesStore;
use crate::shared::components::ui::Select;

/// Field/direction pairs offered by the sort dropdown
pub const SORT_PRESETS: [(SortField, SortOrder, &str); 10] = [
    (SortField::Date, SortOrder::Desc, "Date (Newest)"),
    (SortField::Date, SortOrder::Asc, "Date (Oldest)"),
    (SortField::TotalAmount, SortOrder::Desc, "Amount (High→Low)"),
    (SortField::TotalAmount, SortOrder::Asc, "Amount (Low→High)"),
    (SortField::Quantity, SortOrder::Desc, "Quantity (High→Low)"),
    (SortField::Quantity, SortOrder::Asc, "Quantity (Low→High)"),
    (SortField::CustomerName, SortOrder::Asc, "Name (A→Z)"),
    (SortField::CustomerName, SortOrder::Desc, "Name (Z→A)"),
    (SortField::Age, SortOrder::Desc, "Age (High→Low)"),
    (SortField::Age, SortOrder::Asc, "Age (Low→High)"),
];

/// `<option>` value for a pair, e.g. `totalAmount-desc`
pub fn preset_value(field: SortField, order: SortOrder) -> String {
    format!("{}-{}", field.as_str(), order.as_str())
}

pub fn parse_preset(value: &str) -> Option<(SortField, SortOrder)> {
    let (field, order) = value.split_once('-')?;
    Some((SortField::parse(field)?, SortOrder::parse(order)?))
}

#[component]
pub fn SortSelect(store: SalesStore) -> impl IntoView {
    let value = store.select(|s| preset_value(s.sort_by, s.sort_order));
    let options: Vec<(String, String)> = SORT_PRESETS
        .iter()
        .map(|(field, order, label)| (preset_value(*field, *order), label.to_string()))
        .collect();

    let on_change = Callback::new(move |value: String| match parse_preset(&value) {
        Some((field, order)) => store.dispatch(SalesAction::DropdownSort(field, order)),
        None => log::warn!("Unknown sort option: {}", value),
    });

    view! {
        <Select
            label="Sort by"
            value=value
            options=Signal::stored(options)
            on_change=on_change
        />
    }
}
