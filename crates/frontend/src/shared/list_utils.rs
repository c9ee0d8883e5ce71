//! Shared list helpers: the search box and sort indicators
use contracts::dashboards::d400_sales_dashboard::{SortField, SortOrder};
use leptos::prelude::*;

/// Search box with a clear button.
///
/// Controlled: the caller owns the text and decides when to commit it.
#[component]
pub fn SearchInput(
    /// Text currently in the box
    #[prop(into)]
    value: Signal<String>,
    /// Every edit, including the one made by the clear button
    #[prop(into)]
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.with(|v| v.trim().is_empty());

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                placeholder=placeholder
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || if is_filter_active() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=move |_| on_input.run(String::new())
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current: SortField, field: SortField, order: SortOrder) -> &'static str {
    if current == field {
        match order {
            SortOrder::Asc => " ▲",
            SortOrder::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current: SortField, field: SortField) -> &'static str {
    if current == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}
