//! Sortable table header cell
//!
//! # Example
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Amount"
//!     field=SortField::TotalAmount
//!     current_sort=Signal::derive(move || state.with(|s| s.sort_by))
//!     sort_order=Signal::derive(move || state.with(|s| s.sort_order))
//!     on_sort=Callback::new(move |field| store.dispatch(SalesAction::HeaderSort(field)))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::dashboards::d400_sales_dashboard::{SortField, SortOrder};
use leptos::prelude::*;

/// Header cell that reports clicks as a sort request for its field and shows
/// the direction indicator when its field is the active one.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Field this column sorts by
    field: SortField,

    #[prop(into)]
    current_sort: Signal<SortField>,

    #[prop(into)]
    sort_order: Signal<SortOrder>,

    on_sort: Callback<SortField>,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_class = if align == "right" {
        "table__sortable-header table__sortable-header--right"
    } else {
        "table__sortable-header"
    };

    view! {
        <th class=header_class on:click=move |_| on_sort.run(field)>
            {label}
            <span class=move || get_sort_class(current_sort.get(), field)>
                {move || get_sort_indicator(current_sort.get(), field, sort_order.get())}
            </span>
        </th>
    }
}
