use contracts::dashboards::d400_sales_dashboard::{SalesRecordDto, SortField};
use leptos::prelude::*;

use super::super::state::SalesAction;
use super::super::store::SalesStore;
use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::components::table::{format_amount, SortableHeaderCell};
use crate::shared::date_utils::{format_display_date, DisplayDate};
use crate::shared::icons::icon;
use crate::shared::phone_utils::format_phone;

const PLACEHOLDER: &str = "-";

/// Sortable columns in display order: (label, field, right-aligned)
const COLUMNS: [(&str, SortField, bool); 4] = [
    ("Txn ID", SortField::Id, false),
    ("Date", SortField::Date, false),
    ("Cust ID", SortField::CustomerId, false),
    ("Customer", SortField::CustomerName, false),
];

const COLUMNS_AFTER_PHONE: [(&str, SortField, bool); 8] = [
    ("Gender", SortField::Gender, false),
    ("Age", SortField::Age, false),
    ("Category", SortField::ProductCategory, false),
    ("Qty", SortField::Quantity, true),
    ("Amount", SortField::TotalAmount, true),
    ("Region", SortField::CustomerRegion, false),
    ("Product ID", SortField::ProductId, false),
    ("Employee", SortField::EmployeeName, false),
];

pub fn text_cell(value: Option<&str>) -> String {
    value.unwrap_or(PLACEHOLDER).to_string()
}

/// Whole numbers without a fraction, anything else as is
fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Missing or zero age renders the placeholder
pub fn age_cell(age: Option<f64>) -> String {
    match age {
        Some(age) if age != 0.0 => plain_number(age),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn quantity_cell(quantity: Option<f64>) -> String {
    plain_number(quantity.unwrap_or(0.0))
}

pub fn amount_cell(amount: Option<f64>) -> String {
    format_amount(amount.unwrap_or(0.0))
}

pub fn phone_cell(phone: Option<&str>) -> String {
    phone.map(format_phone).unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn gender_class(gender: Option<&str>) -> &'static str {
    match gender {
        None => "",
        Some(g) if g.eq_ignore_ascii_case("male") => "gender-male",
        Some(_) => "gender-female",
    }
}

fn date_cell(date: Option<&str>) -> AnyView {
    match format_display_date(date) {
        DisplayDate::Formatted(text) => text.into_any(),
        DisplayDate::Missing => PLACEHOLDER.into_any(),
        DisplayDate::Invalid => view! { <span class="invalid-date">"Invalid Date"</span> }.into_any(),
    }
}

fn record_row(record: SalesRecordDto) -> impl IntoView {
    let customer_id = record.customer_id.clone();
    let phone_raw = record.phone_number.clone();

    view! {
        <tr>
            <td class="mono-font bold-text">{text_cell(record.id.as_deref())}</td>
            <td class="mono-font">{date_cell(record.date.as_deref())}</td>
            <td class="mono-font">{text_cell(record.customer_id.as_deref())}</td>
            <td>
                <div class="customer-cell">
                    <span class="bold-text">{text_cell(record.customer_name.as_deref())}</span>
                    {customer_id.map(|id| view! {
                        <span class="mono-font customer-cell__id">{format!("ID: {}", id)}</span>
                    })}
                </div>
            </td>
            <td>
                <div class="phone-cell">
                    <span class="mono-font">{phone_cell(record.phone_number.as_deref())}</span>
                    {phone_raw.map(|raw| view! {
                        <button
                            class="copy-icon"
                            title="Copy phone number"
                            on:click=move |_| copy_to_clipboard(&raw)
                        >
                            {icon("copy")}
                        </button>
                    })}
                </div>
            </td>
            <td class=gender_class(record.gender.as_deref())>
                {text_cell(record.gender.as_deref())}
            </td>
            <td><div class="quantity-badge">{age_cell(record.age)}</div></td>
            <td><span class="category-tag">{text_cell(record.product_category.as_deref())}</span></td>
            <td class="text-center"><div class="quantity-badge">{quantity_cell(record.quantity)}</div></td>
            <td class="amount-cell">{amount_cell(record.total_amount)}</td>
            <td><span class="region-badge">{text_cell(record.customer_region.as_deref())}</span></td>
            <td class="mono-font">{text_cell(record.product_id.as_deref())}</td>
            <td>{text_cell(record.employee_name.as_deref())}</td>
        </tr>
    }
}

#[component]
pub fn SalesTable(store: SalesStore) -> impl IntoView {
    let records = store.select(|s| s.records.clone());
    let current_sort = store.select(|s| s.sort_by);
    let sort_order = store.select(|s| s.sort_order);
    let on_sort = store.callback(SalesAction::HeaderSort);

    let header = move |(label, field, right): (&'static str, SortField, bool)| {
        let align = if right { "right" } else { "left" };
        view! {
            <SortableHeaderCell
                label=label
                field=field
                current_sort=current_sort
                sort_order=sort_order
                on_sort=on_sort
                align=align
            />
        }
    };

    view! {
        <Show
            when=move || records.with(|r| !r.is_empty())
            fallback=|| view! {
                <div class="no-data">
                    <h3>"No sales data found"</h3>
                    <p>"Try adjusting your filters or search criteria"</p>
                </div>
            }
        >
            <div class="table-container">
                <table class="sales-table">
                    <thead>
                        <tr>
                            {COLUMNS.into_iter().map(header).collect_view()}
                            <th>"Phone"</th>
                            {COLUMNS_AFTER_PHONE.into_iter().map(header).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || records.get().into_iter().map(record_row).collect_view()}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_placeholder() {
        assert_eq!(text_cell(None), "-");
        assert_eq!(text_cell(Some("Neha Shah")), "Neha Shah");
    }

    #[test]
    fn test_age_cell() {
        assert_eq!(age_cell(None), "-");
        assert_eq!(age_cell(Some(0.0)), "-");
        assert_eq!(age_cell(Some(34.0)), "34");
    }

    #[test]
    fn test_quantity_and_amount_default_to_zero() {
        assert_eq!(quantity_cell(None), "0");
        assert_eq!(quantity_cell(Some(3.0)), "3");
        assert_eq!(amount_cell(None), "0");
        assert_eq!(amount_cell(Some(123456.5)), "1,23,456.5");
    }

    #[test]
    fn test_phone_cell() {
        assert_eq!(phone_cell(None), "-");
        assert_eq!(phone_cell(Some("9876543210")), "98765 43210");
    }

    #[test]
    fn test_gender_class() {
        assert_eq!(gender_class(Some("Male")), "gender-male");
        assert_eq!(gender_class(Some("MALE")), "gender-male");
        assert_eq!(gender_class(Some("Female")), "gender-female");
        assert_eq!(gender_class(None), "");
    }
}
