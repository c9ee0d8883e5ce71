use contracts::dashboards::d400_sales_dashboard::{
    parse_age, parse_filter_date, FilterList, SalesFilters,
};
use leptos::prelude::*;
use thaw::*;

use super::super::state::SalesAction;
use super::super::store::SalesStore;
use crate::shared::components::ui::{Input, Select};
use crate::shared::components::FilterPanel;
use crate::shared::icons::icon;

/// The tag list can be long; the select offers only the first ones
pub const MAX_TAG_OPTIONS: usize = 20;

pub fn to_options<'a>(values: impl IntoIterator<Item = &'a String>) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.clone(), v.clone())).collect()
}

/// Copy of the current filters with `edit` applied, dispatched as a change
fn change_filters(store: SalesStore, edit: impl FnOnce(&mut SalesFilters)) {
    let mut filters = store.with_untracked(|s| s.filters.clone());
    edit(&mut filters);
    store.dispatch(SalesAction::FiltersChanged(filters));
}

#[component]
fn ListFilter(
    store: SalesStore,
    list: FilterList,
    label: &'static str,
    placeholder: &'static str,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    let value = store.select(move |s| s.filters.selected(list).to_string());
    let on_change = Callback::new(move |value: String| {
        change_filters(store, |f| f.select_single(list, &value))
    });

    view! {
        <Select
            label=label
            placeholder=placeholder
            value=value
            options=options
            on_change=on_change
        />
    }
}

#[component]
pub fn SalesFilterPanel(store: SalesStore) -> impl IntoView {
    let is_expanded = store.select(|s| s.filters_visible);
    let active_count = store.select(|s| s.active_filter_count());

    let regions = store.select(|s| to_options(&s.filter_options.customer_regions));
    let genders = store.select(|s| to_options(&s.filter_options.genders));
    let categories = store.select(|s| to_options(&s.filter_options.product_categories));
    let tags = store.select(|s| to_options(s.filter_options.tags.iter().take(MAX_TAG_OPTIONS)));
    let payment_methods = store.select(|s| to_options(&s.filter_options.payment_methods));

    let min_age = store.select(|s| s.filters.min_age.map(|a| a.to_string()).unwrap_or_default());
    let max_age = store.select(|s| s.filters.max_age.map(|a| a.to_string()).unwrap_or_default());
    let start_date = store.select(|s| {
        s.filters
            .start_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    });
    let end_date = store.select(|s| {
        s.filters
            .end_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    });

    let actions = move || {
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| {
                    // Re-dispatching the unchanged filters re-runs the query
                    change_filters(store, |_| {})
                }
            >
                "Apply"
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| store.dispatch(SalesAction::ResetFilters)
            >
                {icon("x")}
                "Reset"
            </Button>
        }
    };

    let content = move || {
        view! {
            <div class="filter-row">
                <ListFilter
                    store=store
                    list=FilterList::CustomerRegion
                    label="Region"
                    placeholder="All Regions"
                    options=regions
                />
                <ListFilter
                    store=store
                    list=FilterList::Gender
                    label="Gender"
                    placeholder="All Genders"
                    options=genders
                />

                <div class="form__group">
                    <label class="form__label">"Age Range"</label>
                    <div class="range-inputs-inline">
                        <Input
                            input_type="number"
                            placeholder="Min"
                            min="0"
                            value=min_age
                            on_input=Callback::new(move |v: String| {
                                change_filters(store, |f| f.min_age = parse_age(&v))
                            })
                        />
                        <span>"-"</span>
                        <Input
                            input_type="number"
                            placeholder="Max"
                            min="0"
                            value=max_age
                            on_input=Callback::new(move |v: String| {
                                change_filters(store, |f| f.max_age = parse_age(&v))
                            })
                        />
                    </div>
                </div>

                <ListFilter
                    store=store
                    list=FilterList::ProductCategory
                    label="Category"
                    placeholder="All Categories"
                    options=categories
                />
                <ListFilter
                    store=store
                    list=FilterList::Tags
                    label="Tags"
                    placeholder="All Tags"
                    options=tags
                />
                <ListFilter
                    store=store
                    list=FilterList::PaymentMethod
                    label="Payment"
                    placeholder="All Methods"
                    options=payment_methods
                />

                <Input
                    label="From Date"
                    input_type="date"
                    value=start_date
                    on_input=Callback::new(move |v: String| {
                        change_filters(store, |f| f.start_date = parse_filter_date(&v))
                    })
                />
                <Input
                    label="To Date"
                    input_type="date"
                    value=end_date
                    on_input=Callback::new(move |v: String| {
                        change_filters(store, |f| f.end_date = parse_filter_date(&v))
                    })
                />
            </div>
        }
    };

    view! {
        <FilterPanel
            is_expanded=is_expanded
            on_toggle=store.callback(|_: ()| SalesAction::ToggleFilters)
            active_filters_count=active_count
            actions=actions
            filter_content=content
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_use_value_as_label() {
        let values = vec!["North".to_string(), "South".to_string()];
        assert_eq!(
            to_options(&values),
            vec![
                ("North".to_string(), "North".to_string()),
                ("South".to_string(), "South".to_string())
            ]
        );
    }

    #[test]
    fn test_tag_options_are_capped() {
        let tags: Vec<String> = (0..30).map(|i| format!("tag{}", i)).collect();
        let options = to_options(tags.iter().take(MAX_TAG_OPTIONS));
        assert_eq!(options.len(), MAX_TAG_OPTIONS);
        assert_eq!(options[19].0, "tag19");
    }
}
