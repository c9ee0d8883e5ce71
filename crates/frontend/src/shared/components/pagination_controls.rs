use crate::shared::components::table::format_count;
use crate::shared::icons::icon;
use crate::shared::pagination::{
    accepts_jump_input, compact_page_label, large_page_prompt, page_items, parse_jump_page,
    visible_range, PageItem, MAX_JUMP_INPUT_LEN,
};
use contracts::dashboards::d400_sales_dashboard::{needs_confirmation, PAGE_SIZE};
use leptos::prelude::*;

/// Ask before loading a page past the large-page threshold.
fn confirm_large_page(page: u32, from_jump: bool) -> bool {
    if !needs_confirmation(page) {
        return true;
    }
    let Some(window) = web_sys::window() else {
        return false;
    };
    window
        .confirm_with_message(&large_page_prompt(page, from_jump))
        .unwrap_or(false)
}

fn format_records(n: u64) -> String {
    format_count(n as f64)
}

/// PaginationControls component: summary, page buttons and the jump field.
///
/// Requests are reported through `on_page_change` only for pages inside
/// `[1, total_pages]` that differ from the current one.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    #[prop(into)]
    total_records: Signal<u64>,

    /// Disables navigation while a request is in flight
    #[prop(into)]
    is_loading: Signal<bool>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let jump_value = RwSignal::new(String::new());
    let jump_error = RwSignal::new(None::<String>);

    let go_to = move |page: u32| {
        let total = total_pages.get_untracked();
        if is_loading.get_untracked()
            || page < 1
            || page > total
            || page == current_page.get_untracked()
        {
            return;
        }
        if confirm_large_page(page, false) {
            on_page_change.run(page);
        }
    };

    let jump = move || match parse_jump_page(&jump_value.get_untracked(), total_pages.get_untracked()) {
        Ok(page) => {
            if !confirm_large_page(page, true) {
                return;
            }
            jump_error.set(None);
            jump_value.set(String::new());
            on_page_change.run(page);
        }
        Err(err) => jump_error.set(Some(err.to_string())),
    };

    let at_start = move || current_page.get() <= 1 || is_loading.get();
    let at_end = move || current_page.get() >= total_pages.get() || is_loading.get();

    let summary = move || {
        let current = current_page.get();
        let total = total_records.get();
        let (start, end) = visible_range(current, PAGE_SIZE, total);
        view! {
            "Showing "
            <strong>{format!("{}-{}", format_records(start), format_records(end))}</strong>
            " of "
            <strong>{format_records(total)}</strong>
            <span class="pagination-info__page">
                {format!(
                    " (Page {} of {})",
                    format_count(f64::from(current)),
                    format_count(f64::from(total_pages.get()))
                )}
            </span>
        }
    };

    view! {
        <div class="pagination-container">
            <div class="pagination-info">{summary}</div>

            {move || jump_error.get().map(|err| view! {
                <div class="pagination-error">{err}</div>
            })}

            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| go_to(1)
                    disabled=at_start
                    title="First Page"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| go_to(current_page.get_untracked().saturating_sub(1))
                    disabled=at_start
                    title="Previous Page"
                >
                    {icon("chevron-left")}
                </button>

                <div class="pagination-pages">
                    {move || {
                        let current = current_page.get();
                        page_items(current, total_pages.get())
                            .into_iter()
                            .map(|item| match item {
                                PageItem::Ellipsis => view! {
                                    <span class="pagination-dots">"..."</span>
                                }.into_any(),
                                PageItem::Page(page) => {
                                    let class = if page == current {
                                        "pagination-num pagination-num--active"
                                    } else {
                                        "pagination-num"
                                    };
                                    view! {
                                    <button
                                        class=class
                                        on:click=move |_| go_to(page)
                                        disabled=move || is_loading.get()
                                        title=format!("Go to page {}", page)
                                    >
                                        {compact_page_label(page)}
                                    </button>
                                    }.into_any()
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <button
                    class="pagination-btn"
                    on:click=move |_| go_to(current_page.get_untracked().saturating_add(1))
                    disabled=at_end
                    title="Next Page"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| go_to(total_pages.get_untracked())
                    disabled=at_end
                    title="Last Page"
                >
                    {icon("chevrons-right")}
                </button>
            </div>

            <div class="pagination-jump">
                <span>"Go to page:"</span>
                <input
                    type="text"
                    placeholder="Enter page"
                    maxlength=MAX_JUMP_INPUT_LEN.to_string()
                    prop:value=move || jump_value.get()
                    disabled=move || is_loading.get()
                    on:input=move |ev| {
                        jump_error.set(None);
                        let value = event_target_value(&ev);
                        if accepts_jump_input(&value) {
                            jump_value.set(value);
                        } else {
                            // re-render the last accepted text over the rejected edit
                            jump_value.update(|_| {});
                        }
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            jump();
                        }
                    }
                />
                {move || (total_pages.get() > 1000).then(|| view! {
                    <span class="pagination-jump__hint">
                        {format!("Max: {}", format_count(f64::from(total_pages.get())))}
                    </span>
                })}
            </div>
        </div>
    }
}
