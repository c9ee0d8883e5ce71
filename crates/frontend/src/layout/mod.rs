pub mod left;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |  Content (top bar, filters,  |
/// |  (Left)   |  stats, table, pagination)   |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(
    left: L,
    center: C,
    /// Sidebar visibility (mobile)
    #[prop(into)]
    sidebar_open: Signal<bool>,
) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <left::Left is_open=sidebar_open>
                {left()}
            </left::Left>

            <div class="app-main" class:app-main--sidebar-open=move || sidebar_open.get()>
                {center()}
            </div>
        </div>
    }
}
