use crate::dashboards::d400_sales_dashboard::state::SalesAction;
use crate::dashboards::d400_sales_dashboard::SalesStore;
use crate::dashboards::SalesDashboard;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // One store for the whole page; components get it by prop.
    let store = SalesStore::new();

    view! {
        <ConfigProvider>
            <Shell
                left=move || view! {
                    <Sidebar on_toggle=store.callback(|_: ()| SalesAction::ToggleSidebar) />
                }.into_any()
                center=move || view! { <SalesDashboard store=store /> }.into_any()
                sidebar_open=store.select(|s| s.sidebar_open)
            />
        </ConfigProvider>
    }
}
