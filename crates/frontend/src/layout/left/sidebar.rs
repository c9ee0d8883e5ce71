//! Sidebar: profile block and navigation with collapsible groups

use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (anchor, label)
}

/// Top-level links above the groups: (anchor, label, icon)
const MAIN_ITEMS: [(&str, &str, &str); 3] = [
    ("#dashboard", "Dashboard", "dashboard"),
    ("#analytics", "Analytics", "average"),
    ("#reports", "Reports", "item"),
];

/// Page this dashboard lives on; highlighted in the navigation
const ACTIVE_ANCHORS: [&str; 2] = ["#dashboard", "#overview"];

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "services",
            label: "Services",
            icon: "services",
            items: vec![
                ("#overview", "Sales Overview"),
                ("#performance", "Performance"),
                ("#insights", "Insights"),
                ("#settings", "Settings"),
            ],
        },
        MenuGroup {
            id: "data",
            label: "Data",
            icon: "data",
            items: vec![("#export", "Export Data"), ("#import", "Import Data")],
        },
    ]
}

fn item_class(anchor: &str, base: &'static str, active: &'static str) -> &'static str {
    if ACTIVE_ANCHORS.contains(&anchor) {
        active
    } else {
        base
    }
}

#[component]
pub fn Sidebar(
    /// Close button (mobile)
    on_toggle: Callback<()>,
) -> impl IntoView {
    // Both groups start expanded
    let expanded_groups = RwSignal::new(vec!["services", "data"]);

    view! {
        <div class="app-sidebar__content">
            <button class="app-sidebar__toggle" on:click=move |_| on_toggle.run(()) title="Close menu">
                {icon("chevron-left")}
            </button>

            <div class="app-sidebar__profile">
                <div class="app-sidebar__avatar">"V"</div>
                <div class="app-sidebar__profile-title">"Vault Analytics"</div>
            </div>

            <nav class="app-sidebar__nav">
                {MAIN_ITEMS.into_iter().map(|(anchor, label, icon_name)| view! {
                    <a
                        href=anchor
                        class=item_class(anchor, "app-sidebar__item", "app-sidebar__item app-sidebar__item--active")
                    >
                        <div class="app-sidebar__item-content">
                            {icon(icon_name)}
                            <span>{label}</span>
                        </div>
                    </a>
                }).collect_view()}

                {get_menu_groups().into_iter().map(|group| {
                    let group_id = group.id;
                    let is_expanded = move || expanded_groups.with(|g| g.contains(&group_id));
                    let items = group.items;

                    view! {
                        <div class="app-sidebar__group">
                            <div
                                class="app-sidebar__item app-sidebar__item--expandable"
                                on:click=move |_| {
                                    expanded_groups.update(|groups| {
                                        if let Some(pos) = groups.iter().position(|g| *g == group_id) {
                                            groups.remove(pos);
                                        } else {
                                            groups.push(group_id);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {items.iter().map(|(anchor, label)| view! {
                                        <a
                                            href=*anchor
                                            class=item_class(anchor, "app-sidebar__subitem", "app-sidebar__subitem app-sidebar__subitem--active")
                                        >
                                            <span>{*label}</span>
                                        </a>
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}
