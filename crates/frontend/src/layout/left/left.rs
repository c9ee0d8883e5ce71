use leptos::prelude::*;

/// Left zone of the shell; slides in when `is_open`
#[component]
pub fn Left(#[prop(into)] is_open: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <div data-zone="left" class="left" class:left--open=move || is_open.get()>
            {children()}
        </div>
    }
}
