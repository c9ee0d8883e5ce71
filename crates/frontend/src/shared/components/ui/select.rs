use leptos::prelude::*;

/// Labelled single-choice select.
///
/// `placeholder` adds a leading entry with value `""`, picked while `value`
/// is empty; changes come back through `on_change` as the option value.
#[component]
pub fn Select(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    /// (value, label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let empty_entry = placeholder.map(|text| {
        view! {
            <option value="" selected=move || value.with(String::is_empty)>
                {text}
            </option>
        }
    });

    let option_views = move || {
        let current = value.get();
        options
            .get()
            .into_iter()
            .map(|(key, text)| {
                let selected = key == current;
                view! { <option value=key selected=selected>{text}</option> }
            })
            .collect_view()
    };

    view! {
        <label class="form__group">
            <span class="form__label">{label}</span>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {empty_entry}
                {option_views}
            </select>
        </label>
    }
}
