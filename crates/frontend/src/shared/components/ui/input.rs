use leptos::prelude::*;

/// Labelled input for the filter form (text, number or date).
///
/// The field is controlled: it shows `value` and reports every edit through
/// `on_input`, leaving it to the owner to store or reject the text.
#[component]
pub fn Input(
    #[prop(optional, into)] label: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" when omitted
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional, into)] min: MaybeProp<String>,
) -> impl IntoView {
    let kind = input_type.unwrap_or_else(|| "text".to_string());

    let field = view! {
        <input
            class="form__input"
            type=kind
            min=move || min.get()
            placeholder=move || placeholder.get()
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    };

    match label {
        Some(text) => view! {
            <label class="form__group">
                <span class="form__label">{text}</span>
                {field}
            </label>
        }
        .into_any(),
        None => field.into_any(),
    }
}
