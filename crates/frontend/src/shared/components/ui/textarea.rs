use leptos::prelude::*;

/// Textarea component with label and inline validation-error support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// Validation message rendered under the field
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
    let textarea_class = move || {
        if error.get().is_some() {
            "form__textarea form__textarea--invalid"
        } else {
            "form__textarea"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class=textarea_class
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
            {move || error.get().map(|message| view! {
                <p class="form__error">{message}</p>
            })}
        </div>
    }
}
