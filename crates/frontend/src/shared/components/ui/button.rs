use leptos::prelude::*;

/// Button component with variants (primary, secondary, danger)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "danger"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button button--secondary",
        "danger" => "button button--danger",
        _ => "button button--primary",
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            class=variant_class
            type=btn_type
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
