use contracts::domain::broker::Broker;
use contracts::validation::{FieldErrors, Validate};
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input};

/// Broker form dialog. Small enough to keep draft, validation and view in
/// one component.
#[component]
pub fn BrokerDetails(
    existing: Option<Broker>,
    on_save: Callback<Broker>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let edit_mode = existing.is_some();
    // The optional whatsapp is edited as plain text; an empty line maps back
    // to None on submit.
    let whatsapp_text = existing
        .as_ref()
        .and_then(|b| b.whatsapp.clone())
        .unwrap_or_default();
    let form = RwSignal::new(existing.unwrap_or_default());
    let whatsapp = RwSignal::new(whatsapp_text);
    let errors = RwSignal::new(FieldErrors::new());

    let error_for = move |path: &'static str| {
        Signal::derive(move || errors.get().get(path).map(str::to_string))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut draft = form.get_untracked();
        let wa = whatsapp.get_untracked();
        draft.whatsapp = if wa.trim().is_empty() {
            None
        } else {
            Some(wa.trim().to_string())
        };
        match draft.validate() {
            Ok(()) => {
                errors.set(FieldErrors::new());
                on_save.run(draft);
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <div class="details">
            <div class="details__header">
                <h3>{if edit_mode { "Editar Corretor" } else { "Adicionar Corretor" }}</h3>
            </div>
            <form class="details__form" on:submit=on_submit>
                <Input
                    label="Nome"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                    error=error_for("name")
                />
                <Input
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || form.get().email)
                    on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                    error=error_for("email")
                />
                <Input
                    label="Telefone"
                    value=Signal::derive(move || form.get().phone)
                    on_input=Callback::new(move |v: String| form.update(|f| f.phone = v))
                    error=error_for("phone")
                />
                <Input
                    label="WhatsApp (opcional)"
                    value=Signal::derive(move || whatsapp.get())
                    on_input=Callback::new(move |v: String| whatsapp.set(v))
                />
                <Input
                    label="CRECI"
                    value=Signal::derive(move || form.get().license_number)
                    on_input=Callback::new(move |v: String| form.update(|f| f.license_number = v))
                    error=error_for("licenseNumber")
                />
                <div class="details__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                        "Cancelar"
                    </Button>
                    <Button variant="primary" button_type="submit">
                        "Salvar"
                    </Button>
                </div>
            </form>
        </div>
    }
}
