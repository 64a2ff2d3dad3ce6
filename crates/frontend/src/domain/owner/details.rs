use contracts::domain::owner::Owner;
use contracts::validation::{FieldErrors, Validate};
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input};

/// Owner form dialog.
#[component]
pub fn OwnerDetails(
    existing: Option<Owner>,
    on_save: Callback<Owner>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let edit_mode = existing.is_some();
    let form = RwSignal::new(existing.unwrap_or_default());
    let errors = RwSignal::new(FieldErrors::new());

    let error_for = move |path: &'static str| {
        Signal::derive(move || errors.get().get(path).map(str::to_string))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = form.get_untracked();
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
                <h3>{if edit_mode { "Editar Proprietário" } else { "Adicionar Proprietário" }}</h3>
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
