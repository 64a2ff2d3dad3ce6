use contracts::domain::owner::Owner;
use leptos::prelude::*;

use super::details::OwnerDetails;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::modal::use_modal;
use crate::shared::state::use_estate_store;

/// Admin table over the owner collection.
#[component]
pub fn OwnerList() -> impl IntoView {
    let store = use_estate_store();
    let modal = use_modal();

    let open_editor = move |existing: Option<Owner>| {
        modal.open(move |handle| {
            let on_save = Callback::new({
                let handle = handle.clone();
                move |owner: Owner| {
                    store.save_owner(owner);
                    handle.close();
                }
            });
            let on_cancel = Callback::new({
                let handle = handle.clone();
                move |_| handle.close()
            });
            view! {
                <OwnerDetails existing=existing.clone() on_save=on_save on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    view! {
        <div class="collection">
            <div class="collection__header">
                <h2 class="collection__title">"Gerenciar Proprietários"</h2>
                <Button on_click=Callback::new(move |_| open_editor(None))>
                    {icon("plus-circle")}
                    <span>"Adicionar Proprietário"</span>
                </Button>
            </div>
            <div class="collection__table-wrap">
                <table class="collection__table">
                    <thead>
                        <tr>
                            <th>"Nome"</th>
                            <th>"Email"</th>
                            <th>"Telefone"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.owners.with(|set| set.to_vec())
                            key=|o| o.id.clone()
                            children=move |owner: Owner| {
                                let edit_target = owner.clone();
                                let delete_id = owner.id.clone();
                                view! {
                                    <tr>
                                        <td>{owner.name.clone()}</td>
                                        <td>{owner.email.clone()}</td>
                                        <td>{owner.phone.clone()}</td>
                                        <td>
                                            <div class="collection__actions">
                                                <button
                                                    class="collection__action collection__action--edit"
                                                    aria-label="Editar"
                                                    on:click=move |_| open_editor(Some(edit_target.clone()))
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="collection__action collection__action--delete"
                                                    aria-label="Excluir"
                                                    on:click=move |_| store.delete_owner(&delete_id)
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
