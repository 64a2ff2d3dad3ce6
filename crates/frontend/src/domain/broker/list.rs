use contracts::domain::broker::Broker;
use leptos::prelude::*;

use super::details::BrokerDetails;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::modal::use_modal;
use crate::shared::state::use_estate_store;

/// Admin table over the broker collection. Deleting a broker referenced by
/// listings is allowed; those listings show N/A until reassigned.
#[component]
pub fn BrokerList() -> impl IntoView {
    let store = use_estate_store();
    let modal = use_modal();

    let open_editor = move |existing: Option<Broker>| {
        modal.open(move |handle| {
            let on_save = Callback::new({
                let handle = handle.clone();
                move |broker: Broker| {
                    store.save_broker(broker);
                    handle.close();
                }
            });
            let on_cancel = Callback::new({
                let handle = handle.clone();
                move |_| handle.close()
            });
            view! {
                <BrokerDetails existing=existing.clone() on_save=on_save on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    view! {
        <div class="collection">
            <div class="collection__header">
                <h2 class="collection__title">"Gerenciar Corretores"</h2>
                <Button on_click=Callback::new(move |_| open_editor(None))>
                    {icon("plus-circle")}
                    <span>"Adicionar Corretor"</span>
                </Button>
            </div>
            <div class="collection__table-wrap">
                <table class="collection__table">
                    <thead>
                        <tr>
                            <th>"Nome"</th>
                            <th>"Email"</th>
                            <th>"Telefone"</th>
                            <th>"CRECI"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.brokers.with(|set| set.to_vec())
                            key=|b| b.id.clone()
                            children=move |broker: Broker| {
                                let edit_target = broker.clone();
                                let delete_id = broker.id.clone();
                                view! {
                                    <tr>
                                        <td>{broker.name.clone()}</td>
                                        <td>{broker.email.clone()}</td>
                                        <td>{broker.phone.clone()}</td>
                                        <td>{broker.license_number.clone()}</td>
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
                                                    on:click=move |_| store.delete_broker(&delete_id)
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
