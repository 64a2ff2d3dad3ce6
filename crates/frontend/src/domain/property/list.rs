use contracts::domain::property::Property;
use leptos::prelude::*;

use super::details::PropertyDetails;
use crate::shared::components::ui::Button;
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::shared::modal::use_modal;
use crate::shared::state::use_estate_store;

/// Admin table over the property collection.
#[component]
pub fn PropertyList() -> impl IntoView {
    let store = use_estate_store();
    let modal = use_modal();

    let open_editor = move |existing: Option<Property>| {
        modal.open(move |handle| {
            let on_save = Callback::new({
                let handle = handle.clone();
                move |property: Property| {
                    store.save_property(property);
                    handle.close();
                }
            });
            let on_cancel = Callback::new({
                let handle = handle.clone();
                move |_| handle.close()
            });
            view! {
                <PropertyDetails
                    existing=existing.clone()
                    on_save=on_save
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    };

    view! {
        <div class="collection">
            <div class="collection__header">
                <h2 class="collection__title">"Gerenciar Imóveis"</h2>
                <Button on_click=Callback::new(move |_| open_editor(None))>
                    {icon("plus-circle")}
                    <span>"Adicionar Imóvel"</span>
                </Button>
            </div>
            <div class="collection__table-wrap">
                <table class="collection__table">
                    <thead>
                        <tr>
                            <th>"Título"</th>
                            <th>"Preço"</th>
                            <th>"Tipo"</th>
                            <th>"Corretor"</th>
                            <th>"Destaque"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.properties.with(|set| set.to_vec())
                            key=|p| p.id.clone()
                            children=move |property: Property| {
                                let broker_id = property.broker_id.clone();
                                // Soft reference: a deleted broker shows as N/A.
                                let broker_label = move || {
                                    store
                                        .broker_name(&broker_id)
                                        .unwrap_or_else(|| "N/A".to_string())
                                };
                                let edit_target = property.clone();
                                let delete_id = property.id.clone();
                                view! {
                                    <tr>
                                        <td>{property.title.clone()}</td>
                                        <td>{format_price(property.price)}</td>
                                        <td>{property.property_type.label()}</td>
                                        <td>{broker_label}</td>
                                        <td>{if property.is_featured { "Sim" } else { "Não" }}</td>
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
                                                    on:click=move |_| store.delete_property(&delete_id)
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
