use contracts::domain::property::{Property, PropertyCategory, PropertyType};
use leptos::prelude::*;

use super::view_model::PropertyDetailsViewModel;
use crate::shared::components::ui::{Button, Checkbox, Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::image_upload::ImageDropZone;
use crate::shared::state::use_estate_store;

#[component]
pub fn PropertyDetails(
    existing: Option<Property>,
    on_save: Callback<Property>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = use_estate_store();
    let vm = PropertyDetailsViewModel::new(existing);

    let type_options = Signal::derive(|| {
        PropertyType::ALL
            .iter()
            .map(|t| (t.label().to_string(), t.label().to_string()))
            .collect::<Vec<_>>()
    });
    let category_options = Signal::derive(|| {
        PropertyCategory::ALL
            .iter()
            .map(|c| (c.label().to_string(), c.label().to_string()))
            .collect::<Vec<_>>()
    });
    // Broker/owner selects are fed from the live collections; the leading
    // empty option is the unselected "Selecione" state validation rejects.
    let broker_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "Selecione".to_string())];
        store.brokers.with(|set| {
            options.extend(set.iter().map(|b| (b.id.clone(), b.name.clone())));
        });
        options
    });
    let owner_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "Selecione".to_string())];
        store.owners.with(|set| {
            options.extend(set.iter().map(|o| (o.id.clone(), o.name.clone())));
        });
        options
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit(on_save);
    };

    view! {
        <div class="details">
            <div class="details__header">
                <h3>{if vm.edit_mode { "Editar Imóvel" } else { "Adicionar Imóvel" }}</h3>
            </div>
            <form class="details__form" on:submit=on_submit>
                <div class="details__grid">
                    <Input
                        label="Título"
                        value=Signal::derive(move || vm.form.get().title)
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.title = v))
                        error=vm.error_for("title")
                    />
                    <Input
                        label="Preço"
                        input_type="number"
                        value=Signal::derive(move || vm.form.get().price.to_string())
                        on_input=Callback::new(move |v: String| {
                            // Non-numeric input falls back to 0 instead of
                            // leaking garbage into the draft.
                            vm.form.update(|f| f.price = v.parse().unwrap_or(0.0));
                        })
                        error=vm.error_for("price")
                    />
                    <Select
                        label="Tipo"
                        value=Signal::derive(move || vm.form.get().property_type.label().to_string())
                        options=type_options
                        on_change=Callback::new(move |v: String| {
                            if let Some(t) = PropertyType::from_label(&v) {
                                vm.form.update(|f| f.property_type = t);
                            }
                        })
                    />
                    <Select
                        label="Categoria"
                        value=Signal::derive(move || vm.form.get().category.label().to_string())
                        options=category_options
                        on_change=Callback::new(move |v: String| {
                            if let Some(c) = PropertyCategory::from_label(&v) {
                                vm.form.update(|f| f.category = c);
                            }
                        })
                    />
                    <Select
                        label="Corretor"
                        value=Signal::derive(move || vm.form.get().broker_id)
                        options=broker_options
                        on_change=Callback::new(move |v: String| {
                            vm.form.update(|f| f.broker_id = v);
                        })
                        error=vm.error_for("brokerId")
                    />
                    <Select
                        label="Proprietário"
                        value=Signal::derive(move || vm.form.get().owner_id)
                        options=owner_options
                        on_change=Callback::new(move |v: String| {
                            vm.form.update(|f| f.owner_id = v);
                        })
                        error=vm.error_for("ownerId")
                    />
                </div>

                <Textarea
                    label="Descrição"
                    value=Signal::derive(move || vm.form.get().description)
                    on_input=Callback::new(move |v: String| {
                        vm.form.update(|f| f.description = v);
                    })
                    error=vm.error_for("description")
                />

                <fieldset class="details__address">
                    <legend>"Endereço"</legend>
                    <div class="details__grid">
                        <Input
                            label="Rua"
                            value=Signal::derive(move || vm.form.get().address.street)
                            on_input=Callback::new(move |v: String| {
                                vm.form.update(|f| f.address.street = v);
                            })
                            error=vm.error_for("address.street")
                        />
                        <Input
                            label="Cidade"
                            value=Signal::derive(move || vm.form.get().address.city)
                            on_input=Callback::new(move |v: String| {
                                vm.form.update(|f| f.address.city = v);
                            })
                            error=vm.error_for("address.city")
                        />
                        <Input
                            label="Estado"
                            value=Signal::derive(move || vm.form.get().address.state)
                            on_input=Callback::new(move |v: String| {
                                vm.form.update(|f| f.address.state = v);
                            })
                            error=vm.error_for("address.state")
                        />
                        <Input
                            label="CEP"
                            value=Signal::derive(move || vm.form.get().address.zip_code)
                            on_input=Callback::new(move |v: String| {
                                vm.form.update(|f| f.address.zip_code = v);
                            })
                            error=vm.error_for("address.zipCode")
                        />
                    </div>
                </fieldset>

                <div class="details__grid details__grid--thirds">
                    <Input
                        label="Quartos"
                        input_type="number"
                        value=Signal::derive(move || vm.form.get().bedrooms.to_string())
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.bedrooms = v.parse().unwrap_or(0));
                        })
                    />
                    <Input
                        label="Banheiros"
                        input_type="number"
                        value=Signal::derive(move || vm.form.get().bathrooms.to_string())
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.bathrooms = v.parse().unwrap_or(0));
                        })
                    />
                    <Input
                        label="Área (m²)"
                        input_type="number"
                        value=Signal::derive(move || vm.form.get().area.to_string())
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.area = v.parse().unwrap_or(0.0));
                        })
                        error=vm.error_for("area")
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Imagens do Imóvel"</label>
                    <ImageDropZone on_loaded=Callback::new(move |url: String| vm.push_image(url)) />
                    {move || {
                        let images = vm.form.get().images;
                        (!images.is_empty()).then(|| view! {
                            <div class="details__images">
                                {images
                                    .iter()
                                    .enumerate()
                                    .map(|(index, img)| view! {
                                        <div class="details__image-tile">
                                            <img src=img.clone() alt=format!("Imagem {}", index + 1) />
                                            <button
                                                type="button"
                                                class="details__image-remove"
                                                aria-label="Remover imagem"
                                                on:click=move |_| vm.remove_image(index)
                                            >
                                                {icon("x")}
                                            </button>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        })
                    }}
                </div>

                <Input
                    label="Características (separadas por vírgula)"
                    value=Signal::derive(move || vm.features_text.get())
                    on_input=Callback::new(move |v: String| vm.features_text.set(v))
                />

                <Checkbox
                    label="Imóvel em Destaque"
                    checked=Signal::derive(move || vm.form.get().is_featured)
                    on_change=Callback::new(move |v: bool| {
                        vm.form.update(|f| f.is_featured = v);
                    })
                    id="is-featured"
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
