use contracts::domain::property::Property;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::shared::format::{format_area, format_price};
use crate::shared::icons::icon;
use crate::shared::state::use_estate_store;

/// Detail view for one listing, addressed by the `:id` path parameter.
/// A missing or deleted id degrades to a recoverable "not found" view.
#[component]
pub fn PropertyDetailPage() -> impl IntoView {
    let store = use_estate_store();
    let params = use_params_map();

    let property = Memo::new(move |_| {
        params.read().get("id").and_then(|id| store.property(&id))
    });

    view! {
        {move || match property.get() {
            Some(p) => view! { <PropertyDetail property=p /> }.into_any(),
            None => view! { <PropertyNotFound /> }.into_any(),
        }}
    }
}

#[component]
fn PropertyDetail(property: Property) -> impl IntoView {
    let store = use_estate_store();

    let broker_id = property.broker_id.clone();
    let broker = Memo::new(move |_| store.broker(&broker_id));

    let (main_image, set_main_image) = signal(Option::<String>::None);
    let images = property.images.clone();
    let first_image = images.first().cloned();
    let current_image =
        Memo::new(move |_| main_image.get().or_else(|| first_image.clone()));
    let title = property.title.clone();

    view! {
        <div class="detail">
            <div class="detail__main">
                <div class="detail__gallery">
                    {move || current_image.get().map(|src| view! {
                        <img class="detail__image" src=src alt=title.clone() />
                    })}
                    <div class="detail__thumbs">
                        {images
                            .iter()
                            .map(|img| {
                                let img = img.clone();
                                let img_for_click = img.clone();
                                let img_for_class = img.clone();
                                view! {
                                    <img
                                        class=move || {
                                            if current_image.get().as_deref() == Some(img_for_class.as_str()) {
                                                "detail__thumb detail__thumb--current"
                                            } else {
                                                "detail__thumb"
                                            }
                                        }
                                        src=img
                                        on:click=move |_| set_main_image.set(Some(img_for_click.clone()))
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="detail__heading">
                    <h1 class="detail__title">{property.title.clone()}</h1>
                    <div class="detail__address">
                        {icon("map-pin")}
                        <span>
                            {format!(
                                "{}, {}, {}",
                                property.address.street, property.address.city, property.address.state
                            )}
                        </span>
                    </div>
                </div>

                <div class="detail__facts">
                    <div class="detail__fact">
                        {icon("bed")}
                        <div>
                            <p class="detail__fact-value">{property.bedrooms}</p>
                            <p class="detail__fact-label">"Quartos"</p>
                        </div>
                    </div>
                    <div class="detail__fact">
                        {icon("bath")}
                        <div>
                            <p class="detail__fact-value">{property.bathrooms}</p>
                            <p class="detail__fact-label">"Banheiros"</p>
                        </div>
                    </div>
                    <div class="detail__fact">
                        {icon("ruler")}
                        <div>
                            <p class="detail__fact-value">{format_area(property.area)}</p>
                            <p class="detail__fact-label">"Área"</p>
                        </div>
                    </div>
                </div>

                <div class="detail__section">
                    <h2>"Descrição"</h2>
                    <p>{property.description.clone()}</p>
                </div>

                {(!property.features.is_empty()).then(|| view! {
                    <div class="detail__section">
                        <h2>"Características"</h2>
                        <div class="detail__features">
                            {property
                                .features
                                .iter()
                                .map(|feature| view! {
                                    <div class="detail__feature">
                                        {icon("check-circle")}
                                        <span>{feature.clone()}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                })}
            </div>

            <aside class="detail__aside">
                <div class="detail__price-card">
                    <p class="detail__price-label">"Valor do Imóvel"</p>
                    <p class="detail__price">{format_price(property.price)}</p>
                </div>

                {move || broker.get().map(|b| {
                    let whatsapp_link = b
                        .whatsapp
                        .as_ref()
                        .map(|w| format!("https://wa.me/{w}"));
                    view! {
                        <div class="detail__broker-card">
                            <h3>"Fale com o corretor"</h3>
                            <p class="detail__broker-name">{b.name.clone()}</p>
                            <p class="detail__broker-license">{b.license_number.clone()}</p>
                            <ul class="detail__broker-contacts">
                                <li>
                                    {icon("mail")}
                                    <a href=format!("mailto:{}", b.email)>{b.email.clone()}</a>
                                </li>
                                <li>
                                    {icon("phone")}
                                    <span>{b.phone.clone()}</span>
                                </li>
                                {whatsapp_link.map(|link| view! {
                                    <li>
                                        {icon("whatsapp")}
                                        <a href=link target="_blank">"WhatsApp"</a>
                                    </li>
                                })}
                            </ul>
                        </div>
                    }
                })}
            </aside>
        </div>
    }
}

#[component]
fn PropertyNotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Imóvel não encontrado"</h1>
            <p>"O imóvel que você está procurando não existe ou foi removido."</p>
            <A href="/" attr:class="button button--primary">
                "Voltar para a página inicial"
            </A>
        </div>
    }
}
