use contracts::domain::property::{featured_matching, Property, PropertyType};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::property::card::PropertyCard;
use crate::shared::icons::icon;
use crate::shared::state::use_estate_store;

/// Landing page: hero search over the featured subset of the catalog.
#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_estate_store();
    let (search_term, set_search_term) = signal(String::new());
    let (type_filter, set_type_filter) = signal(Option::<PropertyType>::None);

    let featured = Memo::new(move |_| {
        let term = search_term.get();
        let filter = type_filter.get();
        store.properties.with(|set| {
            featured_matching(set.iter(), filter, &term)
                .into_iter()
                .cloned()
                .collect::<Vec<Property>>()
        })
    });

    view! {
        <div class="home">
            <section class="hero">
                <div class="hero__inner">
                    <h1 class="hero__title">"Encontre o imóvel ideal para você"</h1>
                    <p class="hero__subtitle">
                        "Milhares de casas, apartamentos e terrenos para alugar ou comprar."
                    </p>
                    <div class="hero__search">
                        <div class="hero__search-field">
                            {icon("search")}
                            <input
                                type="text"
                                placeholder="Cidade, bairro ou rua..."
                                prop:value=move || search_term.get()
                                on:input=move |ev| set_search_term.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="hero__chips">
                            <button
                                class=move || chip_class(type_filter.get().is_none())
                                on:click=move |_| set_type_filter.set(None)
                            >
                                "Todos os Tipos"
                            </button>
                            <For
                                each=|| PropertyType::ALL
                                key=|t| t.label()
                                children=move |t: PropertyType| {
                                    view! {
                                        <button
                                            class=move || chip_class(type_filter.get() == Some(t))
                                            on:click=move |_| set_type_filter.set(Some(t))
                                        >
                                            {t.label()}
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </div>
                </div>
            </section>

            <section class="featured">
                <h2 class="featured__title">"Imóveis em Destaque"</h2>
                <p class="featured__subtitle">
                    "As melhores oportunidades selecionadas para você."
                </p>
                <Show
                    when=move || !featured.get().is_empty()
                    fallback=|| view! {
                        <p class="featured__empty">
                            "Nenhum imóvel encontrado com os critérios selecionados."
                        </p>
                    }
                >
                    <div class="featured__grid">
                        <For
                            each=move || featured.get()
                            key=|p| p.id.clone()
                            children=move |property: Property| {
                                let href = format!("/property/{}", property.id);
                                view! {
                                    <A href=href attr:class="featured__card-link">
                                        <PropertyCard property=property />
                                    </A>
                                }
                            }
                        />
                    </div>
                </Show>
            </section>
        </div>
    }
}

fn chip_class(active: bool) -> &'static str {
    if active {
        "chip chip--active"
    } else {
        "chip"
    }
}
