use leptos::prelude::*;

use crate::domain::broker::list::BrokerList;
use crate::domain::owner::list::OwnerList;
use crate::domain::property::list::PropertyList;
use crate::shared::icons::icon;

#[derive(Clone, Copy, PartialEq)]
enum AdminTab {
    Properties,
    Brokers,
    Owners,
}

impl AdminTab {
    const ALL: [AdminTab; 3] = [AdminTab::Properties, AdminTab::Brokers, AdminTab::Owners];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Properties => "Imóveis",
            AdminTab::Brokers => "Corretores",
            AdminTab::Owners => "Proprietários",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            AdminTab::Properties => "building",
            AdminTab::Brokers => "users",
            AdminTab::Owners => "user-square",
        }
    }
}

/// Login-gated panel: one tab per authoritative collection.
#[component]
pub fn AdminPage() -> impl IntoView {
    let active = RwSignal::new(AdminTab::Properties);

    view! {
        <div class="admin">
            <h1 class="admin__title">"Painel Administrativo"</h1>
            <div class="admin__tabs">
                <For
                    each=|| AdminTab::ALL
                    key=|tab| tab.label()
                    children=move |tab: AdminTab| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == tab {
                                        "admin__tab admin__tab--active"
                                    } else {
                                        "admin__tab"
                                    }
                                }
                                on:click=move |_| active.set(tab)
                            >
                                {icon(tab.icon_name())}
                                <span>{tab.label()}</span>
                            </button>
                        }
                    }
                />
            </div>
            <div class="admin__content">
                {move || match active.get() {
                    AdminTab::Properties => view! { <PropertyList /> }.into_any(),
                    AdminTab::Brokers => view! { <BrokerList /> }.into_any(),
                    AdminTab::Owners => view! { <OwnerList /> }.into_any(),
                }}
            </div>
        </div>
    }
}
