use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::system::auth::session::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let handle_logout = Callback::new(move |_: leptos::ev::MouseEvent| {
        session.logout();
        navigate("/", Default::default());
    });

    view! {
        <header class="header">
            <div class="header__content">
                <A href="/" attr:class="header__brand">
                    {icon("building")}
                    <span class="header__brand-name">
                        "Imovelna" <span class="header__brand-accent">"Web.com"</span>
                    </span>
                </A>
                <nav class="header__nav">
                    <A href="/" attr:class="header__link">"Início"</A>
                    <A href="/admin" attr:class="header__link">"Área Administrativa"</A>
                    <Show when=move || session.is_authenticated()>
                        <button
                            class="header__logout"
                            on:click=move |ev| handle_logout.run(ev)
                        >
                            {icon("log-out")}
                            <span>"Sair"</span>
                        </button>
                    </Show>
                </nav>
            </div>
        </header>
    }
}
