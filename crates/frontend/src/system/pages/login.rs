use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::system::auth::session::{use_session, LOGIN_ERROR_MESSAGE};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if session.login(&username.get(), &password.get()) {
            navigate("/admin", Default::default());
        } else {
            set_error_message.set(Some(LOGIN_ERROR_MESSAGE.to_string()));
        }
    };

    view! {
        <div class="login">
            <div class="login__box">
                <A href="/" attr:class="login__brand">
                    {icon("building")}
                    <span class="login__brand-name">
                        "Imovelna" <span class="login__brand-accent">"Web.com"</span>
                    </span>
                </A>
                <h2 class="login__title">"Acesso Administrativo"</h2>

                <form class="login__form" on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="username">"Usuário"</label>
                        <input
                            id="username"
                            class="form__input"
                            type="text"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="password">"Senha"</label>
                        <input
                            id="password"
                            class="form__input"
                            type="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <Show when=move || error_message.get().is_some()>
                        <p class="form__error">{move || error_message.get().unwrap_or_default()}</p>
                    </Show>

                    <button type="submit" class="button button--primary login__submit">
                        {icon("log-in")}
                        "Entrar"
                    </button>
                </form>
            </div>
        </div>
    }
}
