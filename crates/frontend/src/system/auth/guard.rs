use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::session::use_session;

/// Gates the admin route: anonymous visitors land on the login page and come
/// back through it.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
