use crate::routes::AppRoutes;
use crate::shared::modal::ModalService;
use crate::shared::state::EstateStore;
use crate::system::auth::session::Session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // All three live for the whole session and reset only with a full
    // reload: the seeded collections, the login gate, and the dialog host.
    provide_context(EstateStore::new());
    provide_context(Session::new());
    provide_context(ModalService::new());

    view! { <AppRoutes /> }
}
