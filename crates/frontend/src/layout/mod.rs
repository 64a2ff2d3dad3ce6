pub mod footer;
pub mod header;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::shared::modal::ModalHost;
use footer::Footer;
use header::Header;

/// Site chrome: header, routed content, footer and the dialog host.
#[component]
pub fn SiteLayout() -> impl IntoView {
    view! {
        <div class="site">
            <Header />
            <main class="site__main">
                <Outlet />
            </main>
            <Footer />
            <ModalHost />
        </div>
    }
}
