use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::layout::SiteLayout;
use crate::pages::admin::AdminPage;
use crate::pages::home::HomePage;
use crate::pages::property_detail::PropertyDetailPage;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                // Login renders outside the site chrome.
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=SiteLayout>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("property/:id") view=PropertyDetailPage />
                    <Route path=path!("admin") view=AdminArea />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn AdminArea() -> impl IntoView {
    view! {
        <RequireAuth>
            <AdminPage />
        </RequireAuth>
    }
}
