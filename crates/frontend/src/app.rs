use leptos::prelude::*;
use leptos_router::components::Router;

use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::{provide_session, Session};

#[component]
pub fn App() -> impl IntoView {
    // The session reads the `authToken` cookie; toasts are app-wide.
    provide_session(Session::with_cookie_store());
    provide_context(ToastService::new());

    view! {
        <Router>
            <AppRoutes />
        </Router>
        <ToastHost />
    }
}
