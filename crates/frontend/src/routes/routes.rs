use contracts::system::auth::RouteTable;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

use crate::domain::a001_support_record::ui::admin::AdminDashboard;
use crate::domain::a001_support_record::ui::complaint_form::ComplaintFormPage;
use crate::domain::a001_support_record::ui::records::RecordsPage;
use crate::domain::a001_support_record::ui::request_form::RequestFormPage;
use crate::system::auth::{use_session, RouteGuard};
use crate::system::pages::home::LandingPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use crate::system::users::ManageUsersPage;

/// `/` sends a signed-in user to the landing page of their role; visitors see
/// the public landing page.
#[component]
fn Home() -> impl IntoView {
    match use_session().role() {
        Some(role) => {
            let target = RouteTable::default().home_for(&role).to_string();
            view! { <Redirect path=target /> }.into_any()
        }
        None => view! { <LandingPage /> }.into_any(),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Página não encontrada"</h1>
                <p class="login-box__footer"><a href="/">"Voltar ao início"</a></p>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RouteGuard>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/home") view=LandingPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/records") view=RecordsPage />
                <Route path=path!("/complaints") view=ComplaintFormPage />
                <Route path=path!("/requests") view=RequestFormPage />
                <Route path=path!("/admin") view=AdminDashboard />
                <Route path=path!("/admin/users") view=ManageUsersPage />
            </Routes>
        </RouteGuard>
    }
}
