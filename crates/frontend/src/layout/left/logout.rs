use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::toast::use_toasts;
use crate::system::auth::session::use_session;

#[component]
pub fn LogoutButton(#[prop(optional, into)] text: Option<String>) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let text = text.unwrap_or_else(|| "Sair".to_string());

    let on_click = move |_| {
        session.sign_out();
        log::info!("session closed");
        toasts.info("Sessão encerrada!");
        navigate("/login", Default::default());
    };

    view! {
        <button class="app-sidebar__logout" on:click=on_click>
            {text}
        </button>
    }
}
