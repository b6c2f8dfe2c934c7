use contracts::shared::api_error::ApiError;
use contracts::system::auth::RouteTable;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use crate::shared::toast::use_toasts;
use crate::system::auth::api;
use crate::system::auth::redirect::{LoginRedirect, UNAUTHENTICATED};
use crate::system::auth::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (login, set_login) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let redirect = LoginRedirect::parse(&use_location().search.get_untracked());

    if redirect.message.as_deref() == Some(UNAUTHENTICATED) {
        toasts.info("Faça login para continuar.");
    }
    let redirect = StoredValue::new(redirect);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let login_val = login.get_untracked();
        let password_val = password.get_untracked();
        set_is_loading.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(login_val, password_val).await {
                Ok(token) => {
                    session.sign_in(&token);
                    let target = redirect
                        .with_value(|r| r.safe_redirect().map(str::to_string))
                        .unwrap_or_else(|| {
                            let routes = RouteTable::default();
                            session
                                .role()
                                .map(|role| routes.home_for(&role).to_string())
                                .unwrap_or_else(|| routes.user_home.clone())
                        });
                    log::info!("signed in, going to {}", target);
                    toasts.success("Login realizado com sucesso!");
                    navigate(&target, Default::default());
                }
                Err(ApiError::Unauthenticated) => toasts.error("Login ou senha inválidos."),
                Err(e) => toasts.api_error(&e),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <img src="/logo-elos.svg" alt="Elos Logo" class="login-box__logo" />
                <h1>"Bem-vindo de volta!"</h1>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="login">"Login"</label>
                        <input
                            type="text"
                            id="login"
                            placeholder="Digite seu login"
                            prop:value=move || login.get()
                            on:input=move |ev| set_login.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Senha"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Digite sua senha"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Entrando..." } else { "Acessar conta" }}
                    </button>
                </form>

                <p class="login-box__footer">
                    "Não tem conta? " <a href="/register">"Cadastre-se"</a>
                </p>
            </div>
        </div>
    }
}
