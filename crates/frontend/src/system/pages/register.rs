use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::toast::use_toasts;
use crate::system::auth::api;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let toasts = use_toasts();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let request = RegisterRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        set_is_loading.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(request).await {
                Ok(()) => {
                    toasts.success("Cadastro realizado com sucesso! Faça login.");
                    navigate("/login", Default::default());
                }
                Err(e) => toasts.api_error(&e),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <img src="/logo-elos.svg" alt="Elos Logo" class="login-box__logo" />
                <h1>"Crie sua conta"</h1>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Nome"</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="Digite seu nome"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">"E-mail"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Digite seu e-mail"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
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
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Enviando..." } else { "Cadastrar" }}
                    </button>
                </form>

                <p class="login-box__footer">
                    "Já tem conta? " <a href="/login">"Entrar"</a>
                </p>
            </div>
        </div>
    }
}
