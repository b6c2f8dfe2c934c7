use contracts::domain::a001_support_record::submission::{
    PROFESSIONAL_GENDER_PREFERENCES, SERVICE_PREFERENCES, SUPPORT_REQUEST_KINDS,
};
use contracts::domain::a001_support_record::SupportRequestSubmission;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::complaint_form::{select_options, TERMS_TEXT};
use crate::domain::a001_support_record::api;
use crate::layout::left::sidebar::NEW_REQUEST;
use crate::layout::Shell;
use crate::shared::toast::use_toasts;
use crate::system::auth::redirect::use_error_reporter;
use crate::system::auth::session::use_session;

#[component]
pub fn RequestFormPage() -> impl IntoView {
    let session = StoredValue::new(use_session());
    let toasts = use_toasts();
    let reporter = use_error_reporter();

    let form = RwSignal::new(SupportRequestSubmission::default());
    let (is_sending, set_is_sending) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_sending.get_untracked() {
            return;
        }
        let submission = form.get_untracked();
        if let Err(e) = submission.validate() {
            toasts.warn(e.user_message());
            return;
        }

        set_is_sending.set(true);
        let token = session.with_value(|s| s.token_untracked());
        spawn_local(async move {
            match api::submit_support_request(token.as_deref(), &submission).await {
                Ok(()) => {
                    log::info!("support request submitted");
                    toasts.success("Solicitação enviada com sucesso!");
                    form.set(SupportRequestSubmission::default());
                }
                Err(e) => reporter.report(&e),
            }
            set_is_sending.set(false);
        });
    };

    view! {
        <Shell active=NEW_REQUEST.to_string()>
            <div class="form-card">
                <h1 class="page-header__title">"Nova solicitação"</h1>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="title">"Título da solicitação*"</label>
                        <input
                            type="text"
                            id="title"
                            required
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="kind">"Tipo de solicitação*"</label>
                        <select
                            id="kind"
                            required
                            prop:value=move || form.with(|f| f.kind.clone())
                            on:change=move |ev| form.update(|f| f.kind = event_target_value(&ev))
                        >
                            {select_options("Selecione o tipo", SUPPORT_REQUEST_KINDS)}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="reason">"Motivo da solicitação*"</label>
                        <textarea
                            id="reason"
                            required
                            prop:value=move || form.with(|f| f.reason.clone())
                            on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="service-preference">"Preferência de atendimento*"</label>
                        <select
                            id="service-preference"
                            required
                            prop:value=move || form.with(|f| f.service_preference.clone())
                            on:change=move |ev| form.update(|f| f.service_preference = event_target_value(&ev))
                        >
                            {select_options("Selecione a preferência", SERVICE_PREFERENCES)}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="gender-preference">"Preferência de gênero do profissional*"</label>
                        <select
                            id="gender-preference"
                            required
                            prop:value=move || form.with(|f| f.professional_gender_preference.clone())
                            on:change=move |ev| {
                                form.update(|f| f.professional_gender_preference = event_target_value(&ev))
                            }
                        >
                            {select_options("Selecione a preferência", PROFESSIONAL_GENDER_PREFERENCES)}
                        </select>
                    </div>
                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="terms"
                            required
                            prop:checked=move || form.with(|f| f.accepted_terms)
                            on:change=move |ev| form.update(|f| f.accepted_terms = event_target_checked(&ev))
                        />
                        <label for="terms">
                            {format!("Ao clicar em 'Enviar solicitação', {}", TERMS_TEXT)}
                        </label>
                    </div>
                    <button type="submit" class="button button--primary" disabled=move || is_sending.get()>
                        {move || if is_sending.get() { "Enviando..." } else { "Enviar solicitação" }}
                    </button>
                </form>
            </div>
        </Shell>
    }
}
