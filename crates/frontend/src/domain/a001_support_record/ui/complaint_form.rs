use contracts::domain::a001_support_record::submission::{COMPLAINT_KINDS, DEFAULT_STATE};
use contracts::domain::a001_support_record::ComplaintSubmission;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_support_record::api;
use crate::layout::left::sidebar::NEW_COMPLAINT;
use crate::layout::Shell;
use crate::shared::toast::use_toasts;
use crate::system::auth::redirect::use_error_reporter;
use crate::system::auth::session::use_session;

pub(super) const TERMS_TEXT: &str = "você concorda com o envio das informações fornecidas e autoriza seu uso para análise e possível encaminhamento a órgãos competentes, conforme nossa política de privacidade.";

/// `<option>`s of a form select, preceded by an empty placeholder
pub(super) fn select_options(placeholder: &'static str, options: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <option value="">{placeholder}</option>
        {options
            .iter()
            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
            .collect_view()}
    }
}

fn blank_complaint() -> ComplaintSubmission {
    ComplaintSubmission {
        state: DEFAULT_STATE.to_string(),
        ..Default::default()
    }
}

fn optional(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

#[component]
pub fn ComplaintFormPage() -> impl IntoView {
    let session = StoredValue::new(use_session());
    let toasts = use_toasts();
    let reporter = use_error_reporter();

    let form = RwSignal::new(blank_complaint());
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
            match api::submit_complaint(token.as_deref(), &submission).await {
                Ok(()) => {
                    log::info!("complaint submitted");
                    toasts.success("Denúncia enviada com sucesso!");
                    form.set(blank_complaint());
                }
                Err(e) => reporter.report(&e),
            }
            set_is_sending.set(false);
        });
    };

    view! {
        <Shell active=NEW_COMPLAINT.to_string()>
            <div class="form-card">
                <h1 class="page-header__title">"Nova denúncia"</h1>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="title">"Título da denúncia*"</label>
                        <input
                            type="text"
                            id="title"
                            required
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="kind">"Tipo de denúncia*"</label>
                        <select
                            id="kind"
                            required
                            prop:value=move || form.with(|f| f.kind.clone())
                            on:change=move |ev| form.update(|f| f.kind = event_target_value(&ev))
                        >
                            {select_options("Selecione o tipo", COMPLAINT_KINDS)}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="description">"Descrição da denúncia*"</label>
                        <textarea
                            id="description"
                            required
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="occurred-date">"Data do ocorrido (opcional)"</label>
                        <input
                            type="date"
                            id="occurred-date"
                            prop:value=move || form.with(|f| f.occurred_date.clone().unwrap_or_default())
                            on:change=move |ev| form.update(|f| f.occurred_date = optional(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="location">"Local do ocorrido (opcional)"</label>
                        <input
                            type="text"
                            id="location"
                            prop:value=move || form.with(|f| f.location.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.location = optional(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="city">"Cidade (opcional)"</label>
                        <input
                            type="text"
                            id="city"
                            prop:value=move || form.with(|f| f.city.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.city = optional(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="state">"Estado"</label>
                        <select
                            id="state"
                            prop:value=move || form.with(|f| f.state.clone())
                            on:change=move |ev| form.update(|f| f.state = event_target_value(&ev))
                        >
                            <option value=DEFAULT_STATE>{DEFAULT_STATE}</option>
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
                            {format!("Ao clicar em 'Enviar denúncia', {}", TERMS_TEXT)}
                        </label>
                    </div>
                    <button type="submit" class="button button--primary" disabled=move || is_sending.get()>
                        {move || if is_sending.get() { "Enviando..." } else { "Enviar denúncia" }}
                    </button>
                </form>
            </div>
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_complaint_keeps_default_state() {
        let blank = blank_complaint();
        assert_eq!(blank.state, "Bahia");
        assert!(!blank.accepted_terms);
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_optional_drops_blank_values() {
        assert_eq!(optional("  ".into()), None);
        assert_eq!(optional("Salvador".into()), Some("Salvador".to_string()));
    }
}
