//! Administrator dashboard ("Painel Administrativo").
//!
//! The list is filtered by the backend and re-fetched on every filter change;
//! responses of superseded requests are dropped.

use contracts::domain::a001_support_record::Record;
use contracts::enums::RecordStatus;
use contracts::shared::filters::{CategoryTable, FetchGenerations, MANAGE_USERS};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::email_modal::{EmailModal, ForwardForm};
use super::status_edit_modal::StatusEditModal;
use crate::domain::a001_support_record::api;
use crate::layout::Shell;
use crate::shared::components::{FilterControls, RecordCard};
use crate::shared::toast::use_toasts;
use crate::shared::url_filters::use_url_filters;
use crate::system::auth::redirect::use_error_reporter;
use crate::system::auth::session::use_session;

#[component]
fn AdminActions(
    record: Record,
    on_move_to_review: Callback<Record>,
    on_edit: Callback<Record>,
    on_forward: Callback<Record>,
) -> impl IntoView {
    if !record.accepts_admin_actions() {
        return view! { <span class="record-card__resolved">"Resolvido"</span> }.into_any();
    }

    let is_received = record.status.known() == Some(RecordStatus::Received);
    let record = StoredValue::new(record);

    view! {
        <Show when=move || is_received>
            <button class="button button--neutral" on:click=move |_| on_move_to_review.run(record.get_value())>
                "Mover para em análise"
            </button>
        </Show>
        <button class="button button--primary" on:click=move |_| on_edit.run(record.get_value())>
            "Editar status"
        </button>
        <button class="button button--accent" on:click=move |_| on_forward.run(record.get_value())>
            "Encaminhar"
        </button>
    }
    .into_any()
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = StoredValue::new(use_session());
    let toasts = use_toasts();
    let reporter = use_error_reporter();
    let filters = use_url_filters(CategoryTable::admin());
    let generations = FetchGenerations::new();

    let (records, set_records) = signal(Vec::<Record>::new());
    let (loading, set_loading) = signal(true);
    let reload = RwSignal::new(0u32);
    let editing = RwSignal::new(None::<Record>);
    let forwarding = RwSignal::new(None::<Record>);
    let token = move || session.with_value(|s| s.token_untracked());

    Effect::new(move |_| {
        let state = filters.state();
        reload.track();
        if state.active_category == MANAGE_USERS {
            return;
        }

        let generation = generations.begin();
        let token = token();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::list_records(token.as_deref(), &state).await;
            if !generation.is_current() {
                log::debug!("admin: dropping stale response #{}", generation.id());
                return;
            }
            match result {
                Ok(rows) => set_records.set(rows),
                Err(e) => reporter.report(&e),
            }
            set_loading.set(false);
        });
    });

    let change_status = move |record: Record, status: String| {
        if let Err(e) = record.check_status_change(&status) {
            toasts.warn(e.user_message());
            return;
        }
        let token = token();
        spawn_local(async move {
            match api::update_status(token.as_deref(), &record, &status).await {
                Ok(()) => {
                    if let Some(next) = RecordStatus::from_display_name(&status) {
                        set_records.update(|rows| api::set_local_status(rows, &record.id, next));
                    }
                    toasts.success(format!("Status do item {} alterado para: {}!", record.id, status));
                    reload.update(|n| *n += 1);
                }
                Err(e) => reporter.report(&e),
            }
        });
    };

    let on_move_to_review = Callback::new(move |record: Record| {
        change_status(record, RecordStatus::InReview.display_name().to_string());
    });
    let on_save_status = Callback::new(move |(record, status): (Record, String)| {
        change_status(record, status);
    });
    let on_edit = Callback::new(move |record: Record| {
        if record.accepts_admin_actions() {
            editing.set(Some(record));
        } else {
            toasts.warn(format!("O item {} já foi concluído.", record.id));
        }
    });
    let on_forward = Callback::new(move |record: Record| {
        if record.accepts_admin_actions() {
            forwarding.set(Some(record));
        } else {
            toasts.warn(format!("O item {} já foi concluído.", record.id));
        }
    });

    let on_send_email = Callback::new(move |form: ForwardForm| {
        let token = token();
        spawn_local(async move {
            let ForwardForm { record, to, subject, body } = form;
            match api::forward(token.as_deref(), &record, &to, &subject, &body).await {
                Ok(()) => {
                    set_records.update(|rows| api::set_local_status(rows, &record.id, RecordStatus::Forwarded));
                    toasts.success(format!("Email para {} enviado com sucesso!", to));
                    forwarding.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => reporter.report(&e),
            }
        });
    });

    let on_select = Callback::new(move |label: String| filters.select_category(&label));

    view! {
        <Shell admin=true active=Signal::derive(move || filters.active_category()) on_select=Some(on_select)>
            <div class="page-header">
                <h1 class="page-header__title">"Painel Administrativo"</h1>
                <FilterControls filters=filters />
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-message">"Carregando..."</p> }
            >
                <Show
                    when=move || !records.with(|v| v.is_empty())
                    fallback=|| view! {
                        <p class="page-message">"Nenhum item encontrado para o filtro selecionado."</p>
                    }
                >
                    <div class="record-grid">
                        <For
                            each=move || records.get()
                            key=|record| (record.id.clone(), record.status.label().to_string())
                            children=move |record| view! {
                                <RecordCard record=record.clone()>
                                    <AdminActions
                                        record=record.clone()
                                        on_move_to_review=on_move_to_review
                                        on_edit=on_edit
                                        on_forward=on_forward
                                    />
                                </RecordCard>
                            }
                        />
                    </div>
                </Show>
            </Show>

            {move || editing.get().map(|record| view! {
                <StatusEditModal
                    record=record
                    on_close=Callback::new(move |_| editing.set(None))
                    on_save=on_save_status
                />
            })}
            {move || forwarding.get().map(|record| view! {
                <EmailModal
                    record=record
                    on_close=Callback::new(move |_| forwarding.set(None))
                    on_send=on_send_email
                />
            })}
        </Shell>
    }
}
