//! The signed-in user's own complaints and requests ("Histórico").
//!
//! Records are fetched once; category, date and status are filtered in memory.

use contracts::domain::a001_support_record::Record;
use contracts::shared::filters::{filter_records, CategoryTable};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_support_record::api;
use crate::layout::Shell;
use crate::shared::components::{FilterControls, RecordCard};
use crate::shared::url_filters::use_url_filters;
use crate::system::auth::redirect::use_error_reporter;
use crate::system::auth::session::use_session;

#[component]
pub fn RecordsPage() -> impl IntoView {
    let session = use_session();
    let reporter = use_error_reporter();
    let filters = use_url_filters(CategoryTable::user());

    let (records, set_records) = signal(Vec::<Record>::new());
    let (loading, set_loading) = signal(true);

    let token = session.token_untracked();
    spawn_local(async move {
        match api::list_all_records(token.as_deref()).await {
            Ok(rows) => {
                log::debug!("records: {} loaded", rows.len());
                set_records.set(rows);
            }
            Err(e) => reporter.report(&e),
        }
        set_loading.set(false);
    });

    let visible = Memo::new(move |_| {
        let state = filters.state();
        records.with(|all| filter_records(all, &state))
    });

    let on_select = Callback::new(move |label: String| filters.select_category(&label));

    view! {
        <Shell active=Signal::derive(move || filters.active_category()) on_select=Some(on_select)>
            <div class="page-header">
                <h1 class="page-header__title">"Histórico"</h1>
                <FilterControls filters=filters />
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-message">"Carregando..."</p> }
            >
                <Show
                    when=move || !visible.with(|v| v.is_empty())
                    fallback=|| view! {
                        <p class="page-message">"Nenhum item encontrado para o filtro selecionado."</p>
                    }
                >
                    <div class="record-grid">
                        <For
                            each=move || visible.get()
                            key=|record| record.id.clone()
                            children=move |record| view! { <RecordCard record=record /> }
                        />
                    </div>
                </Show>
            </Show>
        </Shell>
    }
}
