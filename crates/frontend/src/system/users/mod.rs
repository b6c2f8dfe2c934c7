//! "Gerenciar Usuários" area of the administrator sidebar.

use contracts::shared::filters::CategoryTable;
use leptos::prelude::*;

use crate::layout::Shell;
use crate::shared::url_filters::use_url_filters;

#[component]
pub fn ManageUsersPage() -> impl IntoView {
    let filters = use_url_filters(CategoryTable::admin());
    let on_select = Callback::new(move |label: String| filters.select_category(&label));

    view! {
        <Shell admin=true active=Signal::derive(move || filters.active_category()) on_select=Some(on_select)>
            <div class="page-header">
                <h1 class="page-header__title">"Gerenciar Usuários"</h1>
            </div>
            <p class="page-message">"O gerenciamento de usuários ainda não está disponível."</p>
        </Shell>
    }
}
