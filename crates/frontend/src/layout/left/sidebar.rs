//! Sidebar with the category links of the current area
//!
//! Category links reflect the page's filter state; on a listing page a click
//! goes through the page's filter controller instead of a plain navigation.

use contracts::shared::filters::{CategoryTable, FilterState, QueryParams, MANAGE_USERS, SHOW_ALL};
use leptos::prelude::*;

use super::logout::LogoutButton;

pub const NEW_COMPLAINT: &str = "Nova denúncia";
pub const NEW_REQUEST: &str = "Nova solicitação";

#[derive(Clone, Debug, PartialEq)]
enum NavItem {
    /// Plain page link
    Link(&'static str, &'static str),
    /// Entry of the area's category table
    Category(&'static str),
    Divider,
}

fn user_items() -> Vec<NavItem> {
    vec![
        NavItem::Link(NEW_COMPLAINT, "/complaints"),
        NavItem::Category("Denúncias feitas"),
        NavItem::Divider,
        NavItem::Link(NEW_REQUEST, "/requests"),
        NavItem::Category("Solicitações feitas"),
        NavItem::Divider,
        NavItem::Category(SHOW_ALL),
    ]
}

fn admin_items() -> Vec<NavItem> {
    vec![
        NavItem::Category("Denúncias"),
        NavItem::Category("Solicitações"),
        NavItem::Divider,
        NavItem::Category(MANAGE_USERS),
        NavItem::Divider,
        NavItem::Category(SHOW_ALL),
    ]
}

/// URL a category link points to when followed directly
pub fn category_href(table: &CategoryTable, label: &str) -> String {
    let mut params = QueryParams::default();
    FilterState::for_category(table, label).write_params(&mut params);
    params.to_url(table.path_for(label))
}

#[component]
pub fn Sidebar(
    /// Administrator area
    #[prop(optional)]
    admin: bool,
    /// Label of the highlighted link
    #[prop(into)]
    active: Signal<String>,
    /// Category clicks are handed here when set
    #[prop(optional_no_strip)]
    on_select: Option<Callback<String>>,
) -> impl IntoView {
    let (table, items) = if admin {
        (CategoryTable::admin(), admin_items())
    } else {
        (CategoryTable::user(), user_items())
    };

    let item_view = move |item: NavItem| match item {
        NavItem::Divider => view! { <div class="app-sidebar__divider"></div> }.into_any(),
        NavItem::Link(label, href) => view! {
            <a
                href=href
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || active.get() == label
            >
                {label}
            </a>
        }
        .into_any(),
        NavItem::Category(label) => {
            let href = category_href(&table, label);
            view! {
                <a
                    href=href
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=move || active.get() == label
                    on:click=move |ev| {
                        if let Some(select) = on_select {
                            ev.prevent_default();
                            select.run(label.to_string());
                        }
                    }
                >
                    {label}
                </a>
            }
            .into_any()
        }
    };

    view! {
        <aside class="app-sidebar">
            <div class="app-sidebar__content">
                <div class="app-sidebar__logo">
                    <img src="/logo-elos.svg" alt="Elos Logo" />
                </div>
                <nav>
                    {items.into_iter().map(item_view).collect_view()}
                </nav>
            </div>
            <LogoutButton />
        </aside>
    }
}
