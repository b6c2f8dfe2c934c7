pub mod left;

use leptos::prelude::*;

use left::Sidebar;

/// Page frame: sidebar on the left, page content on the right.
#[component]
pub fn Shell(
    #[prop(optional)] admin: bool,
    #[prop(into)] active: Signal<String>,
    #[prop(optional_no_strip)] on_select: Option<Callback<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar admin=admin active=active on_select=on_select />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
