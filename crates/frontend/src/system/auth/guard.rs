use contracts::system::auth::{GuardDecision, RouteTable};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use super::session::use_session;

/// Runs the route table on every navigation; children render only when allowed.
#[component]
pub fn RouteGuard(#[prop(optional)] routes: Option<RouteTable>, children: ChildrenFn) -> impl IntoView {
    let routes = routes.unwrap_or_default();
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let decision = {
        let session = session.clone();
        Memo::new(move |_| {
            let path = location.pathname.get();
            routes.evaluate(&path, &session.viewer())
        })
    };

    Effect::new(move |_| {
        if let GuardDecision::Redirect { to, clear_session } = decision.get() {
            if clear_session {
                log::warn!("route guard: dropping an unreadable session");
                session.sign_out();
            }
            navigate(
                &to,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Allow>
            {children()}
        </Show>
    }
}
