//! Public landing page: rights information and the entry points that lead
//! through the login page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::system::auth::redirect::LoginRedirect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RightsItem {
    Text(&'static str),
    Link {
        label: &'static str,
        href: &'static str,
    },
}

struct RightsSection {
    title: &'static str,
    items: &'static [RightsItem],
}

const RIGHTS_SECTIONS: &[RightsSection] = &[
    RightsSection {
        title: "Cartilhas para download",
        items: &[RightsItem::Link {
            label: "Cartilha de Direitos da Comunidade LGBTQIAPN+",
            href: "https://www.anamatra.org.br/images/LGBTQIA/CARTILHAS/Cartilha_Comiss%C3%A3o_LGBTQIAPN.pdf",
        }],
    },
    RightsSection {
        title: "Direitos garantidos por lei",
        items: &[
            RightsItem::Text("Direito ao nome social e identidade de gênero"),
            RightsItem::Text("Criminalização da LGBTQIA+fobia (STF, 2019)"),
            RightsItem::Text("Direito ao uso do banheiro de acordo com a identidade de gênero"),
            RightsItem::Text("Acesso à saúde e educação sem discriminação"),
        ],
    },
    RightsSection {
        title: "Canais oficiais de denúncia",
        items: &[
            RightsItem::Text("Disque 100 (Direitos Humanos)"),
            RightsItem::Text("Ouvidorias de Direitos Humanos estaduais"),
            RightsItem::Text("Delegacia Online"),
            RightsItem::Text("Aplicativo Direitos Humanos Brasil"),
        ],
    },
    RightsSection {
        title: "Contatos úteis (Defensoria, ONGs, etc.)",
        items: &[
            RightsItem::Text("Defensoria Pública do Estado: (xx) xxxx-xxxx"),
            RightsItem::Text("ONGs de apoio: Grupo Dignidade, ABGLT, Transgrupo Marcela Prado"),
            RightsItem::Text("Centros de referência em direitos humanos"),
            RightsItem::Text("Atendimento psicológico gratuito: verifique unidades do SUS"),
        ],
    },
];

/// (label, destination after login, button class)
const CALLS_TO_ACTION: &[(&str, &str, &str)] = &[
    ("Fazer denúncia", "/complaints", "button button--outline"),
    ("Acompanhar denúncias", "/records", "button button--primary"),
    ("Solicitar apoio", "/requests", "button button--outline"),
];

/// At most one section is open; clicking the open one closes it.
fn toggle_section(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
fn RightsEntry(item: RightsItem) -> impl IntoView {
    match item {
        RightsItem::Text(text) => view! { <li>{text}</li> }.into_any(),
        RightsItem::Link { label, href } => view! {
            <li>
                <a href=href target="_blank" rel="noopener noreferrer">{label}</a>
            </li>
        }
        .into_any(),
    }
}

#[component]
fn RightsAccordion() -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    let sections = RIGHTS_SECTIONS
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let is_open = move || open.get() == Some(index);
            view! {
                <div class="accordion__item">
                    <button
                        class="accordion__trigger"
                        class:accordion__trigger--open=is_open
                        aria-expanded=move || is_open().to_string()
                        on:click=move |_| open.update(|o| *o = toggle_section(*o, index))
                    >
                        {section.title}
                    </button>
                    <Show when=is_open>
                        <ul class="accordion__content">
                            {section
                                .items
                                .iter()
                                .map(|item| view! { <RightsEntry item=*item /> })
                                .collect_view()}
                        </ul>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! { <div class="accordion">{sections}</div> }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();

    let actions = CALLS_TO_ACTION
        .iter()
        .map(|(label, dest, class)| {
            let navigate = navigate.clone();
            let url = LoginRedirect::then(dest).to_url();
            view! {
                <button class=*class on:click=move |_| navigate(&url, Default::default())>
                    {*label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="landing">
            <header class="landing__top">
                <img src="/logo-elos.svg" alt="Elos Logo" class="landing__logo" />
                <nav class="landing__nav">
                    <a href="/login">"login"</a>
                    <a href="/register">"cadastro"</a>
                </nav>
            </header>

            <section class="landing__hero">
                <h1>"Sua voz importa. Sua segurança é prioridade."</h1>
                <p>
                    "Nossa plataforma existe para acolher, registrar e acompanhar denúncias \
                     de LGBTQIA+fobia, oferecendo também apoio jurídico e psicológico gratuito."
                </p>
            </section>

            <hr class="landing__divider" />
            <h2 class="landing__subtitle">"Conheça seus direitos"</h2>
            <RightsAccordion />

            <div class="landing__actions">{actions}</div>

            <footer class="landing__footer">
                <p>"© 2025 Elos. Todos os direitos reservados."</p>
                <p>"Desenvolvido com apoio do Núcleo Amado."</p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_section_open_at_a_time() {
        assert_eq!(toggle_section(None, 2), Some(2));
        assert_eq!(toggle_section(Some(2), 0), Some(0));
        assert_eq!(toggle_section(Some(0), 0), None);
    }

    #[test]
    fn test_calls_to_action_go_through_login() {
        let urls: Vec<String> = CALLS_TO_ACTION
            .iter()
            .map(|(_, dest, _)| LoginRedirect::then(dest).to_url())
            .collect();
        assert_eq!(
            urls,
            [
                "/login?redirect=%2Fcomplaints",
                "/login?redirect=%2Frecords",
                "/login?redirect=%2Frequests",
            ]
        );
    }

    #[test]
    fn test_every_section_has_content() {
        assert_eq!(RIGHTS_SECTIONS.len(), 4);
        assert!(RIGHTS_SECTIONS.iter().all(|s| !s.items.is_empty()));
        assert!(matches!(
            RIGHTS_SECTIONS[0].items[0],
            RightsItem::Link { href, .. } if href.ends_with(".pdf")
        ));
    }
}
