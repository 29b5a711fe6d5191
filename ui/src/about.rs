use dioxus::prelude::*;
use types::paths;

use crate::use_navigation;

#[component]
pub fn AboutHero(federation_name: String) -> Element {
    let nav = use_navigation();

    rsx! {
        section { class: "hero",
            h1 { class: "hero__title", "{federation_name}" }
            p { class: "hero__lead",
                "We bring together players, clubs, coaches and state committees under one membership."
            }
            button {
                r#type: "button",
                class: "btn btn-primary btn-lg",
                onclick: move |_| nav.request(paths::JOIN),
                "Become a member"
            }
        }
    }
}

#[component]
pub fn AboutCta() -> Element {
    let nav = use_navigation();
    let contact = nav.clone();

    rsx! {
        section { class: "cta",
            h2 { class: "cta__title", "Ready to play?" }
            p { class: "cta__text", "Join a club near you or get in touch with the federation." }
            div { class: "cta__actions",
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: move |_| nav.request(paths::JOIN),
                    "Become a member"
                }
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| contact.request(paths::CONTACT),
                    "Contact us"
                }
            }
        }
    }
}
