use dioxus::prelude::*;
use types::SiteSettings;
use ui::{AboutCta, AboutHero, DashboardHeader};

use crate::Route;

#[component]
pub fn About() -> Element {
    let settings = use_server_future(api::site_settings)?;
    let federation_name = match &*settings.read() {
        Some(Ok(site)) => site.federation_name.clone(),
        _ => SiteSettings::default().federation_name,
    };

    rsx! {
        div {
            AboutHero { federation_name }
            div { class: "about-grid",
                div { class: "card",
                    h3 { class: "card-title", "Players" }
                    p { "Official rankings, categories and a membership card valid in every state." }
                }
                div { class: "card",
                    h3 { class: "card-title", "Clubs and venues" }
                    p { "Affiliated clubs and partner venues host sanctioned tournaments and clinics." }
                }
                div { class: "card",
                    h3 { class: "card-title", "Coaches" }
                    p { "Certified coaches track sessions and student progress." }
                }
            }
            AboutCta {}
        }
    }
}

#[component]
pub fn Join() -> Element {
    rsx! {
        div {
            DashboardHeader {
                title: "Become a member",
                subtitle: Some("Membership is handled by your state committee.".to_string()),
                Link { to: Route::Contact {}, class: "btn btn-secondary", "Questions?" }
            }
            div { class: "card",
                ol { class: "steps",
                    li { "Find an affiliated club in your state." }
                    li { "Register with the club and choose your category." }
                    li { "Your state committee issues your member number." }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        div {
            DashboardHeader {
                title: "Contact us",
                subtitle: Some("We usually answer within two business days.".to_string()),
                Link { to: Route::About {}, class: "btn btn-secondary", "Back to About" }
            }
            div { class: "card",
                p { "Write to your state committee first; they can resolve most membership questions." }
                p { "For federation matters, use the contact form at your nearest affiliated club." }
            }
        }
    }
}
