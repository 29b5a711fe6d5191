use dioxus::prelude::*;
use types::{
    QuickAction, Variant,
    catalog::{CLUB_QUICK_ACTIONS, PARTNER_QUICK_ACTIONS},
};

use crate::{QuickActionCard, use_navigation};

/// A titled grid of quick actions. Each card navigates to its destination.
#[component]
pub fn QuickActionGrid(
    title: String,
    actions: &'static [QuickAction],
    #[props(default = Variant::Primary)] variant: Variant,
) -> Element {
    let nav = use_navigation();

    rsx! {
        section { class: "quick-actions",
            h2 { class: "section-title", "{title}" }
            div { class: "quick-actions__grid",
                for action in actions.iter() {
                    div {
                        key: "{action.title}",
                        class: "quick-actions__item",
                        "data-destination": action.destination,
                        QuickActionCard {
                            title: action.title.to_string(),
                            description: action.description.to_string(),
                            icon: action.icon.to_string(),
                            variant,
                            on_activate: {
                                let nav = nav.clone();
                                move |_| nav.request(action.destination)
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ClubQuickActions() -> Element {
    rsx! { QuickActionGrid { title: "Quick actions", actions: CLUB_QUICK_ACTIONS } }
}

#[component]
pub fn PartnerQuickActions() -> Element {
    rsx! {
        QuickActionGrid {
            title: "Manage your venue",
            actions: PARTNER_QUICK_ACTIONS,
            variant: Variant::Secondary,
        }
    }
}
