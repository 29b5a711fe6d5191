use dioxus::prelude::*;
use types::{BadgeColor, StatValue};
use ui::{PlayerProfileHeader, StatsCard, use_navigation};

use super::components::{LoadError, Loading, error_message};
use crate::Route;

#[component]
pub fn PlayerDashboard() -> Element {
    let nav = use_navigation();
    let profile = use_server_future(api::player_profile)?;
    let reservations = use_server_future(api::reservation_count)?;

    let reservation_count = match &*reservations.read() {
        Some(Ok(count)) => *count,
        _ => 0,
    };

    match &*profile.read() {
        Some(Ok(Some(profile))) => rsx! {
            div {
                PlayerProfileHeader { profile: profile.clone() }
                div { class: "stats-grid",
                    StatsCard {
                        title: "Category",
                        value: StatValue::Text(profile.category.clone()),
                        icon: "🎯",
                        color: BadgeColor::Blue,
                    }
                    StatsCard {
                        title: "Upcoming reservations",
                        value: StatValue::from(reservation_count),
                        icon: "📅",
                        color: BadgeColor::Green,
                        subtitle: Some("Open court reservations".to_string()),
                        on_activate: move |_| nav.request(&Route::CourtReservations {}.to_string()),
                    }
                }
            }
        },
        Some(Ok(None)) => rsx! {
            div { class: "empty-state",
                span { class: "empty-state__icon", "👤" }
                p { class: "empty-state__message", "No player profile on file" }
            }
        },
        Some(Err(error)) => rsx! { LoadError { error: error_message(error) } },
        None => rsx! { Loading { label: "Loading profile..." } },
    }
}
