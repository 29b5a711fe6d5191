use dioxus::prelude::*;
use types::{BadgeColor, StatValue};
use ui::{StateProfileHeader, StatsCard, UserCard};

use super::components::{LoadError, Loading, error_message};

#[component]
pub fn StateDashboard() -> Element {
    let profile = use_server_future(api::state_profile)?;
    let featured = use_server_future(api::featured_players)?;

    let header = match &*profile.read() {
        Some(Ok(Some(profile))) => rsx! {
            StateProfileHeader { profile: profile.clone() }
            div { class: "stats-grid",
                StatsCard {
                    title: "Affiliated clubs",
                    value: StatValue::Number(profile.affiliated_clubs),
                    icon: "🏟",
                    color: BadgeColor::Purple,
                }
                StatsCard {
                    title: "Registered players",
                    value: StatValue::Number(profile.registered_players),
                    icon: "🏓",
                    color: BadgeColor::Blue,
                }
            }
        },
        Some(Ok(None)) => rsx! {
            div { class: "empty-state",
                span { class: "empty-state__icon", "🏛" }
                p { class: "empty-state__message", "No state committee on file" }
            }
        },
        Some(Err(error)) => rsx! { LoadError { error: error_message(error) } },
        None => rsx! { Loading { label: "Loading committee..." } },
    };

    let players = match &*featured.read() {
        Some(Ok(players)) => players.clone(),
        _ => Vec::new(),
    };
    let no_players = players.is_empty();

    rsx! {
        div {
            {header}
            section { class: "user-list",
                h2 { class: "section-title", "Featured players" }
                if no_players {
                    p { class: "text-muted", "No featured players yet" }
                }
                for player in players {
                    UserCard {
                        key: "{player.name}",
                        name: player.name.clone(),
                        detail: player.detail.clone(),
                        avatar_url: player.photo_url.as_ref().map(|url| url.to_string()),
                        badge: player.badge.clone(),
                        badge_color: player.badge_color,
                    }
                }
            }
        }
    }
}
