use dioxus::prelude::*;
use types::{PlayerProfile, StateProfile};

use crate::{Avatar, use_locale};

pub const PLAYER_PLACEHOLDER: &str = "👤";
pub const STATE_PLACEHOLDER: &str = "🏛";

#[component]
pub fn DashboardHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "page-header",
            div { class: "page-header-content",
                h1 { class: "page-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div { class: "page-header-actions", {children} }
        }
    }
}

/// Player dashboard header. Shows the photo, or a glyph when there is none.
#[component]
pub fn PlayerProfileHeader(profile: PlayerProfile) -> Element {
    let photo = profile.photo_url.as_ref().map(|url| url.to_string());

    rsx! {
        div { class: "profile-header profile-header--player",
            Avatar {
                url: photo,
                placeholder: PLAYER_PLACEHOLDER.to_string(),
                size: "lg",
            }
            div { class: "profile-header__info",
                h1 { class: "profile-header__name", "{profile.name}" }
                p { class: "profile-header__detail", "{profile.club_name} · {profile.state}" }
                div { class: "profile-header__facts",
                    span { class: "profile-header__fact", "Category {profile.category}" }
                    span { class: "profile-header__fact", "No. {profile.member_number}" }
                    if let Some(badge) = &profile.membership_badge {
                        span { class: "badge {profile.badge_color.class()}", "{badge}" }
                    }
                }
            }
        }
    }
}

/// State committee header. Shows the logo, or a glyph when there is none.
#[component]
pub fn StateProfileHeader(profile: StateProfile) -> Element {
    let locale = use_locale();
    let logo = profile.logo_url.as_ref().map(|url| url.to_string());
    let clubs = locale.format_count(profile.affiliated_clubs);
    let players = locale.format_count(profile.registered_players);

    rsx! {
        div { class: "profile-header profile-header--state",
            Avatar {
                url: logo,
                placeholder: STATE_PLACEHOLDER.to_string(),
                size: "lg",
            }
            div { class: "profile-header__info",
                h1 { class: "profile-header__name", "{profile.committee_name}" }
                p { class: "profile-header__detail", "{profile.state} · President: {profile.president_name}" }
                div { class: "profile-header__facts",
                    span { class: "profile-header__fact", "{clubs} clubs" }
                    span { class: "profile-header__fact", "{players} players" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_with;
    use types::BadgeColor;
    use url::Url;

    fn player(photo: Option<&str>) -> PlayerProfile {
        PlayerProfile {
            name: "Lucía Ramírez".into(),
            club_name: "Club Pádel Norte".into(),
            state: "Nuevo León".into(),
            category: "4.0".into(),
            member_number: "FN-00123".into(),
            photo_url: photo.map(|p| Url::parse(p).unwrap()),
            membership_badge: Some("Gold".into()),
            badge_color: BadgeColor::Yellow,
        }
    }

    fn state(logo: Option<&str>) -> StateProfile {
        StateProfile {
            committee_name: "Comité Estatal Jalisco".into(),
            president_name: "Marta Gil".into(),
            state: "Jalisco".into(),
            affiliated_clubs: 42,
            registered_players: 12_500,
            logo_url: logo.map(|l| Url::parse(l).unwrap()),
        }
    }

    fn player_app(profile: PlayerProfile) -> Element {
        rsx! { PlayerProfileHeader { profile } }
    }

    fn state_app(profile: StateProfile) -> Element {
        rsx! { StateProfileHeader { profile } }
    }

    #[test]
    fn player_without_photo_renders_glyph() {
        let html = render_with(player_app, player(None));
        assert!(!html.contains("<img"));
        assert!(html.contains(PLAYER_PLACEHOLDER));
    }

    #[test]
    fn player_with_photo_renders_image() {
        let html = render_with(player_app, player(Some("https://cdn.example.org/lucia.jpg")));
        assert!(html.contains("src=\"https://cdn.example.org/lucia.jpg\""));
        assert!(!html.contains(PLAYER_PLACEHOLDER));
        assert_eq!(html.matches("Lucía Ramírez").count(), 1);
    }

    #[test]
    fn player_fields_and_badge() {
        let html = render_with(player_app, player(None));
        assert!(html.contains("Lucía Ramírez"));
        assert!(html.contains("FN-00123"));
        assert!(html.contains("badge badge--yellow"));
    }

    #[test]
    fn state_without_logo_renders_glyph() {
        let html = render_with(state_app, state(None));
        assert!(!html.contains("<img"));
        assert!(html.contains(STATE_PLACEHOLDER));
        assert!(html.contains("12,500 players"));
    }

    #[test]
    fn state_with_logo_renders_image() {
        let html = render_with(state_app, state(Some("https://cdn.example.org/jalisco.svg")));
        assert!(html.contains("<img"));
        assert!(!html.contains(STATE_PLACEHOLDER));
        let committee = state(None).committee_name;
        assert_eq!(html.matches(committee.as_str()).count(), 1);
    }
}
