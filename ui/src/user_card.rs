use dioxus::prelude::*;
use types::BadgeColor;

use crate::Avatar;

/// A person in a list: avatar, name, a line of detail and an optional badge.
#[component]
pub fn UserCard(
    name: String,
    detail: String,
    #[props(default)] avatar_url: Option<String>,
    #[props(default = "👤".to_string())] placeholder: String,
    #[props(default)] badge: Option<String>,
    #[props(default)] badge_color: BadgeColor,
    #[props(default)] on_activate: Option<EventHandler<()>>,
) -> Element {
    let body = rsx! {
        Avatar { url: avatar_url, placeholder, size: "md" }
        div { class: "user-card__info",
            div { class: "user-card__name", "{name}" }
            div { class: "user-card__detail", "{detail}" }
        }
        if let Some(badge) = badge {
            span { class: "badge {badge_color.class()}", "{badge}" }
        }
    };

    match on_activate {
        Some(handler) => rsx! {
            button {
                r#type: "button",
                class: "user-card user-card--actionable",
                onclick: move |_| handler.call(()),
                {body}
            }
        },
        None => rsx! {
            div { class: "user-card", {body} }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[test]
    fn renders_name_detail_and_badge() {
        fn app() -> Element {
            rsx! {
                UserCard {
                    name: "Diego Torres",
                    detail: "Club Raqueta Sur · 3.5",
                    badge: Some("Active".to_string()),
                    badge_color: BadgeColor::Green,
                }
            }
        }

        let html = render(app);
        assert_eq!(html.matches("Diego Torres").count(), 1);
        assert_eq!(html.matches("Club Raqueta Sur · 3.5").count(), 1);
        assert!(html.contains("badge badge--green"));
        assert_eq!(html.matches("Active").count(), 1);
    }

    #[test]
    fn missing_avatar_renders_placeholder() {
        fn app() -> Element {
            rsx! { UserCard { name: "Sofía", detail: "Coach" } }
        }

        let html = render(app);
        assert!(!html.contains("<img"));
        assert!(html.contains("avatar--placeholder"));
        assert!(html.contains("👤"));
    }

    #[test]
    fn avatar_url_renders_image() {
        fn app() -> Element {
            rsx! {
                UserCard {
                    name: "Sofía",
                    detail: "Coach",
                    avatar_url: Some("https://cdn.example.org/sofia.png".to_string()),
                }
            }
        }

        let html = render(app);
        assert!(html.contains("<img"));
        assert!(html.contains("https://cdn.example.org/sofia.png"));
        assert!(!html.contains("avatar--placeholder"));
        assert_eq!(html.matches("Sofía").count(), 1);
        assert_eq!(html.matches("Coach").count(), 1);
    }

    #[test]
    fn no_badge_without_label() {
        fn app() -> Element {
            rsx! { UserCard { name: "Sofía", detail: "Coach", badge_color: BadgeColor::Red } }
        }

        assert!(!render(app).contains("badge--red"));
    }

    #[test]
    fn with_handler_is_a_button() {
        fn app() -> Element {
            rsx! { UserCard { name: "Sofía", detail: "Coach", on_activate: move |_| {} } }
        }

        let html = render(app);
        assert!(html.starts_with("<button"));
        assert!(html.contains("user-card--actionable"));
    }
}
