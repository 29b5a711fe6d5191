use dioxus::prelude::*;
use types::{BadgeColor, StatValue};

use crate::use_locale;

/// A labelled value with an icon.
///
/// Numbers are grouped for the current locale; text is shown as given.
/// Passing `on_activate` turns the whole card into a button.
#[component]
pub fn StatsCard(
    title: String,
    value: StatValue,
    icon: String,
    #[props(default)] color: BadgeColor,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] on_activate: Option<EventHandler<()>>,
) -> Element {
    let locale = use_locale();
    let display = match &value {
        StatValue::Number(n) => locale.format_count(*n),
        StatValue::Text(text) => text.clone(),
    };

    let body = rsx! {
        div { class: "stats-card__icon", "{icon}" }
        div { class: "stats-card__content",
            div { class: "stats-card__value", "{display}" }
            div { class: "stats-card__title", "{title}" }
            if let Some(subtitle) = subtitle {
                div { class: "stats-card__subtitle", "{subtitle}" }
            }
        }
    };

    match on_activate {
        Some(handler) => rsx! {
            button {
                r#type: "button",
                class: "stats-card stats-card--{color} stats-card--actionable",
                onclick: move |_| handler.call(()),
                {body}
            }
        },
        None => rsx! {
            div { class: "stats-card stats-card--{color}", {body} }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;
    use types::Locale;

    #[test]
    fn renders_each_field_once() {
        fn app() -> Element {
            rsx! {
                StatsCard {
                    title: "Registered players",
                    value: StatValue::Number(1234),
                    icon: "🏓",
                    subtitle: Some("Across 32 states".to_string()),
                }
            }
        }

        let html = render(app);
        assert_eq!(html.matches("Registered players").count(), 1);
        assert_eq!(html.matches("1,234").count(), 1);
        assert_eq!(html.matches("🏓").count(), 1);
        assert_eq!(html.matches("Across 32 states").count(), 1);
    }

    #[test]
    fn without_handler_is_informational() {
        fn app() -> Element {
            rsx! { StatsCard { title: "Courts", value: StatValue::Number(8), icon: "🎾" } }
        }

        let html = render(app);
        assert!(html.starts_with("<div"));
        assert!(!html.contains("<button"));
        assert!(!html.contains("stats-card--actionable"));
    }

    #[test]
    fn with_handler_is_a_button() {
        fn app() -> Element {
            rsx! {
                StatsCard {
                    title: "Reservations",
                    value: StatValue::Number(3),
                    icon: "📅",
                    on_activate: move |_| {},
                }
            }
        }

        let html = render(app);
        assert!(html.contains("<button"));
        assert!(html.contains("stats-card--actionable"));
    }

    #[test]
    fn text_values_are_verbatim() {
        fn app() -> Element {
            rsx! { StatsCard { title: "Rating", value: StatValue::Text("4.8 / 5".into()), icon: "⭐" } }
        }

        assert!(render(app).contains("4.8 / 5"));
    }

    #[test]
    fn numbers_follow_provided_locale() {
        fn app() -> Element {
            use_context_provider(|| Locale::EsEs);
            rsx! { StatsCard { title: "Members", value: StatValue::Number(1_234_567), icon: "👥" } }
        }

        assert!(render(app).contains("1.234.567"));
    }

    #[test]
    fn default_color_is_gray() {
        fn app() -> Element {
            rsx! { StatsCard { title: "Coaches", value: StatValue::Number(5), icon: "🧑" } }
        }

        assert!(render(app).contains("stats-card--gray"));
    }

    #[test]
    fn unknown_color_string_renders_gray() {
        fn app() -> Element {
            rsx! {
                StatsCard {
                    title: "Coaches",
                    value: StatValue::Number(5),
                    icon: "🧑",
                    color: BadgeColor::from("neon"),
                }
            }
        }

        assert!(render(app).contains("stats-card--gray"));
    }
}
