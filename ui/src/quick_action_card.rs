use dioxus::prelude::*;
use types::Variant;

#[component]
pub fn QuickActionCard(
    title: String,
    description: String,
    icon: String,
    #[props(default)] variant: Variant,
    #[props(default)] on_activate: Option<EventHandler<()>>,
) -> Element {
    let variant = variant.as_str();
    let body = rsx! {
        span { class: "quick-action__icon", "{icon}" }
        span { class: "quick-action__title", "{title}" }
        span { class: "quick-action__description", "{description}" }
    };

    match on_activate {
        Some(handler) => rsx! {
            button {
                r#type: "button",
                class: "quick-action quick-action--{variant} quick-action--actionable",
                onclick: move |_| handler.call(()),
                {body}
            }
        },
        None => rsx! {
            div { class: "quick-action quick-action--{variant}", {body} }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[test]
    fn unknown_variant_renders_default() {
        fn app() -> Element {
            rsx! {
                QuickActionCard {
                    title: "Members",
                    description: "Review memberships",
                    icon: "👥",
                    variant: Variant::from("sparkly"),
                }
            }
        }

        assert!(render(app).contains("quick-action--default"));
    }

    #[test]
    fn renders_fields_once() {
        fn app() -> Element {
            rsx! {
                QuickActionCard {
                    title: "Tournaments",
                    description: "Register and manage club tournaments",
                    icon: "🏆",
                    variant: Variant::Primary,
                    on_activate: move |_| {},
                }
            }
        }

        let html = render(app);
        assert_eq!(html.matches("Tournaments").count(), 1);
        assert_eq!(html.matches("Register and manage club tournaments").count(), 1);
        assert_eq!(html.matches("🏆").count(), 1);
        assert!(html.contains("quick-action--primary quick-action--actionable"));
    }
}
