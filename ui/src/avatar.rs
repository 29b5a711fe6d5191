use dioxus::prelude::*;

/// A round image, or `placeholder` when there is no image to show.
///
/// The image is decorative next to a visible name, so `alt` defaults to empty.
#[component]
pub fn Avatar(
    url: Option<String>,
    #[props(default)] alt: String,
    placeholder: String,
    #[props(default = "md".to_string())] size: String,
) -> Element {
    match url {
        Some(url) => rsx! {
            img { class: "avatar avatar--{size}", src: "{url}", alt: "{alt}" }
        },
        None => rsx! {
            div { class: "avatar avatar--{size} avatar--placeholder", "{placeholder}" }
        },
    }
}
