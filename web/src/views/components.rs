use dioxus::prelude::*;

#[component]
pub fn Loading(label: String) -> Element {
    rsx! { div { class: "loading", "{label}" } }
}

/// Inline alert for a failed server call.
#[component]
pub fn LoadError(error: String) -> Element {
    rsx! {
        div { class: "alert alert-error", "{error}" }
    }
}

pub fn error_message(error: &ServerFnError) -> String {
    match error {
        ServerFnError::ServerError { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
