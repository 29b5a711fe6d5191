use dioxus::prelude::*;
use types::Locale;

/// The locale provided by the app, or the default when none was provided.
pub fn use_locale() -> Locale {
    try_use_context::<Locale>().unwrap_or_default()
}
