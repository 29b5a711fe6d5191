use std::rc::Rc;

use dioxus::prelude::*;

/// The routing collaborator. Receives a path and performs the transition.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

/// Shared handle to the app's navigator, provided through context.
#[derive(Clone)]
pub struct Navigation(Rc<dyn Navigate>);

impl Navigation {
    pub fn new(navigate: impl Navigate + 'static) -> Self {
        Self(Rc::new(navigate))
    }

    /// Fire-and-forget request to show `path`.
    pub fn request(&self, path: &str) {
        tracing::debug!(path, "navigation requested");
        self.0.navigate(path);
    }
}

/// Used when nothing provided a navigator, e.g. a component rendered in isolation.
struct Detached;

impl Navigate for Detached {
    fn navigate(&self, path: &str) {
        tracing::warn!(path, "navigation requested without a navigator");
    }
}

/// Get the app's navigation handle.
pub fn use_navigation() -> Navigation {
    try_use_context::<Navigation>().unwrap_or_else(|| Navigation::new(Detached))
}

/// Provide `navigate` to every component below the caller.
pub fn use_navigation_provider(navigate: impl FnOnce() -> Navigation) -> Navigation {
    use_context_provider(navigate)
}
