use dioxus::prelude::*;
use ui::{CoachRecentSessions, DashboardHeader};

use super::components::{LoadError, Loading, error_message};
use crate::Route;

#[component]
pub fn CoachDashboard() -> Element {
    let sessions = use_server_future(api::coach_sessions)?;

    let body = match &*sessions.read() {
        Some(Ok(sessions)) => rsx! { CoachRecentSessions { sessions: sessions.clone() } },
        Some(Err(error)) => rsx! { LoadError { error: error_message(error) } },
        None => rsx! { Loading { label: "Loading sessions..." } },
    };

    rsx! {
        div {
            DashboardHeader {
                title: "Coach dashboard",
                subtitle: Some("Your latest sessions".to_string()),
                span { class: "badge badge--purple", "Certified coach" }
            }
            {body}
        }
    }
}

/// Full session history lives elsewhere; this page only links back.
#[component]
pub fn CoachSessions() -> Element {
    rsx! {
        DashboardHeader {
            title: "All sessions",
            subtitle: Some("Session history is not available yet.".to_string()),
            Link { to: Route::CoachDashboard {}, class: "btn btn-secondary", "Back to dashboard" }
        }
    }
}
