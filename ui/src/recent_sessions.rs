use dioxus::prelude::*;
use types::{RECENT_SESSIONS_CAP, RecentSession, paths};

use crate::use_navigation;

/// The coach's latest sessions, capped at [`RECENT_SESSIONS_CAP`].
#[component]
pub fn CoachRecentSessions(sessions: Vec<RecentSession>) -> Element {
    let nav = use_navigation();

    if sessions.is_empty() {
        return rsx! {
            section { class: "recent-sessions",
                h2 { class: "section-title", "Recent sessions" }
                div { class: "empty-state",
                    span { class: "empty-state__icon", "📅" }
                    p { class: "empty-state__message", "No recent sessions" }
                }
            }
        };
    }

    rsx! {
        section { class: "recent-sessions",
            h2 { class: "section-title", "Recent sessions" }
            ul { class: "recent-sessions__list",
                for session in sessions.iter().take(RECENT_SESSIONS_CAP) {
                    li { key: "{session.id}", class: "recent-sessions__item",
                        div { class: "recent-sessions__student", "{session.student_name}" }
                        div { class: "recent-sessions__meta",
                            span { class: "recent-sessions__type", "{session.session_type}" }
                            span { class: "recent-sessions__date", "{session.date}" }
                        }
                        span { class: "recent-sessions__rating", {session.rating_label()} }
                    }
                }
            }
            button {
                r#type: "button",
                class: "btn btn-secondary recent-sessions__more",
                onclick: move |_| nav.request(paths::COACH_SESSIONS),
                "View all sessions"
            }
        }
    }
}
