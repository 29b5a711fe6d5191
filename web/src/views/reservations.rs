use dioxus::prelude::*;
use types::ReservationTab;
use ui::{CourtReservationsTabs, DashboardHeader};

/// Owns the selected tab; the tab control only asks for changes.
#[component]
pub fn CourtReservations() -> Element {
    let mut active = use_signal(ReservationTab::default);
    let count = use_server_future(api::reservation_count)?;

    let reservation_count = match &*count.read() {
        Some(Ok(count)) => *count,
        Some(Err(error)) => {
            tracing::warn!(%error, "failed to load reservation count");
            0
        }
        None => 0,
    };

    let panel = match active() {
        ReservationTab::Search => rsx! {
            p { class: "text-muted", "Court search opens once venues publish their availability." }
        },
        ReservationTab::MyReservations if reservation_count == 0 => rsx! {
            p { class: "text-muted", "You have no reservations." }
        },
        ReservationTab::MyReservations => rsx! {
            p { "You have {reservation_count} upcoming reservations." }
        },
    };

    rsx! {
        div {
            DashboardHeader {
                title: "Court reservations",
                subtitle: Some("Find a free court or manage your bookings".to_string()),
                span { class: "badge badge--green", "{reservation_count} active" }
            }
            CourtReservationsTabs {
                active: active(),
                on_change: move |tab| active.set(tab),
                reservation_count,
            }
            div { class: "card", {panel} }
        }
    }
}
