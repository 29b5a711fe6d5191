use dioxus::prelude::*;
use types::{ReservationTab, TabSet};

fn request_tab<T: TabSet>(tab: T, on_change: impl FnOnce(T)) {
    tracing::debug!(tab = tab.key(), "tab change requested");
    on_change(tab);
}

/// Mutually exclusive tabs. Selection is owned by the caller.
///
/// Clicking a tab only reports it through `on_change`; the marked tab follows `active`.
#[component]
pub fn TabSwitch<T: TabSet>(
    active: T,
    on_change: EventHandler<T>,
    /// A count shown next to one tab's label.
    #[props(default)]
    badge: Option<(T, u32)>,
) -> Element {
    rsx! {
        div { class: "tab-switch", role: "tablist",
            for tab in T::all().iter().copied() {
                {
                    let is_active = tab == active;
                    let class = if is_active {
                        "tab-switch__tab tab-switch__tab--active"
                    } else {
                        "tab-switch__tab"
                    };
                    let count = badge.and_then(|(badge_tab, count)| (badge_tab == tab).then_some(count));

                    rsx! {
                        button {
                            key: "{tab.key()}",
                            r#type: "button",
                            role: "tab",
                            class,
                            aria_selected: if is_active { "true" } else { "false" },
                            "data-tab": tab.key(),
                            onclick: move |_| request_tab(tab, |tab| on_change.call(tab)),
                            "{tab.label()}"
                            if let Some(count) = count {
                                span { class: "tab-switch__badge", "{count}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Court search / my reservations, with the reservation count on the second tab.
#[component]
pub fn CourtReservationsTabs(
    active: ReservationTab,
    on_change: EventHandler<ReservationTab>,
    reservation_count: u32,
) -> Element {
    rsx! {
        TabSwitch::<ReservationTab> {
            active,
            on_change,
            badge: Some((ReservationTab::MyReservations, reservation_count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::test_support::{Clicker, render_with};

    fn app(active: ReservationTab) -> Element {
        rsx! {
            CourtReservationsTabs { active, on_change: move |_| {}, reservation_count: 3 }
        }
    }

    fn active_tabs(html: &str) -> usize {
        html.matches("tab-switch__tab--active").count()
    }

    #[test]
    fn exactly_one_tab_is_active() {
        for tab in ReservationTab::all() {
            let html = render_with(app, *tab);
            assert_eq!(active_tabs(&html), 1);
            assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
        }
    }

    #[test]
    fn active_tab_follows_supplied_value() {
        let html = render_with(app, ReservationTab::MyReservations);
        let marked = html
            .split("<button")
            .find(|button| button.contains("tab-switch__tab--active"))
            .unwrap();
        assert!(marked.contains("data-tab=\"my-reservations\""));
    }

    #[test]
    fn badge_shows_supplied_count_on_its_tab() {
        let html = render_with(app, ReservationTab::Search);
        let my_reservations = html
            .split("<button")
            .find(|button| button.contains("data-tab=\"my-reservations\""))
            .unwrap();
        assert!(my_reservations.contains("tab-switch__badge"));
        assert!(my_reservations.contains(">3<"));
        assert_eq!(html.matches("tab-switch__badge").count(), 1);
    }

    type Requests = Rc<RefCell<Vec<ReservationTab>>>;

    fn owned_by(requests: Requests) -> Element {
        rsx! {
            CourtReservationsTabs {
                active: ReservationTab::Search,
                on_change: move |tab| requests.borrow_mut().push(tab),
                reservation_count: 3,
            }
        }
    }

    #[test]
    fn clicking_a_tab_reports_it_once() {
        let requests = Requests::default();
        let mut clicker = Clicker::mount(owned_by, requests.clone());
        assert_eq!(clicker.targets(), ReservationTab::all().len());

        clicker.click(1);

        assert_eq!(*requests.borrow(), [ReservationTab::MyReservations]);
    }

    #[test]
    fn selection_stays_with_the_owner() {
        let requests = Requests::default();
        let mut clicker = Clicker::mount(owned_by, requests.clone());

        clicker.click(1);

        let html = clicker.html();
        let marked = html
            .split("<button")
            .find(|button| button.contains("tab-switch__tab--active"))
            .unwrap();
        assert!(marked.contains("data-tab=\"search\""));
        assert_eq!(active_tabs(&html), 1);
    }

    #[test]
    fn clicking_the_active_tab_still_reports_it() {
        let requests = Requests::default();
        let mut clicker = Clicker::mount(owned_by, requests.clone());

        clicker.click(0);

        assert_eq!(*requests.borrow(), [ReservationTab::Search]);
    }
}
