use dioxus::prelude::*;
use types::SiteSettings;
use ui::{Navigate, Navigation, use_navigation_provider};

mod views;

use views::{
    About, ClubDashboard, ClubSection, ClubSectionPage, CoachDashboard, CoachSessions, Contact,
    CourtReservations, Join, PartnerDashboard, PartnerSection, PartnerSectionPage,
    PlayerDashboard, StateDashboard,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PortalLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/join")]
        Join {},
        #[route("/contact")]
        Contact {},
        #[route("/player")]
        PlayerDashboard {},
        #[route("/state")]
        StateDashboard {},
        #[route("/club")]
        ClubDashboard {},
        #[route("/club/:section")]
        ClubSectionPage { section: ClubSection },
        #[route("/partner")]
        PartnerDashboard {},
        #[route("/partner/:section")]
        PartnerSectionPage { section: PartnerSection },
        #[route("/coach")]
        CoachDashboard {},
        #[route("/coach/sessions")]
        CoachSessions {},
        #[route("/court-reservations")]
        CourtReservations {},
}

#[component]
fn Home() -> Element {
    rsx! { About {} }
}

fn main() {
    #[cfg(feature = "server")]
    {
        if let Err(error) = server::init() {
            eprintln!("failed to start: {error}");
            std::process::exit(1);
        }
        dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Federation Portal" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// Turns component navigation requests into router pushes.
struct RouterNavigate;

impl Navigate for RouterNavigate {
    fn navigate(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                navigator().push(route);
            }
            Err(error) => tracing::warn!(path, %error, "ignoring navigation to unknown path"),
        }
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = matches!(
        (&current_route, &to),
        (Route::Home {} | Route::About {}, Route::About {})
            | (Route::PlayerDashboard {}, Route::PlayerDashboard {})
            | (Route::StateDashboard {}, Route::StateDashboard {})
            | (Route::ClubDashboard {} | Route::ClubSectionPage { .. }, Route::ClubDashboard {})
            | (Route::PartnerDashboard {} | Route::PartnerSectionPage { .. }, Route::PartnerDashboard {})
            | (Route::CoachDashboard {} | Route::CoachSessions {}, Route::CoachDashboard {})
            | (Route::CourtReservations {}, Route::CourtReservations {})
    );

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

#[component]
fn PortalLayout() -> Element {
    use_navigation_provider(|| Navigation::new(RouterNavigate));
    let settings = use_server_future(api::site_settings)?;

    let site = match &*settings.read() {
        Some(Ok(site)) => site.clone(),
        Some(Err(error)) => {
            tracing::warn!(%error, "failed to load site settings, using defaults");
            SiteSettings::default()
        }
        None => SiteSettings::default(),
    };
    use_context_provider(|| site.locale);

    rsx! {
        div { class: "app-layout",
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "{site.federation_name}" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::About {}, "About" }
                    NavLink { to: Route::PlayerDashboard {}, "Player" }
                    NavLink { to: Route::StateDashboard {}, "State committee" }
                    NavLink { to: Route::ClubDashboard {}, "Club" }
                    NavLink { to: Route::PartnerDashboard {}, "Partner" }
                    NavLink { to: Route::CoachDashboard {}, "Coach" }
                    NavLink { to: Route::CourtReservations {}, "Court reservations" }
                }
            }
            main { class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
