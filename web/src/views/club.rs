use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use types::{BadgeColor, ClubStats, StatValue};
use ui::{ClubQuickActions, DashboardHeader, StatsCard, use_navigation};

use super::components::{LoadError, error_message};
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClubSection {
    Members,
    Tournaments,
    Courts,
    Coaches,
    Reports,
    Profile,
}

impl ClubSection {
    const ALL: [ClubSection; 6] = [
        ClubSection::Members,
        ClubSection::Tournaments,
        ClubSection::Courts,
        ClubSection::Coaches,
        ClubSection::Reports,
        ClubSection::Profile,
    ];

    fn slug(&self) -> &'static str {
        match self {
            ClubSection::Members => "members",
            ClubSection::Tournaments => "tournaments",
            ClubSection::Courts => "courts",
            ClubSection::Coaches => "coaches",
            ClubSection::Reports => "reports",
            ClubSection::Profile => "profile",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ClubSection::Members => "Members",
            ClubSection::Tournaments => "Tournaments",
            ClubSection::Courts => "Courts",
            ClubSection::Coaches => "Coaches",
            ClubSection::Reports => "Reports",
            ClubSection::Profile => "Club profile",
        }
    }
}

impl FromStr for ClubSection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ClubSection::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| format!("unknown club section: {s}"))
    }
}

impl fmt::Display for ClubSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[component]
pub fn ClubDashboard() -> Element {
    let nav = use_navigation();
    let stats = use_server_future(api::club_stats)?;

    let (stats, error) = match &*stats.read() {
        Some(Ok(stats)) => (stats.clone(), None),
        Some(Err(error)) => (ClubStats::default(), Some(error_message(error))),
        None => (ClubStats::default(), None),
    };
    let members_path = Route::ClubSectionPage { section: ClubSection::Members }.to_string();

    rsx! {
        div {
            DashboardHeader {
                title: "Club dashboard",
                subtitle: Some("Your club at a glance".to_string()),
                span { class: "badge badge--blue", "Club admin" }
            }
            if let Some(error) = error {
                LoadError { error }
            }
            div { class: "stats-grid",
                StatsCard {
                    title: "Members",
                    value: StatValue::Number(stats.members),
                    icon: "👥",
                    color: BadgeColor::Blue,
                    on_activate: move |_| nav.request(&members_path),
                }
                StatsCard {
                    title: "Courts",
                    value: StatValue::Number(stats.courts),
                    icon: "🎾",
                    color: BadgeColor::Green,
                }
                StatsCard {
                    title: "Tournaments",
                    value: StatValue::Number(stats.tournaments),
                    icon: "🏆",
                    color: BadgeColor::Yellow,
                }
                StatsCard {
                    title: "Coaches",
                    value: StatValue::Number(stats.coaches),
                    icon: "🧑‍🏫",
                    color: BadgeColor::Purple,
                }
            }
            ClubQuickActions {}
        }
    }
}

#[component]
pub fn ClubSectionPage(section: ClubSection) -> Element {
    rsx! {
        DashboardHeader {
            title: section.title().to_string(),
            subtitle: Some("This section is on its way.".to_string()),
            Link { to: Route::ClubDashboard {}, class: "btn btn-secondary", "Back to dashboard" }
        }
    }
}
