use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use types::{BadgeColor, PartnerStats, StatValue};
use ui::{DashboardHeader, PartnerQuickActions, StatsCard};

use super::components::{LoadError, error_message};
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerSection {
    Courts,
    Bookings,
    Promotions,
    Profile,
}

impl PartnerSection {
    const ALL: [PartnerSection; 4] = [
        PartnerSection::Courts,
        PartnerSection::Bookings,
        PartnerSection::Promotions,
        PartnerSection::Profile,
    ];

    fn slug(&self) -> &'static str {
        match self {
            PartnerSection::Courts => "courts",
            PartnerSection::Bookings => "bookings",
            PartnerSection::Promotions => "promotions",
            PartnerSection::Profile => "profile",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            PartnerSection::Courts => "Courts",
            PartnerSection::Bookings => "Bookings",
            PartnerSection::Promotions => "Promotions",
            PartnerSection::Profile => "Venue profile",
        }
    }
}

impl FromStr for PartnerSection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PartnerSection::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| format!("unknown partner section: {s}"))
    }
}

impl fmt::Display for PartnerSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[component]
pub fn PartnerDashboard() -> Element {
    let stats = use_server_future(api::partner_stats)?;

    let (stats, error) = match &*stats.read() {
        Some(Ok(stats)) => (stats.clone(), None),
        Some(Err(error)) => (PartnerStats::default(), Some(error_message(error))),
        None => (PartnerStats::default(), None),
    };
    let rating = stats.rating.unwrap_or_else(|| "No ratings yet".to_string());

    rsx! {
        div {
            DashboardHeader {
                title: "Partner dashboard",
                subtitle: Some("Courts and bookings at your venue".to_string()),
                span { class: "badge badge--green", "Partner venue" }
            }
            if let Some(error) = error {
                LoadError { error }
            }
            div { class: "stats-grid",
                StatsCard {
                    title: "Courts",
                    value: StatValue::Number(stats.courts),
                    icon: "🎾",
                    color: BadgeColor::Green,
                }
                StatsCard {
                    title: "Bookings this month",
                    value: StatValue::Number(stats.bookings_this_month),
                    icon: "📅",
                    color: BadgeColor::Blue,
                }
                StatsCard {
                    title: "Member rating",
                    value: StatValue::Text(rating),
                    icon: "⭐",
                    color: BadgeColor::Yellow,
                }
            }
            PartnerQuickActions {}
        }
    }
}

#[component]
pub fn PartnerSectionPage(section: PartnerSection) -> Element {
    rsx! {
        DashboardHeader {
            title: section.title().to_string(),
            subtitle: Some("This section is on its way.".to_string()),
            Link { to: Route::PartnerDashboard {}, class: "btn btn-secondary", "Back to dashboard" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for section in PartnerSection::ALL {
            assert_eq!(section.to_string().parse::<PartnerSection>(), Ok(section));
        }
    }
}
