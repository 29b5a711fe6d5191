//! Presentational components for the federation portal.
//!
//! Nothing here fetches or stores data. Pages own the data and pass it in.

mod about;
mod avatar;
mod header;
mod locale;
mod navigation;
mod quick_action_card;
mod quick_actions;
mod recent_sessions;
mod stats_card;
mod tabs;
mod user_card;

#[cfg(test)]
mod test_support;

pub use about::{AboutCta, AboutHero};
pub use avatar::Avatar;
pub use header::{
    DashboardHeader, PLAYER_PLACEHOLDER, PlayerProfileHeader, STATE_PLACEHOLDER,
    StateProfileHeader,
};
pub use locale::use_locale;
pub use navigation::{Navigate, Navigation, use_navigation, use_navigation_provider};
pub use quick_action_card::QuickActionCard;
pub use quick_actions::{ClubQuickActions, PartnerQuickActions, QuickActionGrid};
pub use recent_sessions::CoachRecentSessions;
pub use stats_card::StatsCard;
pub use tabs::{CourtReservationsTabs, TabSwitch};
pub use user_card::UserCard;
