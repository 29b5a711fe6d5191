pub mod catalog;
mod error;
mod locale;
pub mod paths;
mod records;
mod site;
mod style;
mod tabs;

pub use error::{Error, Result};
pub use locale::Locale;
pub use records::{
    ClubStats, MemberSummary, PartnerStats, PlayerProfile, QuickAction, RecentSession, StatValue,
    StateProfile,
};
pub use site::SiteSettings;
pub use style::{BadgeColor, Variant};
pub use tabs::{ReservationTab, TabSet};

/// Most recent sessions shown on the coach dashboard.
pub const RECENT_SESSIONS_CAP: usize = 4;

// Lets `err!` expand in crates that don't depend on anyhow.
#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
