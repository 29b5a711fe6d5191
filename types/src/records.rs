use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::BadgeColor;

/// An entry in a role's quick-action catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    /// Unique within a catalog; used as the render key.
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub destination: &'static str,
}

/// A coaching session as shown on the coach dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSession {
    pub id: Uuid,
    pub student_name: String,
    pub session_type: String,
    /// Already formatted for display.
    pub date: String,
    pub rating: f32,
}

impl RecentSession {
    pub fn rating_label(&self) -> String {
        format!("★ {:.1}", self.rating)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub club_name: String,
    pub state: String,
    pub category: String,
    pub member_number: String,
    #[serde(default)]
    pub photo_url: Option<Url>,
    #[serde(default)]
    pub membership_badge: Option<String>,
    #[serde(default)]
    pub badge_color: BadgeColor,
}

/// A state committee affiliated with the federation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateProfile {
    pub committee_name: String,
    pub president_name: String,
    pub state: String,
    pub affiliated_clubs: u64,
    pub registered_players: u64,
    #[serde(default)]
    pub logo_url: Option<Url>,
}

/// One row of a people list, e.g. featured players of a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub name: String,
    pub detail: String,
    #[serde(default)]
    pub photo_url: Option<Url>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub badge_color: BadgeColor,
}

/// The value shown on a stats card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(u64),
    Text(String),
}

impl From<u64> for StatValue {
    fn from(value: u64) -> Self {
        StatValue::Number(value)
    }
}

impl From<u32> for StatValue {
    fn from(value: u32) -> Self {
        StatValue::Number(value.into())
    }
}

impl From<String> for StatValue {
    fn from(value: String) -> Self {
        StatValue::Text(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

/// Club-level counters for the club dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClubStats {
    pub members: u64,
    pub courts: u64,
    pub tournaments: u64,
    pub coaches: u64,
}

/// Counters for a partner venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnerStats {
    pub courts: u64,
    pub bookings_this_month: u64,
    /// Free-form, e.g. "4.8 / 5".
    #[serde(default)]
    pub rating: Option<String>,
}
