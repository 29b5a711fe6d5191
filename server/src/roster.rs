use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use jiff::civil::Date;
use serde::Deserialize;
use types::{
    ClubStats, MemberSummary, PartnerStats, PlayerProfile, RecentSession, Result, StateProfile,
};
use uuid::Uuid;

/// Demo data served to the dashboards, read from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Roster {
    pub player: Option<PlayerProfile>,
    pub state: Option<StateProfile>,
    pub featured_players: Vec<MemberSummary>,
    pub sessions: Vec<SessionRecord>,
    pub club: ClubStats,
    pub partner: PartnerStats,
    pub reservations: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub student_name: String,
    pub session_type: String,
    pub date: Date,
    pub rating: f32,
}

impl SessionRecord {
    fn to_display(&self) -> RecentSession {
        RecentSession {
            id: self.id,
            student_name: self.student_name.clone(),
            session_type: self.session_type.clone(),
            date: self.date.strftime("%b %d, %Y").to_string(),
            rating: self.rating,
        }
    }
}

impl Roster {
    /// Load a roster. A missing file yields an empty roster.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "roster file not found, serving an empty roster");
                return Ok(Self::default());
            }
            Err(error) => {
                return Err(anyhow::Error::from(error)
                    .context(format!("failed to read {}", path.display()))
                    .into());
            }
        };

        let roster: Roster = toml::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            sessions = roster.sessions.len(),
            featured_players = roster.featured_players.len(),
            has_player = roster.player.is_some(),
            has_state = roster.state.is_some(),
            "roster loaded"
        );

        Ok(roster)
    }

    /// All sessions, newest first. Capping is left to the view.
    pub fn recent_sessions(&self) -> Vec<RecentSession> {
        let mut sessions: Vec<&SessionRecord> = self.sessions.iter().collect();
        sessions.sort_by(|a, b| b.date.cmp(&a.date));
        sessions.into_iter().map(SessionRecord::to_display).collect()
    }
}
