use dioxus::prelude::*;
use types::{
    ClubStats, MemberSummary, PartnerStats, PlayerProfile, RecentSession, SiteSettings,
    StateProfile,
};

#[post("/api/site")]
pub async fn site_settings() -> ServerFnResult<SiteSettings> {
    Ok(server::config()?.site_settings())
}

#[post("/api/player/profile")]
pub async fn player_profile() -> ServerFnResult<Option<PlayerProfile>> {
    Ok(server::roster()?.player.clone())
}

#[post("/api/state/profile")]
pub async fn state_profile() -> ServerFnResult<Option<StateProfile>> {
    Ok(server::roster()?.state.clone())
}

#[post("/api/state/featured-players")]
pub async fn featured_players() -> ServerFnResult<Vec<MemberSummary>> {
    Ok(server::roster()?.featured_players.clone())
}

/// Every session, newest first. The dashboard decides how many to show.
#[post("/api/coach/sessions")]
pub async fn coach_sessions() -> ServerFnResult<Vec<RecentSession>> {
    Ok(server::roster()?.recent_sessions())
}

#[post("/api/club/stats")]
pub async fn club_stats() -> ServerFnResult<ClubStats> {
    Ok(server::roster()?.club.clone())
}

#[post("/api/partner/stats")]
pub async fn partner_stats() -> ServerFnResult<PartnerStats> {
    Ok(server::roster()?.partner.clone())
}

#[post("/api/reservations/count")]
pub async fn reservation_count() -> ServerFnResult<u32> {
    Ok(server::roster()?.reservations)
}
