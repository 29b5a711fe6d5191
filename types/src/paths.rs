//! Fixed navigation targets used by static sections.

pub const ABOUT: &str = "/about";
pub const JOIN: &str = "/join";
pub const CONTACT: &str = "/contact";
pub const COACH_SESSIONS: &str = "/coach/sessions";

pub const ALL: [&str; 4] = [ABOUT, JOIN, CONTACT, COACH_SESSIONS];
