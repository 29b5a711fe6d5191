mod components;

mod about;
pub use about::{About, Contact, Join};

mod club;
pub use club::{ClubDashboard, ClubSection, ClubSectionPage};

mod coach;
pub use coach::{CoachDashboard, CoachSessions};

mod partner;
pub use partner::{PartnerDashboard, PartnerSection, PartnerSectionPage};

mod player;
pub use player::PlayerDashboard;

mod reservations;
pub use reservations::CourtReservations;

mod state;
pub use state::StateDashboard;
