use serde::{Deserialize, Serialize};

/// A closed set of mutually exclusive tabs.
///
/// The owner holds the active value; tab controls only request changes.
pub trait TabSet: Copy + PartialEq + std::fmt::Debug + 'static {
    /// Every tab, in display order.
    fn all() -> &'static [Self];

    /// Stable key, used for rendering and logging.
    fn key(&self) -> &'static str;

    fn label(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationTab {
    #[default]
    Search,
    MyReservations,
}

impl TabSet for ReservationTab {
    fn all() -> &'static [Self] {
        &[ReservationTab::Search, ReservationTab::MyReservations]
    }

    fn key(&self) -> &'static str {
        match self {
            ReservationTab::Search => "search",
            ReservationTab::MyReservations => "my-reservations",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReservationTab::Search => "Find a court",
            ReservationTab::MyReservations => "My reservations",
        }
    }
}
