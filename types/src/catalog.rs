//! Role-specific quick-action catalogs.
//!
//! Order here is display order.

use crate::QuickAction;

pub const CLUB_QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        title: "Members",
        description: "Review memberships and renewals",
        icon: "👥",
        destination: "/club/members",
    },
    QuickAction {
        title: "Tournaments",
        description: "Register and manage club tournaments",
        icon: "🏆",
        destination: "/club/tournaments",
    },
    QuickAction {
        title: "Courts",
        description: "Update court availability",
        icon: "🎾",
        destination: "/club/courts",
    },
    QuickAction {
        title: "Coaches",
        description: "Certified coaches at your club",
        icon: "🧑‍🏫",
        destination: "/club/coaches",
    },
    QuickAction {
        title: "Reports",
        description: "Activity and affiliation reports",
        icon: "📊",
        destination: "/club/reports",
    },
    QuickAction {
        title: "Club Profile",
        description: "Edit contact details and branding",
        icon: "⚙️",
        destination: "/club/profile",
    },
];

pub const PARTNER_QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        title: "Courts",
        description: "Manage courts and opening hours",
        icon: "🎾",
        destination: "/partner/courts",
    },
    QuickAction {
        title: "Bookings",
        description: "See upcoming reservations",
        icon: "📅",
        destination: "/partner/bookings",
    },
    QuickAction {
        title: "Promotions",
        description: "Publish offers for federation members",
        icon: "📣",
        destination: "/partner/promotions",
    },
    QuickAction {
        title: "Venue Profile",
        description: "Edit address, photos and amenities",
        icon: "🏢",
        destination: "/partner/profile",
    },
];
