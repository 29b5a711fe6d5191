use serde::{Deserialize, Serialize};

/// Badge colors a card may carry. Anything unrecognized renders gray.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum BadgeColor {
    Blue,
    Green,
    Yellow,
    Red,
    Purple,
    #[default]
    Gray,
}

impl BadgeColor {
    pub const ALL: [BadgeColor; 6] = [
        BadgeColor::Blue,
        BadgeColor::Green,
        BadgeColor::Yellow,
        BadgeColor::Red,
        BadgeColor::Purple,
        BadgeColor::Gray,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::Blue => "blue",
            BadgeColor::Green => "green",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Red => "red",
            BadgeColor::Purple => "purple",
            BadgeColor::Gray => "gray",
        }
    }

    /// Modifier class, e.g. `badge--green`.
    pub fn class(&self) -> String {
        format!("badge--{}", self.as_str())
    }
}

impl From<&str> for BadgeColor {
    fn from(value: &str) -> Self {
        BadgeColor::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or_default()
    }
}

impl From<String> for BadgeColor {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl std::fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual emphasis of a card. Anything unrecognized renders as `Default`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Variant {
    #[default]
    Default,
    Primary,
    Secondary,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Default, Variant::Primary, Variant::Secondary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
        }
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or_default()
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}
