use serde::{Deserialize, Serialize};

/// Display locale. Only affects digit grouping.
///
/// Deserializes from any string; unknown tags become the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Locale {
    #[serde(rename = "en-US")]
    EnUs,
    #[default]
    #[serde(rename = "es-MX")]
    EsMx,
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "fr-FR")]
    FrFr,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::EnUs, Locale::EsMx, Locale::EsEs, Locale::FrFr];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EsMx => "es-MX",
            Locale::EsEs => "es-ES",
            Locale::FrFr => "fr-FR",
        }
    }

    pub fn group_separator(&self) -> char {
        match self {
            Locale::EnUs | Locale::EsMx => ',',
            Locale::EsEs => '.',
            Locale::FrFr => '\u{202F}',
        }
    }

    /// Format `value` with this locale's thousands separator.
    pub fn format_count(&self, value: u64) -> String {
        let digits = value.to_string();
        let separator = self.group_separator();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);

        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(separator);
            }
            out.push(digit);
        }

        out
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(tag.trim()))
            .unwrap_or_default()
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
