use serde::{Deserialize, Serialize};

use crate::Locale;

/// Public site settings sent to every client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub federation_name: String,
    pub locale: Locale,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            federation_name: "Federación Nacional".to_string(),
            locale: Locale::default(),
        }
    }
}
