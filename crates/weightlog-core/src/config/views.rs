//! Page rendering configuration.

use serde::{Deserialize, Serialize};

/// Settings for the HTML renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewsConfig {
    /// Title shown in the page header and `<title>`.
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

fn default_title() -> String {
    "Berat".to_string()
}
