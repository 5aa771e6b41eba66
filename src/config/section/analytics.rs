//! `[analytics]` section configuration.
//!
//! Raw, unvalidated collector settings. Every key is optional at the TOML
//! level so that a missing required key can be reported by name when the
//! tracking plugin is registered (see `plugin::TrackerSettings`).
//!
//! # Example
//!
//! ```toml
//! [analytics]
//! collector_url = "https://matomo.example.org/"
//! site_id = "2"
//! script_path = "matomo.js"
//! endpoint_path = "matomo.php"
//! disable_cookies = true
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Collector endpoint and tracker behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "analytics")]
pub struct AnalyticsConfig {
    /// Base URL of the collector, every tracking call targets it.
    #[config(default = "\"https://matomo.example.org/\"")]
    pub collector_url: Option<String>,

    /// Site id known to the collector.
    #[config(default = "\"1\"")]
    pub site_id: Option<String>,

    /// Tracker script, appended to collector_url.
    #[config(default = "\"matomo.js\"")]
    pub script_path: Option<String>,

    /// Beacon endpoint, appended to collector_url.
    #[config(default = "\"matomo.php\"")]
    pub endpoint_path: Option<String>,

    /// Scope tracking cookies to this domain (e.g., "*.example.org").
    pub cookie_domain: Option<String>,

    /// Domain treated as local for outlink tracking.
    pub domains: Option<String>,

    /// Query parameter that carries the campaign name.
    pub campaign_name_key: Option<String>,

    /// Query parameter that carries the campaign keyword.
    pub campaign_keyword_key: Option<String>,

    /// Honor the browser Do-Not-Track setting.
    pub do_not_track: Option<bool>,

    /// Disable all tracking cookies.
    pub disable_cookies: Option<bool>,
}

impl AnalyticsConfig {
    /// Format checks on present values.
    ///
    /// Absent required keys are not reported here, registration owns that.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(collector_url) = self.collector_url.as_deref().map(str::trim) else {
            return;
        };
        if collector_url.is_empty() {
            return;
        }

        match url::Url::parse(collector_url) {
            Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => {
                diag.error_with_hint(
                    Self::FIELDS.collector_url,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://matomo.example.org/",
                );
            }
            Ok(_) => {
                // Paths are appended verbatim in the browser.
                if !collector_url.ends_with('/') {
                    diag.hint(
                        Self::FIELDS.collector_url,
                        format!(
                            "'{collector_url}' has no trailing '/', script and endpoint paths are appended verbatim"
                        ),
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.collector_url,
                    format!("invalid URL: {}", e),
                    "use format like https://matomo.example.org/",
                );
            }
        }
    }
}
