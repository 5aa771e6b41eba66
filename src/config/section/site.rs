//! `[site]` section configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Where the generated site is served.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Public site URL (e.g., "https://example.org/docs/").
    /// Its path prefixes the URLs of client modules.
    pub url: Option<String>,
}

impl SiteSectionConfig {
    /// `url`, when set, must be an absolute http(s) URL.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }

    /// Path the site is served under, without trailing slash.
    ///
    /// `https://example.org/docs/` -> `/docs`, root or unset -> empty.
    pub fn base_path(&self) -> String {
        self.url
            .as_deref()
            .and_then(|url| url::Url::parse(url).ok())
            .map(|url| url.path().trim_end_matches('/').to_owned())
            .unwrap_or_default()
    }
}
