//! Validated tracker settings.

use super::PluginError;
use crate::config::{AnalyticsConfig, FieldPath};

/// `[analytics]` after registration-time validation.
///
/// Required values are guaranteed non-empty; optional values are `None`
/// when absent (or empty) and never replaced by an implicit default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    pub collector_url: String,
    pub site_id: String,
    pub script_path: String,
    pub endpoint_path: String,
    pub cookie_domain: Option<String>,
    pub domains: Option<String>,
    pub campaign_name_key: Option<String>,
    pub campaign_keyword_key: Option<String>,
    pub do_not_track: Option<bool>,
    pub disable_cookies: bool,
}

impl TrackerSettings {
    /// Validate the raw section.
    ///
    /// Required keys are checked in declaration order and the first missing
    /// one is reported.
    pub fn from_config(raw: Option<&AnalyticsConfig>) -> Result<Self, PluginError> {
        let raw = raw.ok_or(PluginError::ConfigurationMissing)?;
        let fields = AnalyticsConfig::FIELDS;

        Ok(Self {
            collector_url: required(&raw.collector_url, fields.collector_url)?,
            site_id: required(&raw.site_id, fields.site_id)?,
            script_path: required(&raw.script_path, fields.script_path)?,
            endpoint_path: required(&raw.endpoint_path, fields.endpoint_path)?,
            cookie_domain: optional(&raw.cookie_domain),
            domains: optional(&raw.domains),
            campaign_name_key: optional(&raw.campaign_name_key),
            campaign_keyword_key: optional(&raw.campaign_keyword_key),
            do_not_track: raw.do_not_track,
            disable_cookies: raw.disable_cookies.unwrap_or(false),
        })
    }
}

fn required(value: &Option<String>, field: FieldPath) -> Result<String, PluginError> {
    optional(value).ok_or(PluginError::RequiredFieldMissing(field))
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
