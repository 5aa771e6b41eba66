//! Plugin registration errors.

use thiserror::Error;

use crate::config::FieldPath;

/// Registration failures. Both are fatal: the site must not build.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PluginError {
    /// `[analytics]` is missing from the site configuration.
    #[error("missing `[analytics]` section, set `collector_url` and `site_id` in it")]
    ConfigurationMissing,

    /// A required key is absent or empty.
    #[error("missing required field `{}`", .0.as_str())]
    RequiredFieldMissing(FieldPath),
}

impl PluginError {
    /// The offending field, if the error is about a single field.
    pub const fn field(&self) -> Option<FieldPath> {
        match self {
            Self::ConfigurationMissing => None,
            Self::RequiredFieldMissing(field) => Some(*field),
        }
    }
}
