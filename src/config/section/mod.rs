//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitetag.toml`:
//!
//! | Module      | TOML Section    | Purpose                              |
//! |-------------|-----------------|--------------------------------------|
//! | `analytics` | `[analytics]`   | Collector endpoint and tracker flags |
//! | `build`     | `[build]`       | Output directory, release mode       |
//! | `site`      | `[site]`        | Site title, url, language            |

mod analytics;
mod build;
mod site;

pub use analytics::AnalyticsConfig;
pub use build::BuildSectionConfig;
pub use site::SiteSectionConfig;
