//! `sitetag check`, `sitetag tags` and `sitetag modules`.
//!
//! Command output goes to stdout; status lines go through the logger.

use anyhow::Result;
use std::io::{Write, stdout};

use super::TagFormat;
use crate::config::SiteConfig;
use crate::core::BuildMode;
use crate::log;
use crate::pipeline::page_tags;
use crate::plugin::{AnalyticsPlugin, ClientModule, HeadTag, render_all};

/// Report a successful registration.
pub fn check(config: &SiteConfig, plugin: &AnalyticsPlugin) -> Result<()> {
    let settings = plugin.settings();
    log!(
        "check";
        "{} ok: site {} on {}",
        config.root_relative(&config.config_path).display(),
        settings.site_id,
        settings.collector_url
    );
    Ok(())
}

/// Print the tags every page receives in `mode`, as `inject` writes them.
pub fn tags(
    config: &SiteConfig,
    plugin: &AnalyticsPlugin,
    format: TagFormat,
    mode: BuildMode,
) -> Result<()> {
    let rendered = format_tags(&page_tags(config, plugin, mode), format)?;
    let mut out = stdout().lock();
    writeln!(out, "{rendered}")?;
    Ok(())
}

/// Print the client modules for `mode`, one name per line.
pub fn modules(plugin: &AnalyticsPlugin, mode: BuildMode) -> Result<()> {
    let modules = plugin.client_modules(mode);
    if modules.is_empty() {
        log!("modules"; "none in {} mode", mode.label());
        return Ok(());
    }

    let mut out = stdout().lock();
    write!(out, "{}", format_modules(&modules))?;
    Ok(())
}

fn format_tags(tags: &[HeadTag], format: TagFormat) -> Result<String> {
    Ok(match format {
        TagFormat::Html => render_all(tags),
        TagFormat::Json => serde_json::to_string_pretty(tags)?,
    })
}

fn format_modules(modules: &[ClientModule]) -> String {
    modules.iter().map(|m| format!("{}\n", m.name)).collect()
}
