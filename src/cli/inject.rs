//! `sitetag inject`: rewrite the generated site in place.

use anyhow::{Result, bail};

use crate::config::SiteConfig;
use crate::core::BuildMode;
use crate::log;
use crate::pipeline::inject_site;
use crate::plugin::AnalyticsPlugin;

pub fn run(config: &SiteConfig, plugin: &AnalyticsPlugin, mode: BuildMode) -> Result<()> {
    log!(
        "inject";
        "{} ({} mode)",
        config.root_relative(&config.build.output).display(),
        mode.label()
    );

    let report = inject_site(config, plugin, mode)?;

    for page in &report.skipped {
        log!("skip"; "no </head> in {}", config.root_relative(page).display());
    }
    for module in &report.modules {
        log!("inject"; "module {}", config.root_relative(module).display());
    }

    log!(
        "inject";
        "{} of {} pages updated, {} already up to date",
        report.injected,
        report.total(),
        report.unchanged
    );

    if !report.failed.is_empty() {
        bail!("{} pages could not be updated", report.failed.len());
    }
    Ok(())
}
