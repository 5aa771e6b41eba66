//! Page post-processing: merge the plugin's output into a generated site.
//!
//! ```text
//! AnalyticsPlugin ──head_tags()──────────┐
//!        │                               ├──► HeadInjector ──► pages (rayon)
//!        └──client_modules(mode)──► write ┘
//! ```

mod head;
mod scan;

use head::{HeadInjector, Injection};
use scan::collect_pages;

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::core::BuildMode;
use crate::plugin::{AnalyticsPlugin, ClientModule, HeadTag};
use crate::utils::path::to_url_path;
use crate::{debug, log};

/// Per-run counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectReport {
    pub injected: usize,
    pub unchanged: usize,
    /// Pages without `</head>`.
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
    /// Client modules written to the output directory.
    pub modules: Vec<PathBuf>,
}

impl InjectReport {
    pub fn total(&self) -> usize {
        self.injected + self.unchanged + self.skipped.len() + self.failed.len()
    }
}

/// Inject head tags (and, in release mode, client modules) into every page
/// of the configured output directory.
pub fn inject_site(
    config: &SiteConfig,
    plugin: &AnalyticsPlugin,
    mode: BuildMode,
) -> Result<InjectReport> {
    let output = &config.build.output;
    if !output.is_dir() {
        bail!(
            "output directory '{}' does not exist, build the site first",
            output.display()
        );
    }

    let mut report = InjectReport::default();

    for module in plugin.client_modules(mode) {
        let path = write_module(config, &module)?;
        debug!("inject"; "wrote module {} to {}", module.name, path.display());
        report.modules.push(path);
    }

    let injector = HeadInjector::new(&page_tags(config, plugin, mode));
    let pages = collect_pages(output, &config.module_dir());
    debug!("inject"; "found {} pages in {}", pages.len(), output.display());

    let outcomes: Vec<_> = pages
        .par_iter()
        .map(|page| (page, inject_page(&injector, page)))
        .collect();

    for (page, outcome) in outcomes {
        match outcome {
            Ok(Injection::Injected(_)) => report.injected += 1,
            Ok(Injection::Unchanged) => report.unchanged += 1,
            Ok(Injection::NoHead) => report.skipped.push(page.clone()),
            Err(e) => report.failed.push((page.clone(), format!("{e:#}"))),
        }
    }

    for (page, error) in &report.failed {
        log!("error"; "{}: {}", config.root_relative(page).display(), error);
    }

    Ok(report)
}

/// Rewrite one page in place.
fn inject_page(injector: &HeadInjector, page: &Path) -> Result<Injection> {
    let html = fs::read_to_string(page)
        .with_context(|| format!("failed to read '{}'", page.display()))?;
    let outcome = injector.inject(&html);
    if let Injection::Injected(content) = &outcome {
        fs::write(page, content)
            .with_context(|| format!("failed to write '{}'", page.display()))?;
    }
    Ok(outcome)
}

/// Every tag a page receives: the plugin's head tags, then one deferred
/// script per client module.
pub fn page_tags(config: &SiteConfig, plugin: &AnalyticsPlugin, mode: BuildMode) -> Vec<HeadTag> {
    let mut tags = plugin.head_tags().to_vec();
    tags.extend(
        plugin
            .client_modules(mode)
            .iter()
            .map(|module| HeadTag::deferred_script(&module_src(config, module))),
    );
    tags
}

/// URL of a client module, below the site's base path.
fn module_src(config: &SiteConfig, module: &ClientModule) -> String {
    let path = to_url_path(&config.build.module_dir.join(module.file_name));
    format!("{}{path}", config.site.base_path())
}

/// Write a client module below the output directory.
fn write_module(config: &SiteConfig, module: &ClientModule) -> Result<PathBuf> {
    let dir = config.module_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create '{}'", dir.display()))?;

    let path = dir.join(module.file_name);
    fs::write(&path, module.source)
        .with_context(|| format!("failed to write module '{}'", module.name))?;
    Ok(path)
}
