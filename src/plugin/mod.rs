//! Analytics tag-injection plugin.
//!
//! Registration validates `[analytics]` exactly once and synthesizes the
//! head fragments for the whole build. After that the plugin is read-only
//! and can be shared across page workers without locking.
//!
//! ```text
//! SiteConfig ──register──► TrackerSettings ──► Directives ──► inline <script>
//!                                 │                               │
//!                                 └──► preconnect <link> ─────────┴──► head_tags()
//! ```

mod directive;
mod error;
mod module;
mod settings;
mod tag;

pub use directive::{Directives, QUEUE_INIT};
pub use error::PluginError;
pub use module::{ClientModule, TRACKER};
pub use settings::TrackerSettings;
pub use tag::{HeadTag, render_all};

use crate::config::SiteConfig;
use crate::core::BuildMode;
use crate::debug;
use crate::embed::client::{BOOTSTRAP_JS, BootstrapVars};
use crate::utils::js;

/// Registered analytics plugin.
#[derive(Debug, Clone)]
pub struct AnalyticsPlugin {
    settings: TrackerSettings,
    head_tags: Vec<HeadTag>,
}

impl AnalyticsPlugin {
    pub const NAME: &'static str = "sitetag-analytics";

    /// Validate `[analytics]` and synthesize the head fragments.
    pub fn register(config: &SiteConfig) -> Result<Self, PluginError> {
        let settings = TrackerSettings::from_config(config.analytics.as_ref())?;
        let head_tags = synthesize(&settings);
        debug!("plugin"; "{} registered for site {}", Self::NAME, settings.site_id);
        Ok(Self {
            settings,
            head_tags,
        })
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    /// Modules to load on every page: the tracker in release mode, nothing otherwise.
    pub fn client_modules(&self, mode: BuildMode) -> Vec<ClientModule> {
        if mode.release { vec![TRACKER] } else { Vec::new() }
    }

    /// Head fragments, computed once at registration.
    pub fn head_tags(&self) -> &[HeadTag] {
        &self.head_tags
    }
}

/// Preconnect hint followed by the inline tracker script.
fn synthesize(settings: &TrackerSettings) -> Vec<HeadTag> {
    vec![
        HeadTag::preconnect(&settings.collector_url),
        HeadTag::inline_script(inline_script(settings)),
    ]
}

fn inline_script(settings: &TrackerSettings) -> String {
    let bootstrap = BOOTSTRAP_JS.render(&BootstrapVars {
        collector_url: js::double_quoted(&settings.collector_url),
        endpoint_path: js::double_quoted(&settings.endpoint_path),
        site_id: js::single_quoted(&settings.site_id),
        script_path: js::double_quoted(&settings.script_path),
    });

    let mut script = String::from("\n");
    script.push_str(QUEUE_INIT);
    script.push('\n');
    script.push_str(&Directives::from_settings(settings).render());
    script.push_str(&bootstrap);
    script
}
