//! Embedded static resources.
//!
//! - `template` - Template types for typed variable injection
//! - `client` - Browser-side tracking code (bootstrap initializer, route tracker)
//!
//! `track.js` is minified by `build.rs`; the bootstrap initializer is kept
//! verbatim because it is rendered into every page's inline script.

mod template;

pub use template::{Template, TemplateVars};

pub mod client {
    use std::borrow::Cow;

    use super::{Template, TemplateVars};

    /// Variables for bootstrap.js. Values are complete JS literals.
    pub struct BootstrapVars {
        pub collector_url: String,
        pub endpoint_path: String,
        pub site_id: String,
        pub script_path: String,
    }

    impl TemplateVars for BootstrapVars {
        fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
            let value = match name {
                "COLLECTOR_URL" => &self.collector_url,
                "ENDPOINT_PATH" => &self.endpoint_path,
                "SITE_ID" => &self.site_id,
                "SCRIPT_PATH" => &self.script_path,
                _ => return None,
            };
            Some(Cow::Borrowed(value.as_str()))
        }
    }

    /// Self-invoking initializer that registers the collector and loads its script.
    pub const BOOTSTRAP_JS: Template<BootstrapVars> =
        Template::new(include_str!("client/bootstrap.js"));

    /// Route-change tracker, loaded as a client module in release builds.
    pub const TRACK_JS: &str = include_str!(concat!(env!("OUT_DIR"), "/track.min.js"));
}

#[cfg(test)]
mod tests {
    use super::client::*;

    #[test]
    fn test_bootstrap_render() {
        let js = BOOTSTRAP_JS.render(&BootstrapVars {
            collector_url: "\"https://m.example.org/\"".into(),
            endpoint_path: "\"matomo.php\"".into(),
            site_id: "'2'".into(),
            script_path: "\"matomo.js\"".into(),
        });
        assert!(js.contains(r#"var u="https://m.example.org/";"#));
        assert!(js.contains(r#"_paq.push(['setTrackerUrl', u+"matomo.php"]);"#));
        assert!(js.contains("_paq.push(['setSiteId', '2']);"));
        assert!(js.contains(r#"g.src=u+"matomo.js"; s.parentNode.insertBefore(g,s);"#));
        assert!(!js.contains("__"));
    }

    #[test]
    fn test_track_module_embedded() {
        assert!(!TRACK_JS.is_empty());
        assert!(TRACK_JS.contains("_paq"));
    }
}
