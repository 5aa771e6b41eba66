//! Tracker directives and their script serialization.
//!
//! A directive is one `_paq.push([...])` command consumed by the collector's
//! bootstrap script. [`Directives::from_settings`] decides which directives
//! exist; [`Directives::render`] is the only place that produces script text.

use std::fmt::Write;

use super::TrackerSettings;
use crate::utils::js;

/// Command queue initialization. Reuses a queue left by an earlier snippet.
pub const QUEUE_INIT: &str = "var _paq = window._paq = window._paq || [];";

/// One queued tracker command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    SetDocumentTitle,
    SetCookieDomain(String),
    /// Open question upstream: a single configured domain, wrapped in a list.
    SetDomains(Vec<String>),
    SetCampaignNameKey(String),
    SetCampaignKeywordKey(String),
    SetDoNotTrack(bool),
    DisableCookies,
    TrackPageView,
    EnableLinkTracking,
}

/// Directive argument, serialized as a JS expression.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Arg<'a> {
    Str(&'a str),
    Bool(bool),
    List(&'a [String]),
    /// Trusted JS evaluated in the browser.
    Expr(&'static str),
}

impl Directive {
    /// Tracker method name.
    pub const fn method(&self) -> &'static str {
        match self {
            Self::SetDocumentTitle => "setDocumentTitle",
            Self::SetCookieDomain(_) => "setCookieDomain",
            Self::SetDomains(_) => "setDomains",
            Self::SetCampaignNameKey(_) => "setCampaignNameKey",
            Self::SetCampaignKeywordKey(_) => "setCampaignKeywordKey",
            Self::SetDoNotTrack(_) => "setDoNotTrack",
            Self::DisableCookies => "disableCookies",
            Self::TrackPageView => "trackPageView",
            Self::EnableLinkTracking => "enableLinkTracking",
        }
    }

    fn args(&self) -> Vec<Arg<'_>> {
        match self {
            Self::SetDocumentTitle => vec![Arg::Expr(r#"document.domain + "/" + document.title"#)],
            Self::SetCookieDomain(v) | Self::SetCampaignNameKey(v) | Self::SetCampaignKeywordKey(v) => {
                vec![Arg::Str(v)]
            }
            Self::SetDomains(domains) => vec![Arg::List(domains)],
            Self::SetDoNotTrack(v) => vec![Arg::Bool(*v)],
            Self::DisableCookies | Self::TrackPageView | Self::EnableLinkTracking => Vec::new(),
        }
    }

    /// `_paq.push(["method", args...]);`
    pub fn render(&self) -> String {
        let mut out = String::from("_paq.push([");
        out.push_str(&js::double_quoted(self.method()));
        for arg in self.args() {
            out.push_str(", ");
            arg.write_to(&mut out);
        }
        out.push_str("]);");
        out
    }
}

impl Arg<'_> {
    fn write_to(&self, out: &mut String) {
        match self {
            Self::Str(s) => out.push_str(&js::double_quoted(s)),
            Self::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            Self::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&js::double_quoted(item));
                }
                out.push(']');
            }
            Self::Expr(expr) => out.push_str(expr),
        }
    }
}

/// Ordered directive list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives(Vec<Directive>);

impl Directives {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, directive: Directive) -> &mut Self {
        self.0.push(directive);
        self
    }

    /// Push only when the gating value is present.
    pub fn push_if<T>(&mut self, gate: Option<T>, build: impl FnOnce(T) -> Directive) -> &mut Self {
        if let Some(value) = gate {
            self.0.push(build(value));
        }
        self
    }

    /// Directives for the settings, in the order the tracker expects them.
    pub fn from_settings(settings: &TrackerSettings) -> Self {
        let mut list = Self::new();
        list.push(Directive::SetDocumentTitle)
            .push_if(settings.cookie_domain.clone(), Directive::SetCookieDomain)
            .push_if(settings.domains.clone(), |d| Directive::SetDomains(vec![d]))
            .push_if(settings.campaign_name_key.clone(), Directive::SetCampaignNameKey)
            .push_if(
                settings.campaign_keyword_key.clone(),
                Directive::SetCampaignKeywordKey,
            )
            .push_if(settings.do_not_track, Directive::SetDoNotTrack)
            .push_if(settings.disable_cookies.then_some(()), |()| {
                Directive::DisableCookies
            })
            .push(Directive::TrackPageView)
            .push(Directive::EnableLinkTracking);
        list
    }

    pub fn as_slice(&self) -> &[Directive] {
        &self.0
    }

    /// One rendered directive per line, each line `\n`-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for directive in &self.0 {
            out.push_str(&directive.render());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> TrackerSettings {
        TrackerSettings {
            collector_url: "https://m.example.org/".into(),
            site_id: "2".into(),
            script_path: "matomo.js".into(),
            endpoint_path: "matomo.php".into(),
            cookie_domain: None,
            domains: None,
            campaign_name_key: None,
            campaign_keyword_key: None,
            do_not_track: None,
            disable_cookies: false,
        }
    }

    fn methods(list: &Directives) -> Vec<&'static str> {
        list.as_slice().iter().map(Directive::method).collect()
    }

    #[test]
    fn test_minimal_directives() {
        let list = Directives::from_settings(&settings());
        assert_eq!(
            methods(&list),
            ["setDocumentTitle", "trackPageView", "enableLinkTracking"]
        );
    }

    #[test]
    fn test_all_optional_directives_in_order() {
        let settings = TrackerSettings {
            cookie_domain: Some("*.example.org".into()),
            domains: Some("docs.example.org".into()),
            campaign_name_key: Some("cn".into()),
            campaign_keyword_key: Some("ck".into()),
            do_not_track: Some(true),
            disable_cookies: true,
            ..settings()
        };
        let list = Directives::from_settings(&settings);
        assert_eq!(
            methods(&list),
            [
                "setDocumentTitle",
                "setCookieDomain",
                "setDomains",
                "setCampaignNameKey",
                "setCampaignKeywordKey",
                "setDoNotTrack",
                "disableCookies",
                "trackPageView",
                "enableLinkTracking",
            ]
        );
    }

    #[test]
    fn test_render_directives() {
        assert_eq!(
            Directive::DisableCookies.render(),
            r#"_paq.push(["disableCookies"]);"#
        );
        assert_eq!(
            Directive::SetCookieDomain("*.example.org".into()).render(),
            r#"_paq.push(["setCookieDomain", "*.example.org"]);"#
        );
        assert_eq!(
            Directive::SetDomains(vec!["docs.example.org".into()]).render(),
            r#"_paq.push(["setDomains", ["docs.example.org"]]);"#
        );
        assert_eq!(
            Directive::SetDoNotTrack(true).render(),
            r#"_paq.push(["setDoNotTrack", true]);"#
        );
        assert_eq!(
            Directive::SetDocumentTitle.render(),
            r#"_paq.push(["setDocumentTitle", document.domain + "/" + document.title]);"#
        );
    }

    #[test]
    fn test_configured_values_cannot_escape_literal() {
        let rendered = Directive::SetCampaignNameKey("\"]);alert(1);//</script>".into()).render();
        assert_eq!(
            rendered,
            r#"_paq.push(["setCampaignNameKey", "\"]);alert(1);//<\/script>"]);"#
        );
    }

    #[test]
    fn test_do_not_track_false_is_still_emitted() {
        let settings = TrackerSettings {
            do_not_track: Some(false),
            ..settings()
        };
        let rendered = Directives::from_settings(&settings).render();
        assert!(rendered.contains(r#"_paq.push(["setDoNotTrack", false]);"#));
    }

    #[test]
    fn test_render_lines() {
        let rendered = Directives::from_settings(&settings()).render();
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.ends_with("_paq.push([\"enableLinkTracking\"]);\n"));
    }
}
