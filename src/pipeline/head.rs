//! Head content injector (HTML → HTML).
//!
//! The rendered tags are wrapped in marker comments and inserted before the
//! first `</head>` of a page. A page that already carries a marked block gets
//! that block replaced, so re-running with different tags never stacks a
//! second tracker.

use regex::Regex;
use std::sync::LazyLock;

use crate::plugin::{HeadTag, render_all};

const BLOCK_START: &str = "<!-- sitetag:start -->";
const BLOCK_END: &str = "<!-- sitetag:end -->";

static HEAD_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)</head[ \t\r\n]*>").expect("head pattern is valid"));

/// Result of injecting into one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Injection {
    /// New page content.
    Injected(String),
    /// Block already present and identical.
    Unchanged,
    /// No `</head>` in the page.
    NoHead,
}

/// Injects a fixed, marked block into page heads.
#[derive(Debug, Clone)]
pub struct HeadInjector {
    block: String,
}

impl HeadInjector {
    pub fn new(tags: &[HeadTag]) -> Self {
        Self {
            block: format!("{BLOCK_START}\n{}\n{BLOCK_END}", render_all(tags)),
        }
    }

    pub fn inject(&self, html: &str) -> Injection {
        if let Some((start, end)) = find_block(html) {
            if html[start..end] == self.block {
                return Injection::Unchanged;
            }
            let mut out = String::with_capacity(html.len() + self.block.len());
            out.push_str(&html[..start]);
            out.push_str(&self.block);
            out.push_str(&html[end..]);
            return Injection::Injected(out);
        }

        let Some(close) = HEAD_CLOSE.find(html) else {
            return Injection::NoHead;
        };

        let mut out = String::with_capacity(html.len() + self.block.len() + 1);
        out.push_str(&html[..close.start()]);
        out.push_str(&self.block);
        out.push('\n');
        out.push_str(&html[close.start()..]);
        Injection::Injected(out)
    }
}

/// Byte range of an existing marked block, end marker included.
fn find_block(html: &str) -> Option<(usize, usize)> {
    let start = html.find(BLOCK_START)?;
    let end = html[start..].find(BLOCK_END)? + start + BLOCK_END.len();
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn injector() -> HeadInjector {
        HeadInjector::new(&[
            HeadTag::preconnect("https://m.example.org/"),
            HeadTag::inline_script("x();".into()),
        ])
    }

    #[test]
    fn test_inject_before_head_close() {
        let html = "<html><head><title>Docs</title></head><body></body></html>";
        let Injection::Injected(out) = injector().inject(html) else {
            panic!("expected injection");
        };
        assert_eq!(
            out,
            "<html><head><title>Docs</title><!-- sitetag:start -->\n<link rel=\"preconnect\" href=\"https://m.example.org/\">\n<script>x();</script>\n<!-- sitetag:end -->\n</head><body></body></html>"
        );
    }

    #[test]
    fn test_head_close_case_insensitive() {
        let html = "<HTML><HEAD></HEAD ></HTML>";
        let Injection::Injected(out) = injector().inject(html) else {
            panic!("expected injection");
        };
        assert!(out.ends_with("<!-- sitetag:end -->\n</HEAD ></HTML>"));
    }

    #[test]
    fn test_no_head() {
        assert_eq!(injector().inject("<p>fragment</p>"), Injection::NoHead);
    }

    #[test]
    fn test_second_run_is_unchanged() {
        let injector = injector();
        let Injection::Injected(once) = injector.inject("<head></head>") else {
            panic!("expected injection");
        };
        assert_eq!(injector.inject(&once), Injection::Unchanged);
    }

    #[test]
    fn test_changed_tags_replace_block() {
        let Injection::Injected(once) = injector().inject("<head><title>T</title></head>") else {
            panic!("expected injection");
        };

        let other = HeadInjector::new(&[HeadTag::inline_script("y();".into())]);
        let Injection::Injected(twice) = other.inject(&once) else {
            panic!("expected replacement");
        };
        assert_eq!(twice.matches(BLOCK_START).count(), 1);
        assert!(!twice.contains("x();"));
        assert!(!twice.contains("preconnect"));
        assert_eq!(
            twice,
            "<head><title>T</title><!-- sitetag:start -->\n<script>y();</script>\n<!-- sitetag:end -->\n</head>"
        );
    }

    #[test]
    fn test_only_first_head_close() {
        let html = "<head></head><template><head></head></template>";
        let Injection::Injected(out) = injector().inject(html) else {
            panic!("expected injection");
        };
        assert_eq!(out.matches("<script>x();</script>").count(), 1);
        assert!(out.starts_with("<head><!-- sitetag:start -->\n<link"));
    }
}
