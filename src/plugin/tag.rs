//! Head markup descriptors.

use serde::{Serialize, Serializer};

use crate::utils::html;

/// Element kind of a head fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagName {
    Link,
    Script,
}

impl TagName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Script => "script",
        }
    }
}

/// One fragment to merge into every page's `<head>`.
///
/// Attribute order is preserved so rendering is byte-for-byte stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadTag {
    pub tag_name: TagName,
    #[serde(serialize_with = "ordered_map")]
    pub attributes: Vec<(String, String)>,
    #[serde(rename = "innerHTML", skip_serializing_if = "Option::is_none")]
    pub inner_html: Option<String>,
}

impl HeadTag {
    /// `<link rel="preconnect" href="...">`
    pub fn preconnect(href: &str) -> Self {
        Self {
            tag_name: TagName::Link,
            attributes: vec![
                ("rel".into(), "preconnect".into()),
                ("href".into(), href.into()),
            ],
            inner_html: None,
        }
    }

    /// Inline `<script>` with trusted content.
    pub fn inline_script(content: String) -> Self {
        Self {
            tag_name: TagName::Script,
            attributes: Vec::new(),
            inner_html: Some(content),
        }
    }

    /// External deferred `<script src="..." defer>`.
    pub fn deferred_script(src: &str) -> Self {
        Self {
            tag_name: TagName::Script,
            attributes: vec![("src".into(), src.into()), ("defer".into(), String::new())],
            inner_html: None,
        }
    }

    /// Render as HTML. Empty attribute values render as boolean attributes.
    pub fn to_html(&self) -> String {
        let name = self.tag_name.as_str();
        let mut out = format!("<{name}");
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            if !value.is_empty() {
                out.push_str("=\"");
                out.push_str(&html::escape_attr(value));
                out.push('"');
            }
        }
        out.push('>');

        if html::is_void_element(name) {
            return out;
        }
        // Script content is raw text, it must not be entity-escaped.
        if let Some(inner) = &self.inner_html {
            out.push_str(inner);
        }
        out.push_str("</");
        out.push_str(name);
        out.push('>');
        out
    }
}

fn ordered_map<S: Serializer>(attrs: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(attrs.iter().map(|(k, v)| (k, v)))
}

/// Render a tag sequence, one tag per line.
pub fn render_all(tags: &[HeadTag]) -> String {
    tags.iter()
        .map(HeadTag::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preconnect_html() {
        assert_eq!(
            HeadTag::preconnect("https://m.example.org/").to_html(),
            r#"<link rel="preconnect" href="https://m.example.org/">"#
        );
    }

    #[test]
    fn test_inline_script_is_not_escaped() {
        let tag = HeadTag::inline_script("var a = \"<b>\" && 1;".into());
        assert_eq!(tag.to_html(), "<script>var a = \"<b>\" && 1;</script>");
    }

    #[test]
    fn test_deferred_script_boolean_attribute() {
        assert_eq!(
            HeadTag::deferred_script("/_sitetag/track.js").to_html(),
            r#"<script src="/_sitetag/track.js" defer></script>"#
        );
    }

    #[test]
    fn test_attribute_escaping() {
        let tag = HeadTag::preconnect("https://m.example.org/?a=1&b=\"2\"");
        assert!(tag.to_html().contains("href=\"https://m.example.org/?a=1&amp;b=&quot;2&quot;\""));
    }

    #[test]
    fn test_json_descriptor() {
        let json = serde_json::to_string(&HeadTag::preconnect("https://m.example.org/")).unwrap();
        assert_eq!(
            json,
            r#"{"tagName":"link","attributes":{"rel":"preconnect","href":"https://m.example.org/"}}"#
        );

        let json = serde_json::to_string(&HeadTag::inline_script("x();".into())).unwrap();
        assert_eq!(json, r#"{"tagName":"script","attributes":{},"innerHTML":"x();"}"#);
    }
}
