//! Template types for typed variable injection.
//!
//! Placeholders look like `__NAME__`. Substitution is a single pass over
//! the template, so substituted values are never scanned again.

use std::borrow::Cow;
use std::marker::PhantomData;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"__([A-Z0-9]+(?:_[A-Z0-9]+)*)__").expect("placeholder pattern is valid")
});

/// Trait for template variable sets
pub trait TemplateVars {
    /// Value for placeholder `name`, or `None` to leave it untouched.
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        PLACEHOLDER
            .replace_all(self.content, |caps: &Captures<'_>| match vars.lookup(&caps[1]) {
                Some(value) => value.into_owned(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
