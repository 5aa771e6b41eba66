//! Build mode: production release vs development/preview.

/// Environment variable consulted when neither CLI nor config decide.
pub const MODE_ENV: &str = "NODE_ENV";

/// Build mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMode {
    /// Whether this is a production release.
    /// Only releases load client-side tracking modules.
    pub release: bool,
}

impl BuildMode {
    /// Production release.
    pub const PRODUCTION: Self = Self { release: true };

    /// Development / preview build.
    pub const DEVELOPMENT: Self = Self { release: false };

    /// Resolve the mode from an explicit override, falling back to `NODE_ENV`.
    ///
    /// The override is `[build] release` after CLI flags were applied.
    pub fn resolve(explicit: Option<bool>) -> Self {
        let env = std::env::var(MODE_ENV).ok();
        Self::resolve_with(explicit, env.as_deref())
    }

    /// Pure form of [`BuildMode::resolve`].
    pub fn resolve_with(explicit: Option<bool>, env: Option<&str>) -> Self {
        let release = explicit.unwrap_or_else(|| env.is_some_and(|v| v.trim() == "production"));
        if release { Self::PRODUCTION } else { Self::DEVELOPMENT }
    }

    pub const fn label(&self) -> &'static str {
        if self.release { "release" } else { "development" }
    }
}
