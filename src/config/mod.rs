//! Site configuration management for `sitetag.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── analytics  # [analytics]
//! │   ├── build      # [build]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The loaded `SiteConfig` is passed explicitly to whatever needs it; there
//! is no process-wide handle.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{AnalyticsConfig, BuildSectionConfig, SiteSectionConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::{Cli, Commands};
use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitetag.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Collector settings; `None` when the section is missing entirely
    #[serde(default)]
    pub analytics: Option<AnalyticsConfig>,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root is
    /// the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match find_config_file(&cli.config) {
            Some(path) => path,
            None => {
                return Err(ConfigError::Validation(format!(
                    "config file '{}' not found, run 'sitetag init' to create one",
                    cli.config.display()
                ))
                .into());
            }
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = crate::utils::path::normalize_path(&config_path);
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Resolve root, apply CLI overrides, normalize paths.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.root = root;
        self.apply_command_options(cli);
        self.build.output = crate::utils::path::normalize_path(&self.root.join(&self.build.output));
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Directory that receives client modules.
    pub fn module_dir(&self) -> PathBuf {
        self.build.output.join(&self.build.module_dir)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        match &cli.command {
            Commands::Inject { output, mode } => {
                Self::update_option(&mut self.build.output, output.as_ref());
                Self::update_release(&mut self.build.release, mode.release());
            }
            Commands::Tags { mode, .. } | Commands::Modules { mode } => {
                Self::update_release(&mut self.build.release, mode.release());
            }
            Commands::Check | Commands::Init { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    fn update_release(config_option: &mut Option<bool>, cli_option: Option<bool>) {
        if cli_option.is_some() {
            *config_option = cli_option;
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once. Presence of
    /// the analytics section and its required keys is checked by plugin
    /// registration instead.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        if let Some(analytics) = &self.analytics {
            analytics.validate(&mut diag);
        }

        diag.print_hints();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a config snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ModeArgs;

    fn cli_for(config: &Path, command: Commands) -> Cli {
        Cli {
            color: clap::ColorChoice::Never,
            config: config.to_path_buf(),
            verbose: false,
            command,
        }
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result: Result<SiteConfig, _> = toml::from_str("[site\nurl = \"https://docs.example.org/\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert!(config.site.url.is_none());
        assert!(config.analytics.is_none());
        assert_eq!(config.build.output, PathBuf::from("public"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[analytics]\nmatomo_url = \"https://m.example.org/\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert!(config.analytics.is_some());
        assert!(ignored.iter().any(|f| f.contains("title")));
        assert!(ignored.iter().any(|f| f.contains("matomo_url")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored("[site]\nurl = \"https://docs.example.org/\"").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_resolves_output_and_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("sitetag.toml");
        fs::write(
            &config_path,
            "[site]\nurl = \"https://docs.example.org/\"\n[build]\noutput = \"build\"\nrelease = false",
        )
        .unwrap();

        let cli = cli_for(
            &config_path,
            Commands::Inject {
                output: None,
                mode: ModeArgs {
                    release: true,
                    dev: false,
                },
            },
        );
        let config = SiteConfig::load(&cli).unwrap();

        assert!(config.build.output.ends_with("build"));
        assert!(config.build.output.is_absolute());
        assert_eq!(config.build.release, Some(true));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(&dir.path().join("missing.toml"), Commands::Check);
        let err = SiteConfig::load(&cli).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_reports_invalid_collector_url() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("sitetag.toml");
        fs::write(
            &config_path,
            "[analytics]\ncollector_url = \"not a url\"\nsite_id = \"2\"",
        )
        .unwrap();

        let cli = cli_for(&config_path, Commands::Check);
        assert!(SiteConfig::load(&cli).is_err());
    }
}
