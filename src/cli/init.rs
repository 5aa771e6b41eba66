//! `sitetag init`: configuration file generation.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::{AnalyticsConfig, BuildSectionConfig, SiteSectionConfig};
use crate::log;

/// Generate sitetag.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# sitetag configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    out.push_str(&AnalyticsConfig::template_with_header());
    out.push('\n');

    out.push_str(&BuildSectionConfig::template_with_header());

    out
}

/// Write the default config to `path`.
pub fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::plugin::AnalyticsPlugin;

    #[test]
    fn test_template_sections() {
        let template = generate_config_template();
        assert!(template.contains("[site]"));
        assert!(template.contains("[analytics]"));
        assert!(template.contains("[build]"));
    }

    #[test]
    fn test_template_registers() {
        let config = SiteConfig::from_str(&generate_config_template()).unwrap();
        assert!(AnalyticsPlugin::register(&config).is_ok());
    }

    #[test]
    fn test_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitetag.toml");
        fs::write(&path, "# mine").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        write_config(&path, true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[analytics]"));
    }
}
