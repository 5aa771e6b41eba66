//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"        # generated site to inject into
//! release = true           # force release mode (overrides NODE_ENV)
//! module_dir = "_sitetag"  # where client modules are written inside output
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Component, PathBuf};

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildSectionConfig {
    /// Generated site directory whose pages receive the head tags.
    #[config(default = "public")]
    pub output: PathBuf,

    /// Release mode override. Unset means: follow `NODE_ENV`.
    pub release: Option<bool>,

    /// Directory (inside output) that receives client modules.
    #[config(default = "_sitetag")]
    pub module_dir: PathBuf,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            release: None,
            module_dir: "_sitetag".into(),
        }
    }
}

impl BuildSectionConfig {
    /// `module_dir` is joined onto the output directory, so it must stay inside it.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let escapes = self.module_dir.is_absolute()
            || self
                .module_dir
                .components()
                .any(|c| matches!(c, Component::ParentDir));
        if escapes {
            diag.error_with_hint(
                Self::FIELDS.module_dir,
                format!(
                    "'{}' must be a relative path inside the output directory",
                    self.module_dir.display()
                ),
                "use a plain directory name like \"_sitetag\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.module_dir, PathBuf::from("_sitetag"));
        assert!(config.build.release.is_none());
    }

    #[test]
    fn test_custom() {
        let config = test_parse_config("[build]\noutput = \"build\"\nrelease = true");
        assert_eq!(config.build.output, PathBuf::from("build"));
        assert_eq!(config.build.release, Some(true));
    }

    #[test]
    fn test_module_dir_must_stay_inside_output() {
        let config = test_parse_config("[build]\nmodule_dir = \"../outside\"");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field.as_str(), "build.module_dir");
    }
}
