//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Analytics head-tag injection for static sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitetag.toml)
    #[arg(short = 'C', long, global = true, default_value = "sitetag.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented sitetag.toml into the current directory
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the config and register the analytics plugin
    #[command(visible_alias = "c")]
    Check,

    /// Print the head tags every page receives
    #[command(visible_alias = "t")]
    Tags {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = TagFormat::Html)]
        format: TagFormat,

        #[command(flatten)]
        mode: ModeArgs,
    },

    /// Print the client modules loaded into every page
    #[command(visible_alias = "m")]
    Modules {
        #[command(flatten)]
        mode: ModeArgs,
    },

    /// Inject head tags into the generated site
    Inject {
        /// Generated site directory (relative to project root)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,

        #[command(flatten)]
        mode: ModeArgs,
    },
}

/// Output format for `tags`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFormat {
    /// Ready-to-paste HTML
    Html,
    /// Tag descriptors for host frameworks
    Json,
}

/// Release mode override shared by commands that depend on it.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct ModeArgs {
    /// Production release: load client tracking modules
    #[arg(short, long, conflicts_with = "dev")]
    pub release: bool,

    /// Development / preview build: no client tracking modules
    #[arg(short, long)]
    pub dev: bool,
}

impl ModeArgs {
    /// `None` when neither flag is given.
    pub const fn release(&self) -> Option<bool> {
        match (self.release, self.dev) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inject_release() {
        let cli = Cli::try_parse_from(["sitetag", "inject", "--release", "-o", "build"]).unwrap();
        let Commands::Inject { output, mode } = cli.command else {
            panic!("expected inject");
        };
        assert_eq!(output, Some(PathBuf::from("build")));
        assert_eq!(mode.release(), Some(true));
        assert_eq!(cli.config, PathBuf::from("sitetag.toml"));
    }

    #[test]
    fn test_parse_tags_json_dev() {
        let cli = Cli::try_parse_from(["sitetag", "tags", "--format", "json", "--dev"]).unwrap();
        let Commands::Tags { format, mode } = cli.command else {
            panic!("expected tags");
        };
        assert_eq!(format, TagFormat::Json);
        assert_eq!(mode.release(), Some(false));
    }

    #[test]
    fn test_mode_flags_conflict() {
        assert!(Cli::try_parse_from(["sitetag", "modules", "--release", "--dev"]).is_err());
    }

    #[test]
    fn test_no_mode_flag() {
        let cli = Cli::try_parse_from(["sitetag", "-C", "site.toml", "modules"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(matches!(cli.command, Commands::Modules { mode } if mode.release().is_none()));
    }
}
