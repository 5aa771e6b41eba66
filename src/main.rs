//! sitetag - Matomo analytics head-tag injection for static documentation sites.

mod cli;
mod config;
mod core;
mod embed;
mod logger;
mod pipeline;
mod plugin;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use core::BuildMode;
use plugin::AnalyticsPlugin;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // `init` creates the config, so it must not try to load one
    if let Commands::Init { force } = &cli.command {
        logger::set_verbose(cli.verbose);
        return cli::init::write_config(&cli.config, *force);
    }

    let config = SiteConfig::load(&cli)?;
    let plugin = AnalyticsPlugin::register(&config)?;
    let mode = BuildMode::resolve(config.build.release);
    debug!("main"; "{} mode", mode.label());

    match &cli.command {
        Commands::Check => cli::show::check(&config, &plugin),
        Commands::Tags { format, .. } => cli::show::tags(&config, &plugin, *format, mode),
        Commands::Modules { .. } => cli::show::modules(&plugin, mode),
        Commands::Inject { .. } => cli::inject::run(&config, &plugin, mode),
        Commands::Init { .. } => Ok(()),
    }
}
