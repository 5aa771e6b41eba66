//! Command-line interface module.

mod args;
pub mod init;
pub mod inject;
pub mod show;

pub use args::{Cli, Commands, TagFormat};
#[cfg(test)]
pub use args::ModeArgs;
