//! Configuration utility types.
//!
//! - `error` - `ConfigError` and the `ConfigDiagnostics` collector
//! - `field` - type-safe `FieldPath` used by `#[derive(Config)]`

mod error;
mod field;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
