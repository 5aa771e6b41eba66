//! Utility modules.

pub mod html;
pub mod js;
pub mod path;
