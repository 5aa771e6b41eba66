//! Client-side modules shipped to the browser.

use serde::Serialize;

use crate::embed::client::TRACK_JS;

/// A script loaded into every rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClientModule {
    /// Stable identifier reported to hosts.
    pub name: &'static str,
    /// File name inside the module directory.
    pub file_name: &'static str,
    #[serde(skip)]
    pub source: &'static str,
}

/// Route-change tracking bootstrap.
pub const TRACKER: ClientModule = ClientModule {
    name: "sitetag/track",
    file_name: "track.js",
    source: TRACK_JS,
};
