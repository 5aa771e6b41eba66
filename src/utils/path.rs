//! Path normalization utilities.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Turn a relative file system path into a root-relative URL path.
///
/// `_sitetag/track.js` -> `/_sitetag/track.js`
pub fn to_url_path(path: &Path) -> String {
    let mut url = String::new();
    for component in path.components() {
        if let std::path::Component::Normal(part) = component {
            url.push('/');
            url.push_str(&part.to_string_lossy());
        }
    }
    if url.is_empty() {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let normalized = normalize_path(Path::new("/absolute/path/file.txt"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.txt"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_to_url_path() {
        assert_eq!(to_url_path(Path::new("_sitetag/track.js")), "/_sitetag/track.js");
        assert_eq!(to_url_path(Path::new("./assets/a.js")), "/assets/a.js");
        assert_eq!(to_url_path(Path::new("")), "/");
    }
}
