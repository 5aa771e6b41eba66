//! Page discovery in the generated site.

use jwalk::WalkDir;
use std::path::{Path, PathBuf};

/// File extensions treated as pages.
const PAGE_EXTENSIONS: &[&str] = &["html", "htm"];

/// Collect every page below `dir`, sorted for stable reporting.
///
/// `skip` (the client module directory) is never descended into.
pub fn collect_pages(dir: &Path, skip: &Path) -> Vec<PathBuf> {
    let mut pages: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| !path.starts_with(skip))
        .filter(|path| is_page(path))
        .collect();
    pages.sort();
    pages
}

fn is_page(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PAGE_EXTENSIONS.iter().any(|p| ext.eq_ignore_ascii_case(p)))
}
