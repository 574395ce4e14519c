/*!
 * File discovery for CtxCat
 *
 * Enumerates candidate files under the root directory. Filtering beyond
 * dot-component pruning happens later in the filter chain.
 */

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Check whether an entry's own name begins with a dot
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_string_lossy()
        .starts_with('.')
}

/// Enumerate all regular files under `root`, recursively.
///
/// Any entry whose path contains a component beginning with `.` is pruned
/// at traversal level, so hidden directories are never descended into.
/// Entries that vanish between enumeration and inspection (broken symlinks,
/// races) are silently skipped. Traversal order is not guaranteed; callers
/// sort the result.
pub fn discover(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
}

/// The path of `path` relative to `root`, with `/` separators.
///
/// Falls back to the full path when `path` is not under `root`.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let s = rel.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        s.to_string()
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
