//! Directory scanning utilities for discovering image files.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Error;

/// Options controlling directory scanning.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Allowed extensions (lowercase, without dot).
    pub extensions: Vec<String>,
}

/// Return `true` if `path` has one of the allowed extensions.
#[must_use]
pub fn is_supported_image(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            extensions.iter().any(|e| *e == ext)
        })
}

/// Scan `root` for image files, sorted by path so input order is stable
/// between runs.
///
/// # Errors
/// Returns [`Error::BadDir`] if `root` is missing or not a directory.
pub fn scan_folder(root: &Path, opts: &ScanOptions) -> Result<Vec<PathBuf>, Error> {
    if !root.exists() || !root.is_dir() {
        return Err(Error::BadDir(root.to_string_lossy().into_owned()));
    }

    let mut wd = WalkDir::new(root);
    if !opts.recursive {
        wd = wd.max_depth(1);
    }

    let mut out = Vec::new();
    for entry in wd
        .into_iter()
        // Skip hidden dot-directories *below* the root only.
        .filter_entry(|e| !should_skip_dir(e))
        .flatten()
    {
        let path = entry.path();
        if path.is_file() && is_supported_image(path, &opts.extensions) {
            out.push(path.to_path_buf());
        }
    }
    out.sort();

    Ok(out)
}

fn should_skip_dir(entry: &DirEntry) -> bool {
    // Never skip the root; tempfile roots can be dot-dirs.
    if entry.depth() == 0 {
        return false;
    }
    if !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|n| n.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        vec!["png".into(), "jpg".into()]
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(is_supported_image(Path::new("a/B.PNG"), &exts()));
        assert!(is_supported_image(Path::new("c.jpg"), &exts()));
        assert!(!is_supported_image(Path::new("c.txt"), &exts()));
        assert!(!is_supported_image(Path::new("noext"), &exts()));
    }

    #[test]
    fn missing_folder_is_bad_dir() {
        let opts = ScanOptions {
            recursive: false,
            extensions: exts(),
        };
        let err = scan_folder(Path::new("/definitely/not/here"), &opts).unwrap_err();
        assert!(matches!(err, Error::BadDir(_)));
    }
}
