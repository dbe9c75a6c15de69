use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::types::{BOOTSTRAP_FILE, ModuleId, SOURCE_SUFFIX};

/// Build a globset from user patterns. Invalid globs are reported and skipped.
pub fn build_globset(patterns: &[String]) -> Option<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let mut added = false;
    for pat in patterns {
        if pat.trim().is_empty() {
            continue;
        }
        match Glob::new(pat) {
            Ok(glob) => {
                builder.add(glob);
                added = true;
            }
            Err(err) => eprintln!("[screq][warn] invalid glob '{}': {}", pat, err),
        }
    }
    if !added { None } else { builder.build().ok() }
}

/// Whether a path is an eligible source file: right suffix, not the bootstrap.
pub fn is_source_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name == BOOTSTRAP_FILE {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == SOURCE_SUFFIX)
}

/// Every eligible regular file under `root`, in directory-traversal order.
///
/// Fails fast when `root` is missing or not a directory; the caller treats
/// that as a configuration error, not a partial result.
pub fn source_files(root: &Path, ignore: Option<&GlobSet>) -> io::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", root.display()),
        ));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if !is_source_file(&path) {
            continue;
        }
        if let Some(set) = ignore {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            if set.is_match(relative) {
                continue;
            }
        }
        files.push(path);
    }
    Ok(files)
}

/// Module identifier for a file: root-relative path, `/`-separated, suffix
/// stripped. `None` when the file is not under `root` or has the wrong suffix.
pub fn module_id(path: &Path, root: &Path) -> Option<ModuleId> {
    let relative = path.strip_prefix(root).ok()?;
    let mut parts: Vec<&str> = Vec::new();
    for component in relative.components() {
        parts.push(component.as_os_str().to_str()?);
    }
    let joined = parts.join("/");
    let suffix = format!(".{SOURCE_SUFFIX}");
    joined.strip_suffix(suffix.as_str()).map(|s| s.to_string())
}
