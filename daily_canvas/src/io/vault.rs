//! Canvas lookup inside a vault directory.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Locate the canvas named `canvas_name` under `vault_root`.
///
/// A bare file name is matched against every file in the vault, depth-first
/// with siblings sorted by name, skipping hidden entries (`.obsidian`, `.git`,
/// `.trash`, the updater's own config directory). Entries that cannot be read
/// are logged and skipped. A name containing a path separator is taken as a
/// vault-relative path. Returns `None` if nothing matches.
pub fn find_canvas(vault_root: &Path, canvas_name: &str) -> Result<Option<PathBuf>> {
    if !vault_root.is_dir() {
        bail!("vault root {} is not a directory", vault_root.display());
    }

    if canvas_name.contains('/') || canvas_name.contains('\\') {
        let candidate = vault_root.join(canvas_name);
        debug!(path = %candidate.display(), "checking vault-relative canvas path");
        return Ok(candidate.is_file().then_some(candidate));
    }

    let walker = WalkDir::new(vault_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(
                    vault = %vault_root.display(),
                    err = %err,
                    "skipping unreadable vault entry"
                );
                continue;
            }
        };
        if entry.file_type().is_file() && entry.file_name() == canvas_name {
            debug!(path = %entry.path().display(), "canvas found");
            return Ok(Some(entry.into_path()));
        }
    }
    debug!(canvas_name, vault = %vault_root.display(), "canvas not found");
    Ok(None)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
