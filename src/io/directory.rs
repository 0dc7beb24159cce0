use crate::entry::FileEntry;
use crate::error::AppError;
use std::fs;
use std::path::Path;

/// Read a directory listing: hidden entries excluded, directories first,
/// then case-insensitive alphabetical within each group.
pub fn read_directory(path: &Path) -> Result<Vec<FileEntry>, AppError> {
    let mut entries = Vec::new();
    let read_dir = fs::read_dir(path)?;

    for entry in read_dir.flatten() {
        let path = entry.path();
        if let Some(name) = path.file_name() {
            if is_hidden(&name.to_string_lossy()) {
                continue;
            }
        }
        if let Some(file_entry) = FileEntry::from_path(path) {
            entries.push(file_entry);
        }
    }

    entries.sort_by(|a, b| {
        if a.is_dir != b.is_dir {
            return b.is_dir.cmp(&a.is_dir);
        }
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    });

    tracing::debug!(path = %path.display(), count = entries.len(), "read directory");
    Ok(entries)
}

/// Subdirectories only, for the tree pane. Unreadable directories render
/// as empty branches instead of failing the whole tree.
pub fn read_subdirectories(path: &Path) -> Vec<FileEntry> {
    match read_directory(path) {
        Ok(entries) => entries.into_iter().filter(|e| e.is_dir).collect(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "unreadable tree branch");
            Vec::new()
        }
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
