use crate::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a multi-entry delete. Failures do not abort the rest of the
/// batch, so both sides can be populated at once.
pub struct DeleteReport {
    pub deleted: usize,
    pub failures: Vec<(PathBuf, std::io::Error)>,
}

impl DeleteReport {
    pub fn summary(&self) -> String {
        format!("Deleted {} item(s)", self.deleted)
    }

    /// One line per failed entry, for the error modal.
    pub fn failure_message(&self) -> Option<String> {
        if self.failures.is_empty() {
            return None;
        }
        let lines: Vec<String> = self
            .failures
            .iter()
            .map(|(path, err)| format!("{}: {}", path.display(), err))
            .collect();
        Some(lines.join("\n"))
    }
}

/// Delete each entry individually. Directories are removed non-recursively,
/// so a non-empty directory fails and stays; the remaining entries are
/// still attempted.
pub fn delete_entries(paths: &[PathBuf]) -> DeleteReport {
    let mut report = DeleteReport {
        deleted: 0,
        failures: Vec::new(),
    };

    for path in paths {
        let result = if path.is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        };
        match result {
            Ok(()) => {
                tracing::info!(path = %path.display(), "deleted");
                report.deleted += 1;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "delete failed");
                report.failures.push((path.clone(), e));
            }
        }
    }

    report
}

/// Open a file with the host's default application.
pub fn open_with_default(path: &Path) -> Result<(), AppError> {
    open::that(path).map_err(|source| AppError::Open {
        path: path.to_path_buf(),
        source,
    })
}
