use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// One row of a directory listing, read fresh from the filesystem.
#[derive(Clone, Debug)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    /// `None` for directories; a directory has no meaningful byte size here.
    pub size: Option<u64>,
    pub modified: SystemTime,
    pub extension: String,
}

impl FileEntry {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let metadata = fs::metadata(&path).ok()?;
        let name = path.file_name()?.to_string_lossy().to_string();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let is_dir = metadata.is_dir();
        let size = if is_dir { None } else { Some(metadata.len()) };
        let modified = metadata.modified().unwrap_or_else(|_| SystemTime::now());

        Some(Self {
            path,
            name,
            is_dir,
            size,
            modified,
            extension,
        })
    }

    /// The Type column: "Folder", "RS File", or plain "File" when there is
    /// no extension.
    pub fn kind(&self) -> String {
        if self.is_dir {
            "Folder".to_string()
        } else if self.extension.is_empty() {
            "File".to_string()
        } else {
            format!("{} File", self.extension.to_uppercase())
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.is_dir {
            return "📁";
        }
        match self.extension.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" => "🖼",
            "mp4" | "mkv" | "mov" | "avi" | "webm" => "🎞",
            "mp3" | "wav" | "flac" | "ogg" | "m4a" => "🎵",
            "zip" | "tar" | "gz" | "7z" | "rar" | "xz" | "bz2" => "🗜",
            "exe" | "msi" | "sh" | "bat" | "cmd" => "⚙",
            _ => "📄",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool, extension: &str) -> FileEntry {
        FileEntry {
            path: PathBuf::from(name),
            name: name.to_string(),
            is_dir,
            size: if is_dir { None } else { Some(0) },
            modified: SystemTime::now(),
            extension: extension.to_string(),
        }
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(entry("src", true, "").kind(), "Folder");
        assert_eq!(entry("main.rs", false, "rs").kind(), "RS File");
        assert_eq!(entry("Makefile", false, "").kind(), "File");
    }

    #[test]
    fn test_directories_have_no_size() {
        assert_eq!(entry("src", true, "").size, None);
        assert!(entry("main.rs", false, "rs").size.is_some());
    }
}
