//! Buffer: Pure data structure holding text content and file metadata
//! No cursor or viewport state (those belong to TextArea)
//!
//! Uses a ropey Rope so line lookups stay O(log n) on large files.

use ropey::Rope;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Files above this size trigger a warning when loaded
const HUGE_FILE_THRESHOLD: u64 = 500 * 1024 * 1024; // 500MB

/// Errors raised while loading or saving a buffer
#[derive(Debug, Error)]
pub enum BufferError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("File does not exist: {0}")]
    NotFound(PathBuf),
    #[error("Path is a directory, not a file: {0}")]
    IsDirectory(PathBuf),
    #[error("Cannot open device/special file: {0}")]
    SpecialFile(PathBuf),
    #[error("No filename set for buffer")]
    NoFilename,
    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

impl BufferError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        BufferError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Buffer: text plus the file it came from
#[derive(Debug, Default)]
pub struct Buffer {
    /// Text content stored in a Rope (O(log n) operations)
    rope: Rope,
    /// Filename (if loaded from or saved to a file)
    pub filename: Option<PathBuf>,
    /// Dirty flag (true if buffer has unsaved changes)
    pub modified: bool,
    /// Last modification time of the file on disk
    pub last_modified_time: Option<SystemTime>,
    /// Version counter, bumped on every mutation
    pub version: u64,
}

impl Buffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from a string
    pub fn from_string(content: impl AsRef<str>) -> Self {
        Self {
            rope: Rope::from_str(content.as_ref()),
            ..Self::default()
        }
    }

    /// Load a buffer from a file.
    ///
    /// A missing file yields an empty buffer bound to that path, so that the
    /// first save creates it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BufferError> {
        let path = path.as_ref();
        match Self::from_file(path) {
            Err(BufferError::NotFound(missing)) => {
                log::info!("new file: {}", missing.display());
                Ok(Self {
                    filename: Some(missing),
                    ..Self::default()
                })
            }
            other => other,
        }
    }

    /// Load a buffer from an existing file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BufferError> {
        let validated_path = Self::validate_file_path(path.as_ref())?;

        let metadata = fs::metadata(&validated_path)
            .map_err(|e| BufferError::io(&validated_path, e))?;
        let file_size = metadata.len();
        let modified_time = metadata.modified().ok();

        if file_size > HUGE_FILE_THRESHOLD {
            log::warn!(
                "file is very large ({:.1}MB), loading may be slow: {}",
                file_size as f64 / (1024.0 * 1024.0),
                validated_path.display()
            );
        }

        let rope = Self::read_rope(&validated_path)?;
        log::info!(
            "loaded {} ({} lines)",
            validated_path.display(),
            rope.len_lines()
        );

        Ok(Self {
            rope,
            filename: Some(validated_path),
            modified: false,
            last_modified_time: modified_time,
            version: 0,
        })
    }

    /// Stream a file into a rope, falling back to lossy decoding on invalid UTF-8
    fn read_rope(path: &Path) -> Result<Rope, BufferError> {
        let file = fs::File::open(path).map_err(|e| BufferError::io(path, e))?;
        let reader = std::io::BufReader::new(file);
        match Rope::from_reader(reader) {
            Ok(rope) => Ok(rope),
            Err(_) => {
                log::warn!("invalid UTF-8 in {}, decoding lossily", path.display());
                let bytes = fs::read(path).map_err(|e| BufferError::io(path, e))?;
                Ok(Rope::from_str(&String::from_utf8_lossy(&bytes)))
            }
        }
    }

    /// Validate file path and return an absolute path
    fn validate_file_path(path: &Path) -> Result<PathBuf, BufferError> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|e| BufferError::io(path, e))?
                .join(path)
        };

        if !path.exists() {
            return Err(BufferError::NotFound(path));
        }

        if path.is_dir() {
            return Err(BufferError::IsDirectory(path));
        }

        // Opening device files can hang the editor
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            let file_type = fs::metadata(&path)
                .map_err(|e| BufferError::io(&path, e))?
                .file_type();
            if file_type.is_block_device()
                || file_type.is_char_device()
                || file_type.is_fifo()
                || file_type.is_socket()
            {
                return Err(BufferError::SpecialFile(path));
            }
        }

        Ok(path)
    }

    // ==================== Content Access ====================

    /// Get total length in bytes
    pub fn len(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Get entire content as string
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    // ==================== Line Operations (O(log n) via Rope) ====================

    /// Number of lines, counting an empty trailing line after a final newline.
    /// Only `\n` ends a line; other Unicode separators stay inside it.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Byte offset of the start of a line
    pub fn line_to_byte(&self, line_idx: usize) -> Option<usize> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        Some(self.rope.line_to_byte(line_idx))
    }

    /// Content of a line without its line terminator
    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let s = self.rope.line(line_idx).to_string();
        let content = match s.strip_suffix('\n') {
            Some(line) => line.strip_suffix('\r').unwrap_or(line),
            None => &s,
        };
        Some(content.to_string())
    }

    // ==================== Editing Operations ====================

    /// Insert text at byte position
    pub fn insert(&mut self, pos: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let pos = pos.min(self.rope.len_bytes());
        let char_idx = self.rope.byte_to_char(pos);
        self.rope.insert(char_idx, text);
        self.mark_modified();
    }

    /// Insert a single character at byte position
    pub fn insert_char(&mut self, pos: usize, ch: char) {
        let pos = pos.min(self.rope.len_bytes());
        let char_idx = self.rope.byte_to_char(pos);
        self.rope.insert_char(char_idx, ch);
        self.mark_modified();
    }

    /// Delete `len` bytes starting at byte position
    pub fn delete(&mut self, pos: usize, len: usize) {
        if len == 0 || pos >= self.rope.len_bytes() {
            return;
        }
        let actual_len = len.min(self.rope.len_bytes() - pos);
        let start_char = self.rope.byte_to_char(pos);
        let end_char = self.rope.byte_to_char(pos + actual_len);
        self.rope.remove(start_char..end_char);
        self.mark_modified();
    }

    /// Replace the whole content
    pub fn set_content(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.mark_modified();
    }

    // ==================== File Operations ====================

    /// Save buffer to its file
    pub fn save(&mut self) -> Result<(), BufferError> {
        let path = self.filename.clone().ok_or(BufferError::NoFilename)?;

        // Write to a temp file in the same directory, then rename over the target
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| BufferError::io(&path, e))?;

        for chunk in self.rope.chunks() {
            temp_file
                .write_all(chunk.as_bytes())
                .map_err(|e| BufferError::io(&path, e))?;
        }
        temp_file.flush().map_err(|e| BufferError::io(&path, e))?;

        // Data must be on disk before the rename makes it visible
        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| BufferError::io(&path, e))?;

        temp_file
            .persist(&path)
            .map_err(|source| BufferError::Persist {
                path: path.clone(),
                source,
            })?;

        self.modified = false;
        self.last_modified_time = fs::metadata(&path).ok().and_then(|m| m.modified().ok());
        log::info!("saved {} ({} bytes)", path.display(), self.len());

        Ok(())
    }

    /// Save buffer to a specific file (save as)
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), BufferError> {
        self.filename = Some(path.as_ref().to_path_buf());
        self.save()
    }

    // ==================== State Management ====================

    fn mark_modified(&mut self) {
        self.modified = true;
        self.version += 1;
    }

    /// Filename for display
    pub fn display_name(&self) -> String {
        self.filename
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "[No Name]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer() {
        let buf = Buffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.line_count(), 1); // Empty buffer has 1 line
        assert!(!buf.modified);
    }

    #[test]
    fn test_insert_and_delete() {
        let mut buf = Buffer::new();
        buf.insert(0, "Hello, World!");
        assert_eq!(buf.text(), "Hello, World!");
        assert!(buf.modified);

        buf.delete(0, 7);
        assert_eq!(buf.text(), "World!");
    }

    #[test]
    fn test_line_operations() {
        let buf = Buffer::from_string("Line 1\nLine 2\nLine 3");

        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.line(0), Some("Line 1".to_string()));
        assert_eq!(buf.line(2), Some("Line 3".to_string()));
        assert_eq!(buf.line(3), None);

        assert_eq!(buf.line_to_byte(1), Some(7));
        assert_eq!(buf.line_to_byte(2), Some(14));
    }

    #[test]
    fn test_crlf_lines_are_trimmed() {
        let buf = Buffer::from_string("a\r\nb");
        assert_eq!(buf.line(0), Some("a".to_string()));
    }

    #[test]
    fn test_only_newline_breaks_lines() {
        let buf = Buffer::from_string("a\x0cb\rc\u{2028}d\ne\r");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line(0), Some("a\x0cb\rc\u{2028}d".to_string()));
        // A lone carriage return at the end is content, not a terminator
        assert_eq!(buf.line(1), Some("e\r".to_string()));
        assert_eq!(buf.line_to_byte(1), Some("a\x0cb\rc\u{2028}d\n".len()));
    }

    #[test]
    fn test_set_content_bumps_version() {
        let mut buf = Buffer::from_string("old");
        let before = buf.version;
        buf.set_content("new\ntext");
        assert_eq!(buf.text(), "new\ntext");
        assert_eq!(buf.line_count(), 2);
        assert!(buf.version > before);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");

        let mut buf = Buffer::from_string("first\nsecond\n");
        buf.save_as(&path).unwrap();
        assert!(!buf.modified);
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");

        let loaded = Buffer::from_file(&path).unwrap();
        assert_eq!(loaded.text(), "first\nsecond\n");
    }

    #[test]
    fn test_save_without_filename() {
        let mut buf = Buffer::from_string("x");
        assert!(matches!(buf.save(), Err(BufferError::NoFilename)));
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.txt");
        let buf = Buffer::open(&path).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.filename.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Buffer::from_file(dir.path()),
            Err(BufferError::IsDirectory(_))
        ));
    }

    #[test]
    fn test_load_file_with_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, b"Hello \xFF\xFE World").unwrap();

        let buffer = Buffer::from_file(&path).unwrap();
        let content = buffer.text();
        assert!(content.contains("Hello"));
        assert!(content.contains("World"));
    }
}
