//! Line-oriented access to file contents.

use std::fs;

use tracing::warn;

use crate::path::FilePath;

/// Supplies the text of a file as an ordered sequence of lines.
///
/// Returning `None` means the file is unreadable; callers treat that the same
/// as an empty file.
pub trait TextSource {
    /// Read all lines of `path`, without line terminators.
    fn read_lines(&self, path: &FilePath) -> Option<Vec<String>>;
}

/// Reads files from disk.
///
/// Content is decoded lossily: C and C++ sources are not guaranteed to be
/// UTF-8, and a stray Latin-1 comment must not hide the includes around it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemSource;

impl TextSource for FileSystemSource {
    fn read_lines(&self, path: &FilePath) -> Option<Vec<String>> {
        if !path.exists() {
            return None;
        }

        match fs::read(path.as_path()) {
            Ok(bytes) => Some(
                String::from_utf8_lossy(&bytes)
                    .lines()
                    .map(str::to_owned)
                    .collect(),
            ),
            Err(e) => {
                warn!(
                    file = %path,
                    error = %e,
                    "Cannot read file, treating as empty"
                );
                None
            }
        }
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn read_lines(&self, path: &FilePath) -> Option<Vec<String>> {
        (**self).read_lines(path)
    }
}
