//! The path value type shared by every stage of include processing.
//!
//! `FilePath` wraps a `PathBuf` and adds the handful of operations include
//! resolution needs: concatenation that never escapes the left-hand side,
//! canonicalization that degrades gracefully for missing files, and an
//! ancestor test.
//!
//! ## Ordering
//!
//! Paths are ordered (and compared for equality) by the bytes of their string
//! form, not component-wise. Sets of `FilePath` therefore iterate in plain
//! lexicographic order, which is what quantile assignment and first-match
//! tie-breaking rely on.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// An immutable file system path with a total, string-based order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilePath {
    path: PathBuf,
}

impl FilePath {
    /// Create a path value.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Borrow the underlying path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Consume the value and return the underlying path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }

    /// Returns `true` for the empty path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.as_os_str().is_empty()
    }

    /// Returns `true` if the path has a root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.path.is_absolute()
    }

    /// Returns `true` if something (file or directory) exists at this path.
    #[must_use]
    pub fn exists(&self) -> bool {
        !self.is_empty() && self.path.exists()
    }

    /// The directory containing this path, or the empty path if there is none.
    #[must_use]
    pub fn parent_directory(&self) -> Self {
        self.path.parent().map(Self::new).unwrap_or_default()
    }

    /// The final component of the path, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// Append `other` below this path.
    ///
    /// Unlike [`Path::join`], a root or prefix on `other` is dropped, so the
    /// result always lies below `self`.
    #[must_use]
    pub fn concatenate(&self, other: &FilePath) -> Self {
        let mut joined = self.path.clone();
        for component in other.path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {}
                _ => joined.push(component),
            }
        }
        Self { path: joined }
    }

    /// This path made absolute against the current directory.
    ///
    /// Purely lexical; symlinks and `..` are left alone. Returns the path
    /// unchanged if the current directory is unavailable.
    #[must_use]
    pub fn absolute(&self) -> Self {
        if self.is_absolute() || self.is_empty() {
            return self.clone();
        }
        std::path::absolute(&self.path).map_or_else(|_| self.clone(), Self::new)
    }

    /// The canonical form of this path.
    ///
    /// Existing paths are canonicalized by the file system (symlinks
    /// resolved). Paths that cannot be canonicalized that way are made
    /// absolute and lexically normalized instead, so two spellings of the
    /// same missing file still compare equal.
    #[must_use]
    pub fn canonicalize(&self) -> Self {
        if self.is_empty() {
            return Self::default();
        }
        match std::fs::canonicalize(&self.path) {
            Ok(canonical) => Self::new(canonical),
            Err(_) => self.absolute().normalized(),
        }
    }

    /// Lexically remove `.` components and fold `..` into their parent.
    ///
    /// A `..` that would climb above the root is dropped; a leading `..` on a
    /// relative path is kept.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut out = PathBuf::new();
        for component in self.path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => match out.components().next_back() {
                    Some(Component::Normal(_)) => {
                        out.pop();
                    }
                    Some(Component::RootDir | Component::Prefix(_)) => {}
                    Some(Component::ParentDir | Component::CurDir) | None => {
                        out.push(component);
                    }
                },
                _ => out.push(component),
            }
        }
        Self { path: out }
    }

    /// Returns `true` if `other` is this path or lies below it.
    ///
    /// Both sides are normalized lexically before comparing components, so
    /// callers wanting symlink-aware answers should pass canonical paths.
    #[must_use]
    pub fn contains(&self, other: &FilePath) -> bool {
        if self.is_empty() {
            return false;
        }
        other
            .normalized()
            .path
            .starts_with(self.normalized().path)
    }

    /// The path as a (lossily decoded) string.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl PartialEq for FilePath {
    fn eq(&self, other: &Self) -> bool {
        self.path.as_os_str() == other.path.as_os_str()
    }
}

impl Eq for FilePath {}

impl Hash for FilePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.as_os_str().hash(state);
    }
}

impl PartialOrd for FilePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FilePath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.as_os_str().cmp(other.path.as_os_str())
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for FilePath {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
