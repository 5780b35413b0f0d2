//! The include directive record produced by the scanner.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::FilePath;

/// A single `#include` line found in a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncludeDirective {
    /// The path as written between the delimiters (relative or absolute)
    pub included_file: FilePath,
    /// The file containing the directive
    pub including_file: FilePath,
    /// Line number (1-indexed)
    pub line_number: usize,
    /// `true` for `<...>`, `false` for `"..."`
    pub uses_angle_brackets: bool,
}

impl IncludeDirective {
    /// Create a directive record.
    #[must_use]
    pub fn new(
        included_file: FilePath,
        including_file: FilePath,
        line_number: usize,
        uses_angle_brackets: bool,
    ) -> Self {
        debug_assert!(line_number > 0, "line numbers should be 1-indexed");
        Self {
            included_file,
            including_file,
            line_number,
            uses_angle_brackets,
        }
    }

    /// The included path wrapped in its original delimiters.
    #[must_use]
    pub fn spelled(&self) -> String {
        if self.uses_angle_brackets {
            format!("<{}>", self.included_file)
        } else {
            format!("\"{}\"", self.included_file)
        }
    }
}

impl fmt::Display for IncludeDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: cannot resolve include {}",
            self.including_file,
            self.line_number,
            self.spelled()
        )
    }
}
