//! Search-directory flags for a compiler frontend.
//!
//! Inferred directories are meant to be appended to the argument list of a
//! later, more complete parse. Only the search-path flags are produced here;
//! the rest of the invocation belongs to the caller.

use serde::{Deserialize, Serialize};

use crate::path::FilePath;

/// How a directory is passed to the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchDirectoryKind {
    /// `-I<dir>`
    #[default]
    User,
    /// `-isystem <dir>`
    System,
    /// `-iframework <dir>`
    Framework,
}

/// Compiler flags adding `directories` to the search path.
pub fn search_directory_args<'a, I>(directories: I, kind: SearchDirectoryKind) -> Vec<String>
where
    I: IntoIterator<Item = &'a FilePath>,
{
    let mut args = Vec::new();
    for directory in directories {
        match kind {
            SearchDirectoryKind::User => args.push(format!("-I{directory}")),
            SearchDirectoryKind::System => {
                args.push("-isystem".to_string());
                args.push(directory.to_string());
            }
            SearchDirectoryKind::Framework => {
                args.push("-iframework".to_string());
                args.push(directory.to_string());
            }
        }
    }
    args
}
