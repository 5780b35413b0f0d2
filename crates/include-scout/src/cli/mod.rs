//! CLI command implementations.

mod display;

pub mod infer;
pub mod init;
pub mod project;
pub mod unresolved;
